pub mod config;
pub mod error;
pub mod time;

pub use config::AppConfig;
pub use error::{Error, Result};

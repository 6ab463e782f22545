mod core;
pub use self::core::{Message, Role, completion};

pub mod ai;
pub mod api;
pub mod cli;
pub mod core;
pub mod graph;
pub mod openai;

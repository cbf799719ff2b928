pub mod app;
pub mod canonicalize;
pub mod cli;
pub mod config;
pub mod feedback;
pub mod input_mode;
pub mod paths;
pub mod persistence;
pub mod render;
pub mod submission;

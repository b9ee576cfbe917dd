pub mod config;

pub use config::{Config, default_log_dir};

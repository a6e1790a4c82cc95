pub mod config;
pub mod datetime;
pub mod logging;
pub mod types;

pub use config::LogConfig;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Logging setup error: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;

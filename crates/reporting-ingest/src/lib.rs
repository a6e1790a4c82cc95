pub mod config;
pub mod job;
pub mod runner;
pub mod synthetic;

pub use config::IngestConfig;
pub use job::PeriodicJob;
pub use runner::JobRunner;
pub use synthetic::SyntheticOrderJob;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Database error: {0}")]
    Database(String),
}

impl From<reporting_db::DatabaseError> for IngestError {
    fn from(err: reporting_db::DatabaseError) -> Self {
        IngestError::Database(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;

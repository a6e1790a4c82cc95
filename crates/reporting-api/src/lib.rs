pub mod config;
pub mod error;
pub mod routes;
pub mod schemas;
pub mod server;

pub use config::ApiConfig;
pub use error::ApiError;
pub use routes::AppState;
pub use server::ApiServer;

pub type Result<T> = std::result::Result<T, ApiError>;

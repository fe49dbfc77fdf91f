pub mod app_config;
pub mod batch_size;
pub mod config;
pub mod records;

use thiserror::Error;

pub use app_config::AppConfig;
pub use batch_size::{BatchSize, BatchSizeError, MAX_BATCH_SIZE};
pub use config::{load_app_config, load_app_config_from_env};
pub use records::{Cursor, SearchRecord};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

pub mod config;
pub mod error;
pub mod logger;

// Re-export commonly used types
pub use config::{AppConfig, SegmenterKind};
pub use error::SkimmerError;
pub type Result<T> = std::result::Result<T, SkimmerError>;

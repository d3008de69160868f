pub mod errors;
pub mod structured_logging;

pub use errors::{
    ConfigError, LocationError, NetworkError, StorageError, WardrobeError, WardrobeResult,
};

pub use structured_logging::{
    init_structured_logging, JsonFormatter, LoggingConfig, OperationTimer, StructuredLogEntry,
};

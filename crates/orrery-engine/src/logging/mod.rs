//! Logging setup.
//!
//! Engine code only uses the `log` macros. The binary picks the backend;
//! `init_logging` wires `env_logger`.

mod init;

pub use init::{init_logging, LoggingConfig, DEFAULT_FILTER};

use thiserror::Error;

use dsnforge_core::{DescriptorError, SerializeError};

/// Errors emitted while building or emitting a declaration.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("value source returned {found} for {spec}, expected {expected}")]
    UnexpectedValue {
        spec: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("invalid schema: {0}")]
    Descriptor(#[from] DescriptorError),
    #[error("serialization failed: {0}")]
    Serialize(#[from] SerializeError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

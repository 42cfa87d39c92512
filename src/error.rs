//! Error types for the msdfgen-core library

use thiserror::Error;

/// Main error type for MSDF generation operations.
///
/// The geometry and generator code paths never fail on malformed shapes
/// (see degeneracy handling throughout `edge` and `generator`); this type
/// exists for host-facing misuse that the core treats as structural rather
/// than a runtime condition to recover from.
#[derive(Error, Debug)]
pub enum MsdfError {
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Channel mismatch: expected {expected} channel(s), got {actual}")]
    ChannelMismatch { expected: usize, actual: usize },

    #[error("Invalid transformation: {message}")]
    InvalidTransform { message: String },

    #[error("Algorithm error: {message}")]
    AlgorithmError { message: String },
}

impl MsdfError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    pub fn channel_mismatch(expected: usize, actual: usize) -> Self {
        Self::ChannelMismatch { expected, actual }
    }

    pub fn invalid_transform(message: impl Into<String>) -> Self {
        Self::InvalidTransform {
            message: message.into(),
        }
    }

    pub fn algorithm_error(message: impl Into<String>) -> Self {
        Self::AlgorithmError {
            message: message.into(),
        }
    }
}

/// Result type alias for convenience
pub type MsdfResult<T> = Result<T, MsdfError>;

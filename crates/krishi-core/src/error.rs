//! Error types for the Krishi Mitra core library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for conversation and tracker operations.
#[derive(Error, Debug)]
pub enum KrishiError {
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// A care plan already exists for the crop
    #[error("A plan for crop '{crop_name}' already exists")]
    DuplicatePlan { crop_name: String },
    /// Plan not found for the given ID
    #[error("Plan with ID {id} not found")]
    PlanNotFound { id: String },
    /// Completion requested for a day that is not the plan's active day
    #[error("Day {day} of plan {plan_id} is not the active day")]
    StepNotActive {
        plan_id: String,
        day: u8,
        active_day: Option<u8>,
    },
    /// The backend answered with a non-2xx status
    #[error("Backend error {status}: {body}")]
    Backend { status: u16, body: String },
    /// The request never produced a response (connection, body read, decode)
    #[error("Transport error: {message}")]
    Transport {
        message: String,
        #[source]
        source: reqwest::Error,
    },
    /// A device capability (microphone, speech) is missing
    #[error("{capability} is not available on this device")]
    CapabilityUnavailable { capability: String },
    /// A voice capture was started while another one is running
    #[error("A voice capture is already in progress")]
    CaptureInProgress,
    /// A voice capture was stopped while none was running
    #[error("No voice capture is in progress")]
    NoActiveCapture,
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Coarse classification of [`KrishiError`] values.
///
/// Validation errors become inline notices, transport errors are replaced by
/// an apology message in the conversation, capability errors become a
/// blocking alert. None of them is fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Transport,
    Capability,
    Configuration,
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> KrishiError {
        KrishiError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl KrishiError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Wraps a reqwest error with a short description of what failed.
    pub fn transport(message: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transport {
            message: message.into(),
            source,
        }
    }

    /// Creates a capability-unavailable error.
    pub fn unavailable(capability: impl Into<String>) -> Self {
        Self::CapabilityUnavailable {
            capability: capability.into(),
        }
    }

    /// Returns the error class used to decide how the failure is surfaced.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput { .. }
            | Self::DuplicatePlan { .. }
            | Self::PlanNotFound { .. }
            | Self::StepNotActive { .. }
            | Self::FileSystem { .. } => ErrorKind::Validation,
            Self::Backend { .. } | Self::Transport { .. } | Self::Serialization { .. } => {
                ErrorKind::Transport
            }
            Self::CapabilityUnavailable { .. } | Self::CaptureInProgress | Self::NoActiveCapture => {
                ErrorKind::Capability
            }
            Self::Configuration { .. } => ErrorKind::Configuration,
        }
    }
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, KrishiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = KrishiError::invalid_input("name").with_reason("must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'name': must not be empty"
        );
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_error_kinds() {
        let backend = KrishiError::Backend {
            status: 502,
            body: "bad gateway".to_string(),
        };
        assert_eq!(backend.kind(), ErrorKind::Transport);
        assert_eq!(backend.to_string(), "Backend error 502: bad gateway");

        assert_eq!(
            KrishiError::unavailable("Microphone").kind(),
            ErrorKind::Capability
        );
        assert_eq!(KrishiError::CaptureInProgress.kind(), ErrorKind::Capability);
        assert_eq!(
            KrishiError::DuplicatePlan {
                crop_name: "Rice".to_string()
            }
            .kind(),
            ErrorKind::Validation
        );
    }
}

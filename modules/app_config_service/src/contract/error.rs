//! Contract error types for the app config service
//!
//! These errors are transport-agnostic and shared by the editor, the domain
//! service, and the native client.

/// App config service domain errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Application not found in the catalog
    AppNotFound {
        /// Application identifier
        app_id: u32,
    },
    /// A list item toggle addressed a key that does not exist
    UnknownField {
        /// List-valued setting the key was looked up in
        list: String,
        /// Missing field key
        key: String,
    },
    /// Attempt to disable a field descriptor marked required
    RequiredFieldLocked {
        /// Field key
        key: String,
    },
    /// A commit is already in flight for this editor
    CommitInFlight,
    /// The configuration store rejected the save
    CommitFailed {
        /// Failure reason
        reason: String,
    },
    /// Internal error
    Internal,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AppNotFound { app_id } => {
                write!(f, "application not found: {}", app_id)
            }
            Self::UnknownField { list, key } => {
                write!(f, "unknown field '{}' in {}", key, list)
            }
            Self::RequiredFieldLocked { key } => {
                write!(f, "field '{}' is required and cannot be disabled", key)
            }
            Self::CommitInFlight => {
                write!(f, "a commit is already in flight")
            }
            Self::CommitFailed { reason } => {
                write!(f, "commit failed: {}", reason)
            }
            Self::Internal => {
                write!(f, "internal error")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

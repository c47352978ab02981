//! CLI error type.

use std::path::PathBuf;

use optfmt_core::ModelError;

#[derive(Debug)]
pub enum CliError {
    /// Reading the input document failed
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The input is not a valid model document
    Json(serde_json::Error),
    /// A function references a variable the document does not declare
    UnknownVariable { name: String },
    /// The model rejected part of the document
    Model(ModelError),
    /// Logging could not be configured
    Logging { reason: String },
}

impl CliError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Io { .. } => "INPUT_IO",
            CliError::Json(_) => "INPUT_INVALID_JSON",
            CliError::UnknownVariable { .. } => "DOCUMENT_UNKNOWN_VARIABLE",
            CliError::Model(err) => err.code(),
            CliError::Logging { .. } => "LOGGING_INIT",
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Io { path, source } => write!(
                f,
                "[{}] Failed to read {}: {}",
                self.code(),
                path.display(),
                source
            ),
            CliError::Json(err) => write!(f, "[{}] Invalid model document: {}", self.code(), err),
            CliError::UnknownVariable { name } => write!(
                f,
                "[{}] Variable '{}' is not declared in the document",
                self.code(),
                name
            ),
            // ModelError already carries its code.
            CliError::Model(err) => err.fmt(f),
            CliError::Logging { reason } => {
                write!(f, "[{}] Failed to initialize logging: {}", self.code(), reason)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io { source, .. } => Some(source),
            CliError::Json(err) => Some(err),
            CliError::Model(err) => Some(err),
            CliError::UnknownVariable { .. } | CliError::Logging { .. } => None,
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Json(err)
    }
}

impl From<ModelError> for CliError {
    fn from(err: ModelError) -> Self {
        CliError::Model(err)
    }
}

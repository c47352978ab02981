//! Model error types.

use optfmt_expr::SetKind;
use optfmt_expr::ids::{ConstraintIndex, VariableIndex};

use crate::error::{InvalidStateOperation, UnsupportedOperation};

/// Errors returned by model queries and mutations.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Invalid variable index
    InvalidVariableIndex(VariableIndex),
    /// Invalid constraint index
    InvalidConstraintIndex(ConstraintIndex),
    /// Another variable already has this name
    DuplicateVariableName { name: String },
    /// Another constraint already has this name
    DuplicateConstraintName { name: String },
    /// Vector function and set disagree on the number of rows
    DimensionMismatch { function: usize, set: usize },
    /// The set's row count does not fit in `usize`
    DimensionOverflow { set: SetKind },
    /// The model never supports the operation
    Unsupported(UnsupportedOperation),
    /// The operation is supported but not allowed right now
    NotAllowed(InvalidStateOperation),
}

impl ModelError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            ModelError::InvalidVariableIndex(_) => "VARIABLE_INVALID_INDEX",
            ModelError::InvalidConstraintIndex(_) => "CONSTRAINT_INVALID_INDEX",
            ModelError::DuplicateVariableName { .. } => "VARIABLE_DUPLICATE_NAME",
            ModelError::DuplicateConstraintName { .. } => "CONSTRAINT_DUPLICATE_NAME",
            ModelError::DimensionMismatch { .. } => "CONSTRAINT_DIMENSION_MISMATCH",
            ModelError::DimensionOverflow { .. } => "CONSTRAINT_DIMENSION_OVERFLOW",
            ModelError::Unsupported(err) => err.code(),
            ModelError::NotAllowed(err) => err.code(),
        }
    }
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::InvalidVariableIndex(index) => write!(
                f,
                "[{}] Variable index {} does not exist",
                self.code(),
                index.value()
            ),
            ModelError::InvalidConstraintIndex(index) => write!(
                f,
                "[{}] Constraint index {} does not exist",
                self.code(),
                index.value()
            ),
            ModelError::DuplicateVariableName { name } => write!(
                f,
                "[{}] Variable name '{}' is already in use",
                self.code(),
                name
            ),
            ModelError::DuplicateConstraintName { name } => write!(
                f,
                "[{}] Constraint name '{}' is already in use",
                self.code(),
                name
            ),
            ModelError::DimensionMismatch { function, set } => write!(
                f,
                "[{}] Function has {} rows but the set expects {}",
                self.code(),
                function,
                set
            ),
            ModelError::DimensionOverflow { set } => write!(
                f,
                "[{}] Row count of {} does not fit in usize",
                self.code(),
                set
            ),
            ModelError::Unsupported(err) => write!(f, "[{}] {}", self.code(), err),
            ModelError::NotAllowed(err) => write!(f, "[{}] {}", self.code(), err),
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModelError::Unsupported(err) => Some(err),
            ModelError::NotAllowed(err) => Some(err),
            _ => None,
        }
    }
}

impl From<UnsupportedOperation> for ModelError {
    fn from(err: UnsupportedOperation) -> Self {
        ModelError::Unsupported(err)
    }
}

impl From<InvalidStateOperation> for ModelError {
    fn from(err: InvalidStateOperation) -> Self {
        ModelError::NotAllowed(err)
    }
}

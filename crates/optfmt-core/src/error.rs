//! Operation errors: "never supported" versus "not allowed right now".
//!
//! Both families name the rejected operation with a complete gerund phrase
//! (`"Adding variables"`); `Display` uses the phrase as is.

use std::fmt;

use optfmt_expr::ids::{ConstraintIndex, VariableIndex};
use optfmt_expr::{ConstraintType, FunctionKind};

/// Appended to every [`InvalidStateOperation`] message.
pub const INVALID_STATE_HINT: &str = " You may want to use a caching model in automatic mode, \
or you may need to reset its backend before doing this operation if the caching model is in \
manual mode.";

/// Index of a model element, used by delete errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementIndex {
    Variable(VariableIndex),
    Constraint(ConstraintIndex),
}

impl fmt::Display for ElementIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementIndex::Variable(index) => index.fmt(f),
            ElementIndex::Constraint(index) => index.fmt(f),
        }
    }
}

/// The model never implements the operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnsupportedOperation {
    UnsupportedAttribute { attribute: String },
    UnsupportedConstraint { constraint_type: ConstraintType },
    UnsupportedObjectiveFunction { kind: FunctionKind },
}

impl UnsupportedOperation {
    pub fn variant_name(&self) -> &'static str {
        match self {
            UnsupportedOperation::UnsupportedAttribute { .. } => "UnsupportedAttribute",
            UnsupportedOperation::UnsupportedConstraint { .. } => "UnsupportedConstraint",
            UnsupportedOperation::UnsupportedObjectiveFunction { .. } => {
                "UnsupportedObjectiveFunction"
            }
        }
    }

    pub fn operation_name(&self) -> String {
        match self {
            UnsupportedOperation::UnsupportedAttribute { attribute } => {
                format!("Accessing attribute {attribute}")
            }
            UnsupportedOperation::UnsupportedConstraint { constraint_type } => {
                format!("Adding `{constraint_type}` constraints")
            }
            UnsupportedOperation::UnsupportedObjectiveFunction { kind } => {
                format!("Using `{kind}` as objective function")
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            UnsupportedOperation::UnsupportedAttribute { .. } => "UNSUPPORTED_ATTRIBUTE",
            UnsupportedOperation::UnsupportedConstraint { .. } => "UNSUPPORTED_CONSTRAINT",
            UnsupportedOperation::UnsupportedObjectiveFunction { .. } => {
                "UNSUPPORTED_OBJECTIVE_FUNCTION"
            }
        }
    }
}

impl fmt::Display for UnsupportedOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} is not supported by the model.",
            self.variant_name(),
            self.operation_name()
        )
    }
}

impl std::error::Error for UnsupportedOperation {}

/// The operation is supported but rejected in the model's current state.
///
/// `explanation` may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidStateOperation {
    SetAttributeNotAllowed {
        attribute: String,
        explanation: String,
    },
    AddVariableNotAllowed {
        explanation: String,
    },
    AddConstraintNotAllowed {
        constraint_type: ConstraintType,
        explanation: String,
    },
    ModifyConstraintNotAllowed {
        constraint: ConstraintIndex,
        explanation: String,
    },
    ModifyObjectiveNotAllowed {
        explanation: String,
    },
    DeleteNotAllowed {
        index: ElementIndex,
        explanation: String,
    },
}

impl InvalidStateOperation {
    pub fn variant_name(&self) -> &'static str {
        match self {
            InvalidStateOperation::SetAttributeNotAllowed { .. } => "SetAttributeNotAllowed",
            InvalidStateOperation::AddVariableNotAllowed { .. } => "AddVariableNotAllowed",
            InvalidStateOperation::AddConstraintNotAllowed { .. } => "AddConstraintNotAllowed",
            InvalidStateOperation::ModifyConstraintNotAllowed { .. } => {
                "ModifyConstraintNotAllowed"
            }
            InvalidStateOperation::ModifyObjectiveNotAllowed { .. } => "ModifyObjectiveNotAllowed",
            InvalidStateOperation::DeleteNotAllowed { .. } => "DeleteNotAllowed",
        }
    }

    pub fn operation_name(&self) -> String {
        match self {
            InvalidStateOperation::SetAttributeNotAllowed { attribute, .. } => {
                format!("Setting attribute {attribute}")
            }
            InvalidStateOperation::AddVariableNotAllowed { .. } => "Adding variables".to_string(),
            InvalidStateOperation::AddConstraintNotAllowed {
                constraint_type, ..
            } => format!("Adding `{constraint_type}` constraints"),
            InvalidStateOperation::ModifyConstraintNotAllowed { constraint, .. } => {
                format!("Modifying the constraint {constraint}")
            }
            InvalidStateOperation::ModifyObjectiveNotAllowed { .. } => {
                "Modifying the objective function".to_string()
            }
            InvalidStateOperation::DeleteNotAllowed { index, .. } => format!("Deleting {index}"),
        }
    }

    pub fn explanation(&self) -> &str {
        match self {
            InvalidStateOperation::SetAttributeNotAllowed { explanation, .. }
            | InvalidStateOperation::AddVariableNotAllowed { explanation }
            | InvalidStateOperation::AddConstraintNotAllowed { explanation, .. }
            | InvalidStateOperation::ModifyConstraintNotAllowed { explanation, .. }
            | InvalidStateOperation::ModifyObjectiveNotAllowed { explanation }
            | InvalidStateOperation::DeleteNotAllowed { explanation, .. } => explanation,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            InvalidStateOperation::SetAttributeNotAllowed { .. } => "SET_ATTRIBUTE_NOT_ALLOWED",
            InvalidStateOperation::AddVariableNotAllowed { .. } => "ADD_VARIABLE_NOT_ALLOWED",
            InvalidStateOperation::AddConstraintNotAllowed { .. } => "ADD_CONSTRAINT_NOT_ALLOWED",
            InvalidStateOperation::ModifyConstraintNotAllowed { .. } => {
                "MODIFY_CONSTRAINT_NOT_ALLOWED"
            }
            InvalidStateOperation::ModifyObjectiveNotAllowed { .. } => {
                "MODIFY_OBJECTIVE_NOT_ALLOWED"
            }
            InvalidStateOperation::DeleteNotAllowed { .. } => "DELETE_NOT_ALLOWED",
        }
    }
}

impl fmt::Display for InvalidStateOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} cannot be performed in the current state of the model even if the \
             operation is supported",
            self.variant_name(),
            self.operation_name()
        )?;
        let explanation = self.explanation();
        if explanation.is_empty() {
            f.write_str(".")?;
        } else {
            write!(f, ": {explanation}")?;
        }
        f.write_str(INVALID_STATE_HINT)
    }
}

impl std::error::Error for InvalidStateOperation {}

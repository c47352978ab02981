//! In-memory model implementing [`ModelView`](crate::view::ModelView).
//!
//! # Module Organization
//!
//! - [`error`]: Model error types
//! - [`builder`]: Adding variables, constraints and objectives
//! - [`storage`]: Read access and the `ModelView` implementation
//! - [`metadata`]: Variable and constraint naming

mod builder;
mod error;
mod metadata;
mod storage;

use std::collections::BTreeMap;
use std::fmt;

use num_traits::Zero;
use optfmt_expr::ids::{ConstraintIndex, VariableIndex};
use optfmt_expr::{ConstraintExpr, ConstraintType, Function};

use crate::error::{InvalidStateOperation, UnsupportedOperation};
use crate::print::{Charset, Coefficient, terminal_string};
use crate::types::Objective;

pub use error::ModelError;

/// A model held entirely in memory.
///
/// Constraints are grouped by [`ConstraintType`]; groups keep the order in
/// which their type was first added and constraints keep insertion order
/// inside a group. A frozen model rejects every mutation with
/// [`ModelError::NotAllowed`].
#[derive(Debug, Clone)]
pub struct InMemoryModel<T = f64> {
    pub(crate) num_variables: u32,
    pub(crate) objective: Objective<T>,
    pub(crate) constraints: BTreeMap<ConstraintIndex, ConstraintExpr<T>>,
    pub(crate) groups: Vec<(ConstraintType, Vec<ConstraintIndex>)>,
    pub(crate) next_constraint_index: u32,
    naming: bool,
    frozen: bool,
    // Lazy-allocated name storage
    pub(crate) variable_names: Option<BTreeMap<VariableIndex, String>>,
    pub(crate) constraint_names: Option<BTreeMap<ConstraintIndex, String>>,
}

impl<T: Copy + Zero> InMemoryModel<T> {
    /// Create a new empty model with a feasibility objective.
    pub fn new() -> Self {
        Self {
            num_variables: 0,
            objective: Objective::new(),
            constraints: BTreeMap::new(),
            groups: Vec::new(),
            next_constraint_index: 0,
            naming: true,
            frozen: false,
            variable_names: None,
            constraint_names: None,
        }
    }

    /// Enable or disable name support.
    ///
    /// Without it, setting a name fails with an unsupported-attribute error
    /// and printers fall back to `x[<index>]`.
    pub fn with_naming(self, naming: bool) -> Self {
        Self { naming, ..self }
    }

    pub fn supports_naming(&self) -> bool {
        self.naming
    }

    /// Reject all further mutations.
    pub fn freeze(&mut self) {
        self.frozen = true;
        tracing::debug!(
            component = "model",
            operation = "freeze",
            status = "success",
            constraints = self.constraints.len(),
            "Froze model"
        );
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Error when the model is frozen, built by `rejected`.
    pub(crate) fn ensure_mutable(
        &self,
        rejected: impl FnOnce(String) -> InvalidStateOperation,
    ) -> Result<(), ModelError> {
        if self.frozen {
            Err(rejected("the model is frozen".to_string()).into())
        } else {
            Ok(())
        }
    }

    pub(crate) fn ensure_naming(&self, attribute: &str) -> Result<(), ModelError> {
        if self.naming {
            Ok(())
        } else {
            Err(UnsupportedOperation::UnsupportedAttribute {
                attribute: attribute.to_string(),
            }
            .into())
        }
    }

    pub(crate) fn ensure_variable_exists(&self, index: VariableIndex) -> Result<(), ModelError> {
        if index.value() < self.num_variables {
            Ok(())
        } else {
            Err(ModelError::InvalidVariableIndex(index))
        }
    }

    pub(crate) fn ensure_constraint_exists(
        &self,
        index: ConstraintIndex,
    ) -> Result<(), ModelError> {
        if self.constraints.contains_key(&index) {
            Ok(())
        } else {
            Err(ModelError::InvalidConstraintIndex(index))
        }
    }

    pub(crate) fn ensure_function_variables(
        &self,
        function: &Function<T>,
    ) -> Result<(), ModelError> {
        function
            .variables()
            .into_iter()
            .try_for_each(|variable| self.ensure_variable_exists(variable))
    }
}

impl<T: Copy + Zero> Default for InMemoryModel<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Unicode terminal rendering.
impl<T: Coefficient> fmt::Display for InMemoryModel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Every query on an in-memory model succeeds; a failure here means a
        // fallible query was added without updating this impl.
        let rendered = terminal_string(self, Charset::Unicode, None);
        debug_assert!(rendered.is_ok(), "model query failed: {rendered:?}");
        f.write_str(&rendered.map_err(|_| fmt::Error)?)
    }
}

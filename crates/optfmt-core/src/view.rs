//! Query contract the printer reads models through.

use optfmt_expr::ids::{ConstraintIndex, VariableIndex};
use optfmt_expr::{ConstraintType, Function, Set};

use crate::model::ModelError;
use crate::print::{Coefficient, default_variable_name};
use crate::types::ObjectiveSense;

/// Read-only view of an optimization model.
///
/// The printer depends on nothing but this trait. Every query may fail, and
/// failures reach the caller of the printer unchanged. Naming is optional:
/// the default methods report no support and return empty names.
pub trait ModelView {
    /// Scalar type of coefficients, constants and set bounds.
    type Coefficient: Coefficient;

    fn objective_sense(&self) -> Result<ObjectiveSense, ModelError>;

    fn objective_function(&self) -> Result<Function<Self::Coefficient>, ModelError>;

    /// Constraint types present in the model, in display order.
    fn constraint_types(&self) -> Result<Vec<ConstraintType>, ModelError>;

    /// Indices of the constraints of type `ty`, in display order.
    fn constraint_indices(&self, ty: ConstraintType) -> Result<Vec<ConstraintIndex>, ModelError>;

    fn constraint_function(
        &self,
        index: ConstraintIndex,
    ) -> Result<Function<Self::Coefficient>, ModelError>;

    fn constraint_set(&self, index: ConstraintIndex) -> Result<Set<Self::Coefficient>, ModelError>;

    fn supports_constraint_names(&self, _ty: ConstraintType) -> bool {
        false
    }

    /// Name of a constraint; empty means unnamed.
    fn constraint_name(&self, _index: ConstraintIndex) -> Result<String, ModelError> {
        Ok(String::new())
    }

    fn supports_variable_names(&self) -> bool {
        false
    }

    /// Name of a variable; empty means unnamed.
    fn variable_name(&self, _variable: VariableIndex) -> Result<String, ModelError> {
        Ok(String::new())
    }

    /// Display name used when no custom resolver is given: the model's own
    /// name when it has one, otherwise `x[<index>]`.
    fn resolve_variable_name(&self, variable: VariableIndex) -> Result<String, ModelError> {
        if self.supports_variable_names() {
            let name = self.variable_name(variable)?;
            if !name.is_empty() {
                return Ok(name);
            }
        }
        Ok(default_variable_name(variable))
    }
}

//! Storage access methods and the [`ModelView`] implementation.

use num_traits::Zero;
use optfmt_expr::ids::{ConstraintIndex, VariableIndex};
use optfmt_expr::{ConstraintExpr, ConstraintType, Function, Set};

use super::InMemoryModel;
use super::error::ModelError;
use crate::print::Coefficient;
use crate::types::{Objective, ObjectiveSense};
use crate::view::ModelView;

impl<T: Copy + Zero> InMemoryModel<T> {
    /// Get the number of variables
    pub fn num_variables(&self) -> usize {
        self.num_variables as usize
    }

    /// Get the number of constraints
    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Get the objective
    pub fn objective(&self) -> &Objective<T> {
        &self.objective
    }

    /// Get a constraint by index.
    pub fn get_constraint(&self, index: ConstraintIndex) -> Result<&ConstraintExpr<T>, ModelError> {
        self.constraints
            .get(&index)
            .ok_or(ModelError::InvalidConstraintIndex(index))
    }
}

impl<T: Coefficient> ModelView for InMemoryModel<T> {
    type Coefficient = T;

    fn objective_sense(&self) -> Result<ObjectiveSense, ModelError> {
        Ok(self.objective.sense)
    }

    fn objective_function(&self) -> Result<Function<T>, ModelError> {
        Ok(self.objective.function.clone())
    }

    fn constraint_types(&self) -> Result<Vec<ConstraintType>, ModelError> {
        Ok(self.groups.iter().map(|(ty, _)| *ty).collect())
    }

    fn constraint_indices(&self, ty: ConstraintType) -> Result<Vec<ConstraintIndex>, ModelError> {
        Ok(self
            .groups
            .iter()
            .find(|(candidate, _)| *candidate == ty)
            .map(|(_, indices)| indices.clone())
            .unwrap_or_default())
    }

    fn constraint_function(&self, index: ConstraintIndex) -> Result<Function<T>, ModelError> {
        self.get_constraint(index)
            .map(|constraint| constraint.function().clone())
    }

    fn constraint_set(&self, index: ConstraintIndex) -> Result<Set<T>, ModelError> {
        self.get_constraint(index)
            .map(|constraint| constraint.set().clone())
    }

    fn supports_constraint_names(&self, _ty: ConstraintType) -> bool {
        self.supports_naming()
    }

    fn constraint_name(&self, index: ConstraintIndex) -> Result<String, ModelError> {
        self.ensure_constraint_exists(index)?;
        Ok(self
            .get_constraint_name(index)
            .unwrap_or_default()
            .to_string())
    }

    fn supports_variable_names(&self) -> bool {
        self.supports_naming()
    }

    fn variable_name(&self, variable: VariableIndex) -> Result<String, ModelError> {
        self.ensure_variable_exists(variable)?;
        Ok(self
            .get_variable_name(variable)
            .unwrap_or_default()
            .to_string())
    }
}

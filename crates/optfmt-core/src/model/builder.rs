//! Model builder methods for adding variables, constraints, and objectives.

use num_traits::Zero;
use optfmt_expr::ids::{ConstraintIndex, VariableIndex};
use optfmt_expr::{ConstraintExpr, ConstraintType, Function, Set};

use crate::error::{ElementIndex, InvalidStateOperation, UnsupportedOperation};
use crate::model::InMemoryModel;
use crate::model::error::ModelError;
use crate::types::{Objective, ObjectiveSense};

impl<T: Copy + Zero> InMemoryModel<T> {
    /// Add a variable to the model.
    pub fn add_variable(&mut self) -> Result<VariableIndex, ModelError> {
        self.ensure_mutable(|explanation| InvalidStateOperation::AddVariableNotAllowed {
            explanation,
        })?;
        let index = VariableIndex::new(self.num_variables);
        self.num_variables += 1;
        Ok(index)
    }

    /// Add `count` variables with consecutive indices.
    pub fn add_variables(&mut self, count: usize) -> Result<Vec<VariableIndex>, ModelError> {
        let added = (0..count)
            .map(|_| self.add_variable())
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(
            component = "model",
            operation = "add_variables",
            status = "success",
            added = added.len(),
            variables = self.num_variables,
            "Added variables"
        );
        Ok(added)
    }

    /// Set the objective sense and function.
    ///
    /// Only scalar functions are accepted.
    pub fn set_objective(
        &mut self,
        sense: ObjectiveSense,
        function: Function<T>,
    ) -> Result<(), ModelError> {
        self.ensure_mutable(|explanation| InvalidStateOperation::ModifyObjectiveNotAllowed {
            explanation,
        })?;
        let kind = function.kind();
        if kind.is_vector() {
            return Err(UnsupportedOperation::UnsupportedObjectiveFunction { kind }.into());
        }
        self.ensure_function_variables(&function)?;

        self.objective = Objective { sense, function };
        tracing::debug!(
            component = "model",
            operation = "set_objective",
            status = "success",
            sense = sense.as_str(),
            function = kind.as_str(),
            "Set objective function"
        );
        Ok(())
    }

    /// Switch to a feasibility problem, keeping the objective function.
    pub fn set_feasibility(&mut self) -> Result<(), ModelError> {
        self.ensure_mutable(|explanation| InvalidStateOperation::ModifyObjectiveNotAllowed {
            explanation,
        })?;
        self.objective.sense = ObjectiveSense::Feasibility;
        tracing::debug!(
            component = "model",
            operation = "set_feasibility",
            status = "success",
            "Cleared objective sense"
        );
        Ok(())
    }

    /// Add a function-in-set constraint.
    ///
    /// Scalar sets need a scalar function and cone sets a vector function
    /// with a matching number of rows. [`Set::Other`] accepts any function.
    pub fn add_constraint(
        &mut self,
        function: Function<T>,
        set: Set<T>,
    ) -> Result<ConstraintIndex, ModelError> {
        let constraint_type = ConstraintType::new(function.kind(), set.kind());
        self.ensure_mutable(|explanation| InvalidStateOperation::AddConstraintNotAllowed {
            constraint_type,
            explanation,
        })?;
        check_shape(constraint_type, &function, &set)?;
        self.ensure_function_variables(&function)?;

        let index = ConstraintIndex::new(self.next_constraint_index);
        self.next_constraint_index += 1;
        self.constraints
            .insert(index, ConstraintExpr::new(function, set));
        match self.groups.iter_mut().find(|(ty, _)| *ty == constraint_type) {
            Some((_, indices)) => indices.push(index),
            None => self.groups.push((constraint_type, vec![index])),
        }

        tracing::debug!(
            component = "model",
            operation = "add_constraint",
            status = "success",
            constraint_type = %constraint_type,
            constraint = index.value(),
            "Added constraint"
        );
        Ok(index)
    }

    /// Add a constraint built from a comparison such as `f.le_scalar(10.0)`.
    pub fn add_constraint_expr(
        &mut self,
        constraint: ConstraintExpr<T>,
    ) -> Result<ConstraintIndex, ModelError> {
        let (function, set) = constraint.into_parts();
        self.add_constraint(function, set)
    }

    /// Replace the set of an existing constraint; the set kind must not change.
    pub fn set_constraint_set(
        &mut self,
        index: ConstraintIndex,
        set: Set<T>,
    ) -> Result<(), ModelError> {
        self.ensure_mutable(|explanation| InvalidStateOperation::ModifyConstraintNotAllowed {
            constraint: index,
            explanation,
        })?;
        let stored = self
            .constraints
            .get(&index)
            .ok_or(ModelError::InvalidConstraintIndex(index))?;
        let current = stored.constraint_type();
        if current.set != set.kind() {
            return Err(UnsupportedOperation::UnsupportedConstraint {
                constraint_type: ConstraintType::new(current.function, set.kind()),
            }
            .into());
        }
        check_shape(current, stored.function(), &set)?;
        let function = stored.function().clone();
        self.constraints
            .insert(index, ConstraintExpr::new(function, set));
        tracing::debug!(
            component = "model",
            operation = "set_constraint_set",
            status = "success",
            constraint = index.value(),
            "Replaced constraint set"
        );
        Ok(())
    }

    /// Remove a constraint and its name.
    pub fn delete_constraint(&mut self, index: ConstraintIndex) -> Result<(), ModelError> {
        self.ensure_mutable(|explanation| InvalidStateOperation::DeleteNotAllowed {
            index: ElementIndex::Constraint(index),
            explanation,
        })?;
        let removed = self
            .constraints
            .remove(&index)
            .ok_or(ModelError::InvalidConstraintIndex(index))?;
        let constraint_type = removed.constraint_type();
        if let Some(position) = self.groups.iter().position(|(ty, _)| *ty == constraint_type) {
            let indices = &mut self.groups[position].1;
            indices.retain(|candidate| *candidate != index);
            if indices.is_empty() {
                self.groups.remove(position);
            }
        }
        if let Some(names) = self.constraint_names.as_mut() {
            names.remove(&index);
        }
        tracing::debug!(
            component = "model",
            operation = "delete_constraint",
            status = "success",
            constraint_type = %constraint_type,
            constraint = index.value(),
            "Deleted constraint"
        );
        Ok(())
    }
}

fn check_shape<T: Copy + Zero>(
    constraint_type: ConstraintType,
    function: &Function<T>,
    set: &Set<T>,
) -> Result<(), ModelError> {
    let set_kind = set.kind();
    let compatible = if set_kind.is_vector() {
        constraint_type.function.is_vector()
    } else {
        !set_kind.is_scalar() || !constraint_type.function.is_vector()
    };
    if !compatible {
        return Err(UnsupportedOperation::UnsupportedConstraint { constraint_type }.into());
    }
    if !set_kind.is_vector() {
        return Ok(());
    }
    // Vector sets always have a known size, so `None` means overflow.
    let expected = set
        .dimension()
        .ok_or(ModelError::DimensionOverflow { set: set_kind })?;
    if expected != function.output_dimension() {
        return Err(ModelError::DimensionMismatch {
            function: function.output_dimension(),
            set: expected,
        });
    }
    Ok(())
}

//! Metadata methods for variable and constraint naming.
//!
//! Names are unique per element kind. Setting an empty name clears it.

use std::collections::BTreeMap;

use num_traits::Zero;
use optfmt_expr::ids::{ConstraintIndex, VariableIndex};

use crate::error::InvalidStateOperation;
use crate::model::InMemoryModel;
use crate::model::error::ModelError;

const VARIABLE_NAME_ATTRIBUTE: &str = "VariableName";
const CONSTRAINT_NAME_ATTRIBUTE: &str = "ConstraintName";

impl<T: Copy + Zero> InMemoryModel<T> {
    /// Set name for a variable.
    pub fn set_variable_name(
        &mut self,
        index: VariableIndex,
        name: impl Into<String>,
    ) -> Result<(), ModelError> {
        self.ensure_name_mutable(VARIABLE_NAME_ATTRIBUTE)?;
        self.ensure_variable_exists(index)?;
        let name = name.into();
        let names = self.variable_names.get_or_insert_with(BTreeMap::new);
        if name.is_empty() {
            names.remove(&index);
            return Ok(());
        }
        if find_by_name(names, &name).is_some_and(|holder| holder != index) {
            return Err(ModelError::DuplicateVariableName { name });
        }
        names.insert(index, name);
        Ok(())
    }

    /// Get name for a variable.
    pub fn get_variable_name(&self, index: VariableIndex) -> Option<&str> {
        self.variable_names
            .as_ref()
            .and_then(|names| names.get(&index).map(String::as_str))
    }

    /// Lookup a variable by name.
    pub fn variable_by_name(&self, name: &str) -> Option<VariableIndex> {
        self.variable_names
            .as_ref()
            .and_then(|names| find_by_name(names, name))
    }

    /// Set name for a constraint.
    pub fn set_constraint_name(
        &mut self,
        index: ConstraintIndex,
        name: impl Into<String>,
    ) -> Result<(), ModelError> {
        self.ensure_name_mutable(CONSTRAINT_NAME_ATTRIBUTE)?;
        self.ensure_constraint_exists(index)?;
        let name = name.into();
        let names = self.constraint_names.get_or_insert_with(BTreeMap::new);
        if name.is_empty() {
            names.remove(&index);
            return Ok(());
        }
        if find_by_name(names, &name).is_some_and(|holder| holder != index) {
            return Err(ModelError::DuplicateConstraintName { name });
        }
        names.insert(index, name);
        Ok(())
    }

    /// Get name for a constraint.
    pub fn get_constraint_name(&self, index: ConstraintIndex) -> Option<&str> {
        self.constraint_names
            .as_ref()
            .and_then(|names| names.get(&index).map(String::as_str))
    }

    /// Lookup a constraint by name.
    pub fn constraint_by_name(&self, name: &str) -> Option<ConstraintIndex> {
        self.constraint_names
            .as_ref()
            .and_then(|names| find_by_name(names, name))
    }

    fn ensure_name_mutable(&self, attribute: &str) -> Result<(), ModelError> {
        self.ensure_naming(attribute)?;
        self.ensure_mutable(|explanation| InvalidStateOperation::SetAttributeNotAllowed {
            attribute: attribute.to_string(),
            explanation,
        })
    }
}

fn find_by_name<K: Copy>(names: &BTreeMap<K, String>, name: &str) -> Option<K> {
    names
        .iter()
        .find_map(|(index, value)| (value == name).then_some(*index))
}

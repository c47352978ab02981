//! JSON model documents.
//!
//! ```json
//! {
//!   "variables": ["x", "y"],
//!   "objective": {
//!     "sense": "min",
//!     "function": {"type": "affine", "terms": [{"variable": "x", "coefficient": 3}], "constant": 1}
//!   },
//!   "constraints": [
//!     {"name": "cap", "function": {"type": "variable", "variable": "x"}, "set": {"type": "less_than", "upper": 10}}
//!   ]
//! }
//! ```
//!
//! Variables are declared by name and referenced by name.

use std::collections::HashMap;

use optfmt_core::{InMemoryModel, ObjectiveSense};
use optfmt_expr::ids::VariableIndex;
use optfmt_expr::{
    Function, ScalarAffineFunction, ScalarQuadraticFunction, Set, VectorAffineFunction,
    VectorOfVariables,
};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelDocument {
    pub variables: Vec<String>,
    #[serde(default)]
    pub objective: Option<ObjectiveDocument>,
    #[serde(default)]
    pub constraints: Vec<ConstraintDocument>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SenseDocument {
    Min,
    Max,
    Feasibility,
}

impl From<SenseDocument> for ObjectiveSense {
    fn from(sense: SenseDocument) -> Self {
        match sense {
            SenseDocument::Min => ObjectiveSense::Min,
            SenseDocument::Max => ObjectiveSense::Max,
            SenseDocument::Feasibility => ObjectiveSense::Feasibility,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectiveDocument {
    pub sense: SenseDocument,
    #[serde(default)]
    pub function: Option<FunctionDocument>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstraintDocument {
    #[serde(default)]
    pub name: Option<String>,
    pub function: FunctionDocument,
    pub set: SetDocument,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermDocument {
    pub variable: String,
    pub coefficient: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuadraticTermDocument {
    pub left: String,
    pub right: String,
    pub coefficient: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AffineDocument {
    #[serde(default)]
    pub terms: Vec<TermDocument>,
    #[serde(default)]
    pub constant: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FunctionDocument {
    Variable {
        variable: String,
    },
    Affine(AffineDocument),
    Quadratic {
        quadratic_terms: Vec<QuadraticTermDocument>,
        #[serde(default)]
        terms: Vec<TermDocument>,
        #[serde(default)]
        constant: f64,
    },
    VectorOfVariables {
        variables: Vec<String>,
    },
    VectorAffine {
        rows: Vec<AffineDocument>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SetDocument {
    LessThan { upper: f64 },
    GreaterThan { lower: f64 },
    EqualTo { value: f64 },
    Interval { lower: f64, upper: f64 },
    ZeroOne,
    Integer,
    Semicontinuous { lower: f64, upper: f64 },
    Semiinteger { lower: f64, upper: f64 },
    Nonnegatives { dimension: usize },
    Nonpositives { dimension: usize },
    Zeros { dimension: usize },
    SecondOrderCone { dimension: usize },
    PositiveSemidefiniteConeTriangle { side_dimension: usize },
    Other { text: String },
}

impl From<SetDocument> for Set {
    fn from(set: SetDocument) -> Self {
        match set {
            SetDocument::LessThan { upper } => Set::LessThan { upper },
            SetDocument::GreaterThan { lower } => Set::GreaterThan { lower },
            SetDocument::EqualTo { value } => Set::EqualTo { value },
            SetDocument::Interval { lower, upper } => Set::Interval { lower, upper },
            SetDocument::ZeroOne => Set::ZeroOne,
            SetDocument::Integer => Set::Integer,
            SetDocument::Semicontinuous { lower, upper } => Set::Semicontinuous { lower, upper },
            SetDocument::Semiinteger { lower, upper } => Set::Semiinteger { lower, upper },
            SetDocument::Nonnegatives { dimension } => Set::Nonnegatives { dimension },
            SetDocument::Nonpositives { dimension } => Set::Nonpositives { dimension },
            SetDocument::Zeros { dimension } => Set::Zeros { dimension },
            SetDocument::SecondOrderCone { dimension } => Set::SecondOrderCone { dimension },
            SetDocument::PositiveSemidefiniteConeTriangle { side_dimension } => {
                Set::PositiveSemidefiniteConeTriangle { side_dimension }
            }
            SetDocument::Other { text } => Set::Other(text),
        }
    }
}

/// Name-to-index lookup built from the `variables` list.
struct VariableTable {
    indices: HashMap<String, VariableIndex>,
}

impl VariableTable {
    fn lookup(&self, name: &str) -> Result<VariableIndex, CliError> {
        self.indices
            .get(name)
            .copied()
            .ok_or_else(|| CliError::UnknownVariable {
                name: name.to_string(),
            })
    }

    fn affine(&self, document: AffineDocument) -> Result<ScalarAffineFunction, CliError> {
        let terms = self.terms(document.terms)?;
        Ok(ScalarAffineFunction::new(terms, document.constant))
    }

    fn terms(&self, terms: Vec<TermDocument>) -> Result<Vec<(VariableIndex, f64)>, CliError> {
        terms
            .into_iter()
            .map(|term| Ok((self.lookup(&term.variable)?, term.coefficient)))
            .collect()
    }

    fn function(&self, document: FunctionDocument) -> Result<Function, CliError> {
        let function = match document {
            FunctionDocument::Variable { variable } => Function::Variable(self.lookup(&variable)?),
            FunctionDocument::Affine(affine) => Function::Affine(self.affine(affine)?),
            FunctionDocument::Quadratic {
                quadratic_terms,
                terms,
                constant,
            } => {
                let quadratic = quadratic_terms
                    .into_iter()
                    .map(|term| {
                        Ok((
                            self.lookup(&term.left)?,
                            self.lookup(&term.right)?,
                            term.coefficient,
                        ))
                    })
                    .collect::<Result<Vec<_>, CliError>>()?;
                let affine = ScalarAffineFunction::new(self.terms(terms)?, constant);
                Function::Quadratic(ScalarQuadraticFunction::new(quadratic, affine))
            }
            FunctionDocument::VectorOfVariables { variables } => {
                Function::VectorOfVariables(VectorOfVariables::new(
                    variables
                        .iter()
                        .map(|name| self.lookup(name))
                        .collect::<Result<_, _>>()?,
                ))
            }
            FunctionDocument::VectorAffine { rows } => Function::VectorAffine(
                rows.into_iter()
                    .map(|row| self.affine(row))
                    .collect::<Result<VectorAffineFunction, _>>()?,
            ),
        };
        Ok(function)
    }
}

impl ModelDocument {
    pub fn from_json(text: &str) -> Result<Self, CliError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Build an [`InMemoryModel`]. Empty variable names declare unnamed
    /// variables, which cannot be referenced.
    pub fn into_model(self) -> Result<InMemoryModel, CliError> {
        let mut model = InMemoryModel::new();
        let mut table = VariableTable {
            indices: HashMap::with_capacity(self.variables.len()),
        };
        for name in self.variables {
            let index = model.add_variable()?;
            if name.is_empty() {
                continue;
            }
            model.set_variable_name(index, name.as_str())?;
            table.indices.insert(name, index);
        }

        if let Some(objective) = self.objective {
            let function = match objective.function {
                Some(function) => table.function(function)?,
                None => Function::Affine(ScalarAffineFunction::default()),
            };
            model.set_objective(objective.sense.into(), function)?;
        }

        for constraint in self.constraints {
            let function = table.function(constraint.function)?;
            let index = model.add_constraint(function, constraint.set.into())?;
            if let Some(name) = constraint.name {
                model.set_constraint_name(index, name)?;
            }
        }

        tracing::debug!(
            component = "cli",
            operation = "load_document",
            status = "success",
            variables = model.num_variables(),
            constraints = model.num_constraints(),
            "Converted model document"
        );
        Ok(model)
    }
}

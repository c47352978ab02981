//! Closed sum over the function shapes a constraint or objective can hold.

use num_traits::Zero;

use crate::expr::affine::ScalarAffineFunction;
use crate::expr::quadratic::ScalarQuadraticFunction;
use crate::expr::vector::{VectorAffineFunction, VectorOfVariables};
use crate::ids::VariableIndex;

/// Tag identifying the shape of a [`Function`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FunctionKind {
    Variable,
    ScalarAffine,
    ScalarQuadratic,
    VectorOfVariables,
    VectorAffine,
}

impl FunctionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FunctionKind::Variable => "VariableIndex",
            FunctionKind::ScalarAffine => "ScalarAffineFunction",
            FunctionKind::ScalarQuadratic => "ScalarQuadraticFunction",
            FunctionKind::VectorOfVariables => "VectorOfVariables",
            FunctionKind::VectorAffine => "VectorAffineFunction",
        }
    }

    pub fn is_vector(self) -> bool {
        matches!(
            self,
            FunctionKind::VectorOfVariables | FunctionKind::VectorAffine
        )
    }
}

impl std::fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Function<T = f64> {
    Variable(VariableIndex),
    Affine(ScalarAffineFunction<T>),
    Quadratic(ScalarQuadraticFunction<T>),
    VectorOfVariables(VectorOfVariables),
    VectorAffine(VectorAffineFunction<T>),
}

impl<T: Copy + Zero> Function<T> {
    pub fn kind(&self) -> FunctionKind {
        match self {
            Function::Variable(_) => FunctionKind::Variable,
            Function::Affine(_) => FunctionKind::ScalarAffine,
            Function::Quadratic(_) => FunctionKind::ScalarQuadratic,
            Function::VectorOfVariables(_) => FunctionKind::VectorOfVariables,
            Function::VectorAffine(_) => FunctionKind::VectorAffine,
        }
    }

    /// Number of output rows (1 for scalar functions).
    pub fn output_dimension(&self) -> usize {
        match self {
            Function::Variable(_) | Function::Affine(_) | Function::Quadratic(_) => 1,
            Function::VectorOfVariables(f) => f.dimension(),
            Function::VectorAffine(f) => f.dimension(),
        }
    }

    /// Every variable referenced, in rendering order, duplicates included.
    pub fn variables(&self) -> Vec<VariableIndex> {
        match self {
            Function::Variable(v) => vec![*v],
            Function::Affine(f) => f.variables().collect(),
            Function::Quadratic(f) => f.variables().collect(),
            Function::VectorOfVariables(f) => f.variables().to_vec(),
            Function::VectorAffine(f) => f.variables().collect(),
        }
    }
}

impl<T> From<VariableIndex> for Function<T> {
    fn from(value: VariableIndex) -> Self {
        Function::Variable(value)
    }
}

impl<T> From<ScalarAffineFunction<T>> for Function<T> {
    fn from(value: ScalarAffineFunction<T>) -> Self {
        Function::Affine(value)
    }
}

impl<T> From<ScalarQuadraticFunction<T>> for Function<T> {
    fn from(value: ScalarQuadraticFunction<T>) -> Self {
        Function::Quadratic(value)
    }
}

impl<T> From<VectorOfVariables> for Function<T> {
    fn from(value: VectorOfVariables) -> Self {
        Function::VectorOfVariables(value)
    }
}

impl<T> From<VectorAffineFunction<T>> for Function<T> {
    fn from(value: VectorAffineFunction<T>) -> Self {
        Function::VectorAffine(value)
    }
}

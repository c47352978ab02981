//! Vector-valued functions. Each output row is an independent scalar
//! function; rows print in order.

use num_traits::Zero;

use crate::expr::affine::ScalarAffineFunction;
use crate::ids::VariableIndex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorOfVariables {
    variables: Vec<VariableIndex>,
}

impl VectorOfVariables {
    pub fn new(variables: Vec<VariableIndex>) -> Self {
        Self { variables }
    }

    pub fn variables(&self) -> &[VariableIndex] {
        &self.variables
    }

    pub fn dimension(&self) -> usize {
        self.variables.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VectorAffineFunction<T = f64> {
    rows: Vec<ScalarAffineFunction<T>>,
}

impl<T: Copy + Zero> VectorAffineFunction<T> {
    pub fn new(rows: Vec<ScalarAffineFunction<T>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[ScalarAffineFunction<T>] {
        &self.rows
    }

    pub fn dimension(&self) -> usize {
        self.rows.len()
    }

    pub fn variables(&self) -> impl Iterator<Item = VariableIndex> + '_ {
        self.rows.iter().flat_map(ScalarAffineFunction::variables)
    }
}

impl<T> FromIterator<ScalarAffineFunction<T>> for VectorAffineFunction<T> {
    fn from_iter<I: IntoIterator<Item = ScalarAffineFunction<T>>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<VariableIndex> for VectorOfVariables {
    fn from_iter<I: IntoIterator<Item = VariableIndex>>(iter: I) -> Self {
        Self {
            variables: iter.into_iter().collect(),
        }
    }
}

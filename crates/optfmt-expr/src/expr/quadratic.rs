//! Scalar quadratic functions: `(x, y, coef)` products plus an affine part.

use num_traits::Zero;

use crate::expr::affine::ScalarAffineFunction;
use crate::ids::VariableIndex;

#[derive(Debug, Clone, PartialEq)]
pub struct ScalarQuadraticFunction<T = f64> {
    quadratic: Vec<(VariableIndex, VariableIndex, T)>,
    affine: ScalarAffineFunction<T>,
}

impl<T: Copy + Zero> ScalarQuadraticFunction<T> {
    pub fn new(
        quadratic: Vec<(VariableIndex, VariableIndex, T)>,
        affine: ScalarAffineFunction<T>,
    ) -> Self {
        Self { quadratic, affine }
    }

    /// Quadratic terms only, zero affine part.
    pub fn from_quadratic(quadratic: Vec<(VariableIndex, VariableIndex, T)>) -> Self {
        Self {
            quadratic,
            affine: ScalarAffineFunction::default(),
        }
    }

    pub fn quadratic_terms(&self) -> &[(VariableIndex, VariableIndex, T)] {
        &self.quadratic
    }

    pub fn affine(&self) -> &ScalarAffineFunction<T> {
        &self.affine
    }

    pub fn constant(&self) -> T {
        self.affine.constant()
    }

    pub fn variables(&self) -> impl Iterator<Item = VariableIndex> + '_ {
        self.quadratic
            .iter()
            .flat_map(|(a, b, _)| [*a, *b])
            .chain(self.affine.variables())
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn from_quadratic_has_zero_affine_part() {
        let x = VariableIndex::new(1);
        let f = ScalarQuadraticFunction::from_quadratic(vec![(x, x, 2.0)]);
        assert!(f.affine().is_constant());
        assert_eq!(f.constant(), 0.0);
    }

    #[test]
    fn variables_cover_products_and_affine_terms() {
        let x = VariableIndex::new(1);
        let y = VariableIndex::new(2);
        let f = ScalarQuadraticFunction::new(
            vec![(x, y, 1.0)],
            ScalarAffineFunction::term(VariableIndex::new(3), 4.0),
        );
        let vars: Vec<_> = f.variables().map(VariableIndex::value).collect();
        assert_eq!(vars, vec![1, 2, 3]);
    }
}

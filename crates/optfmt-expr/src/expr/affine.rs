//! Scalar affine functions: ordered `(variable, coefficient)` terms + constant.
//!
//! Term order is kept exactly as built. Two functions with the same terms in
//! a different order are mathematically equal but print differently, so
//! nothing in here sorts or merges terms.

use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, Zero};

use crate::expr::constraint::{ComparisonSense, ConstraintExpr};
use crate::expr::set::Set;
use crate::ids::VariableIndex;

#[derive(Debug, Clone, PartialEq)]
pub struct ScalarAffineFunction<T = f64> {
    terms: Vec<(VariableIndex, T)>,
    constant: T,
}

impl<T: Copy + Zero> Default for ScalarAffineFunction<T> {
    fn default() -> Self {
        Self {
            terms: Vec::new(),
            constant: T::zero(),
        }
    }
}

impl<T: Copy + Zero> ScalarAffineFunction<T> {
    // ── Constructors ────────────────────────────────────────

    /// Function from terms and constant.
    pub fn new(terms: Vec<(VariableIndex, T)>, constant: T) -> Self {
        Self { terms, constant }
    }

    /// Just a constant, no variable terms.
    pub fn from_constant(constant: T) -> Self {
        Self {
            terms: Vec::new(),
            constant,
        }
    }

    /// From raw terms, zero constant.
    pub fn from_terms(terms: Vec<(VariableIndex, T)>) -> Self {
        Self {
            terms,
            constant: T::zero(),
        }
    }

    /// Single term: coeff * var. Zero coefficients are kept, printing
    /// decides what to do with them.
    pub fn term(variable: VariableIndex, coefficient: T) -> Self {
        Self::from_terms(vec![(variable, coefficient)])
    }

    /// Single variable with unit coefficient.
    pub fn var(variable: VariableIndex) -> Self
    where
        T: One,
    {
        Self::term(variable, T::one())
    }

    // ── Accessors ───────────────────────────────────────────

    pub fn constant(&self) -> T {
        self.constant
    }

    pub fn terms(&self) -> &[(VariableIndex, T)] {
        &self.terms
    }

    pub fn is_constant(&self) -> bool {
        self.terms.is_empty()
    }

    /// Consume and return (terms, constant).
    pub fn into_parts(self) -> (Vec<(VariableIndex, T)>, T) {
        (self.terms, self.constant)
    }

    pub fn variables(&self) -> impl Iterator<Item = VariableIndex> + '_ {
        self.terms.iter().map(|(variable, _)| *variable)
    }

    // ── Operations ──────────────────────────────────────────

    /// Scale all terms and the constant by a factor.
    pub fn scale(&self, by: T) -> Self
    where
        T: Mul<Output = T>,
    {
        Self {
            terms: self.terms.iter().map(|(v, c)| (*v, *c * by)).collect(),
            constant: self.constant * by,
        }
    }

    /// Concatenate terms and add constants.
    pub fn add(&self, other: &Self) -> Self {
        let mut terms = Vec::with_capacity(self.terms.len() + other.terms.len());
        terms.extend_from_slice(&self.terms);
        terms.extend_from_slice(&other.terms);
        Self {
            terms,
            constant: self.constant + other.constant,
        }
    }

    /// Copy with constant set to zero.
    pub fn without_constant(&self) -> Self {
        Self::from_terms(self.terms.clone())
    }

    // ── Comparisons (produce ConstraintExpr) ────────────────

    /// Move the constant to the right-hand side and build `f <sense> rhs`.
    pub fn compare_scalar(&self, rhs: T, sense: ComparisonSense) -> ConstraintExpr<T>
    where
        T: Sub<Output = T>,
    {
        let bound = rhs - self.constant;
        let set = match sense {
            ComparisonSense::LessEqual => Set::LessThan { upper: bound },
            ComparisonSense::GreaterEqual => Set::GreaterThan { lower: bound },
            ComparisonSense::Equal => Set::EqualTo { value: bound },
        };
        ConstraintExpr::new(self.without_constant().into(), set)
    }

    pub fn le_scalar(&self, rhs: T) -> ConstraintExpr<T>
    where
        T: Sub<Output = T>,
    {
        self.compare_scalar(rhs, ComparisonSense::LessEqual)
    }

    pub fn ge_scalar(&self, rhs: T) -> ConstraintExpr<T>
    where
        T: Sub<Output = T>,
    {
        self.compare_scalar(rhs, ComparisonSense::GreaterEqual)
    }

    pub fn eq_scalar(&self, rhs: T) -> ConstraintExpr<T>
    where
        T: Sub<Output = T>,
    {
        self.compare_scalar(rhs, ComparisonSense::Equal)
    }

    /// `lower <= f <= upper`, with the constant shifted into both bounds.
    pub fn in_interval(&self, lower: T, upper: T) -> ConstraintExpr<T>
    where
        T: Sub<Output = T>,
    {
        ConstraintExpr::new(
            self.without_constant().into(),
            Set::Interval {
                lower: lower - self.constant,
                upper: upper - self.constant,
            },
        )
    }
}

// ── Operator overloads ──────────────────────────────────────

impl<T: Copy + Zero> Add for ScalarAffineFunction<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        ScalarAffineFunction::add(&self, &rhs)
    }
}

impl<T: Copy + Zero + One + Neg<Output = T>> Sub for ScalarAffineFunction<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        ScalarAffineFunction::add(&self, &rhs.scale(-T::one()))
    }
}

impl<T: Copy + Zero + Mul<Output = T>> Mul<T> for ScalarAffineFunction<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

impl<T: Copy + Zero + One + Neg<Output = T>> Neg for ScalarAffineFunction<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.scale(-T::one())
    }
}

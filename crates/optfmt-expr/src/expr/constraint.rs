//! Constraint types and function-in-set constraint values.

use num_traits::Zero;

use crate::expr::function::{Function, FunctionKind};
use crate::expr::set::{Set, SetKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonSense {
    LessEqual,
    GreaterEqual,
    Equal,
}

impl ComparisonSense {
    pub fn as_str(self) -> &'static str {
        match self {
            ComparisonSense::LessEqual => "le",
            ComparisonSense::GreaterEqual => "ge",
            ComparisonSense::Equal => "eq",
        }
    }
}

/// A `(function kind, set kind)` pair; models group constraints by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConstraintType {
    pub function: FunctionKind,
    pub set: SetKind,
}

impl ConstraintType {
    pub fn new(function: FunctionKind, set: SetKind) -> Self {
        Self { function, set }
    }
}

impl std::fmt::Display for ConstraintType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-in-{}", self.function, self.set)
    }
}

#[derive(Debug, Clone)]
pub struct ConstraintExpr<T = f64> {
    function: Function<T>,
    set: Set<T>,
}

impl<T: Copy + Zero> ConstraintExpr<T> {
    pub fn new(function: Function<T>, set: Set<T>) -> Self {
        Self { function, set }
    }

    pub fn function(&self) -> &Function<T> {
        &self.function
    }

    pub fn set(&self) -> &Set<T> {
        &self.set
    }

    pub fn constraint_type(&self) -> ConstraintType {
        ConstraintType::new(self.function.kind(), self.set.kind())
    }

    pub fn into_parts(self) -> (Function<T>, Set<T>) {
        (self.function, self.set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::ScalarAffineFunction;
    use crate::ids::VariableIndex;

    #[test]
    fn constraint_type_display_joins_kinds() {
        let ty = ConstraintType::new(FunctionKind::ScalarAffine, SetKind::LessThan);
        assert_eq!(ty.to_string(), "ScalarAffineFunction-in-LessThan");
    }

    #[test]
    fn constraint_expr_reports_its_type() {
        let x = VariableIndex::new(1);
        let c = ScalarAffineFunction::var(x).ge_scalar(2.0);
        assert_eq!(
            c.constraint_type(),
            ConstraintType::new(FunctionKind::ScalarAffine, SetKind::GreaterThan)
        );
        assert_eq!(c.set(), &Set::GreaterThan { lower: 2.0 });
    }
}

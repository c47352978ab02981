//! Function and set values consumed by the optfmt printer.
//!
//! Everything here is plain data: the printer in `optfmt-core` only reads
//! these values, it never builds or mutates them.

pub mod expr;
pub mod ids;

pub use expr::{
    ComparisonSense, ConstraintExpr, ConstraintType, Function, FunctionKind,
    ScalarAffineFunction, ScalarQuadraticFunction, Set, SetKind, VectorAffineFunction,
    VectorOfVariables,
};
pub use ids::{ConstraintIndex, VariableIndex};

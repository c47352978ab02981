//! Function and set values for optimization models.
//!
//! - `affine`:     ScalarAffineFunction: ordered terms + constant
//! - `quadratic`:  ScalarQuadraticFunction: quadratic terms + affine part
//! - `vector`:     VectorOfVariables, VectorAffineFunction
//! - `function`:   Function: closed sum over the function shapes above
//! - `set`:        Set: constraint right-hand sides
//! - `constraint`: ConstraintType and ConstraintExpr (function-in-set pair)

pub mod affine;
pub mod constraint;
pub mod function;
pub mod quadratic;
pub mod set;
pub mod vector;

pub use affine::ScalarAffineFunction;
pub use constraint::{ComparisonSense, ConstraintExpr, ConstraintType};
pub use function::{Function, FunctionKind};
pub use quadratic::ScalarQuadraticFunction;
pub use set::{Set, SetKind};
pub use vector::{VectorAffineFunction, VectorOfVariables};

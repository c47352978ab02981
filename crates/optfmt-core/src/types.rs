use num_traits::Zero;
use optfmt_expr::{Function, ScalarAffineFunction};

/// Optimization sense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObjectiveSense {
    Min,
    Max,
    #[default]
    Feasibility,
}

impl ObjectiveSense {
    pub fn as_str(self) -> &'static str {
        match self {
            ObjectiveSense::Min => "min",
            ObjectiveSense::Max => "max",
            ObjectiveSense::Feasibility => "feasibility",
        }
    }
}

/// Objective function with a sense.
///
/// A feasibility objective keeps its function so that switching back to
/// `Min`/`Max` does not lose it; printers ignore it.
#[derive(Debug, Clone, PartialEq)]
pub struct Objective<T = f64> {
    pub sense: ObjectiveSense,
    pub function: Function<T>,
}

impl<T: Copy + Zero> Objective<T> {
    /// Feasibility sense with a zero function.
    pub fn new() -> Self {
        Self {
            sense: ObjectiveSense::Feasibility,
            function: Function::Affine(ScalarAffineFunction::default()),
        }
    }
}

impl<T: Copy + Zero> Default for Objective<T> {
    fn default() -> Self {
        Self::new()
    }
}

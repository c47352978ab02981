//! Constraint sets: the right-hand side of a function-in-set constraint.

use std::fmt;

/// Tag identifying the shape of a [`Set`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SetKind {
    LessThan,
    GreaterThan,
    EqualTo,
    Interval,
    ZeroOne,
    Integer,
    Semicontinuous,
    Semiinteger,
    Nonnegatives,
    Nonpositives,
    Zeros,
    SecondOrderCone,
    PositiveSemidefiniteConeTriangle,
    Other,
}

impl SetKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SetKind::LessThan => "LessThan",
            SetKind::GreaterThan => "GreaterThan",
            SetKind::EqualTo => "EqualTo",
            SetKind::Interval => "Interval",
            SetKind::ZeroOne => "ZeroOne",
            SetKind::Integer => "Integer",
            SetKind::Semicontinuous => "Semicontinuous",
            SetKind::Semiinteger => "Semiinteger",
            SetKind::Nonnegatives => "Nonnegatives",
            SetKind::Nonpositives => "Nonpositives",
            SetKind::Zeros => "Zeros",
            SetKind::SecondOrderCone => "SecondOrderCone",
            SetKind::PositiveSemidefiniteConeTriangle => "PositiveSemidefiniteConeTriangle",
            SetKind::Other => "Other",
        }
    }

    /// Cone sets constrain a vector function. [`SetKind::Other`] is neither
    /// scalar nor vector.
    pub fn is_vector(self) -> bool {
        matches!(
            self,
            SetKind::Nonnegatives
                | SetKind::Nonpositives
                | SetKind::Zeros
                | SetKind::SecondOrderCone
                | SetKind::PositiveSemidefiniteConeTriangle
        )
    }

    pub fn is_scalar(self) -> bool {
        !self.is_vector() && self != SetKind::Other
    }
}

impl fmt::Display for SetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Set<T = f64> {
    LessThan { upper: T },
    GreaterThan { lower: T },
    EqualTo { value: T },
    Interval { lower: T, upper: T },
    ZeroOne,
    Integer,
    /// `{0} ∪ [lower, upper]`
    Semicontinuous { lower: T, upper: T },
    /// `{0} ∪ {lower, lower + 1, ..., upper}`
    Semiinteger { lower: T, upper: T },
    Nonnegatives { dimension: usize },
    Nonpositives { dimension: usize },
    Zeros { dimension: usize },
    SecondOrderCone { dimension: usize },
    PositiveSemidefiniteConeTriangle { side_dimension: usize },
    /// A set this crate has no shape for; carries its display form.
    Other(String),
}

impl<T> Set<T> {
    pub fn kind(&self) -> SetKind {
        match self {
            Set::LessThan { .. } => SetKind::LessThan,
            Set::GreaterThan { .. } => SetKind::GreaterThan,
            Set::EqualTo { .. } => SetKind::EqualTo,
            Set::Interval { .. } => SetKind::Interval,
            Set::ZeroOne => SetKind::ZeroOne,
            Set::Integer => SetKind::Integer,
            Set::Semicontinuous { .. } => SetKind::Semicontinuous,
            Set::Semiinteger { .. } => SetKind::Semiinteger,
            Set::Nonnegatives { .. } => SetKind::Nonnegatives,
            Set::Nonpositives { .. } => SetKind::Nonpositives,
            Set::Zeros { .. } => SetKind::Zeros,
            Set::SecondOrderCone { .. } => SetKind::SecondOrderCone,
            Set::PositiveSemidefiniteConeTriangle { .. } => {
                SetKind::PositiveSemidefiniteConeTriangle
            }
            Set::Other(_) => SetKind::Other,
        }
    }

    /// Number of function rows the set expects. `None` for [`Set::Other`],
    /// whose dimension is unknown, and for a triangle whose entry count
    /// overflows `usize`.
    pub fn dimension(&self) -> Option<usize> {
        match self {
            Set::Nonnegatives { dimension }
            | Set::Nonpositives { dimension }
            | Set::Zeros { dimension }
            | Set::SecondOrderCone { dimension } => Some(*dimension),
            Set::PositiveSemidefiniteConeTriangle { side_dimension } => {
                let entries = side_dimension.checked_add(1)?.checked_mul(*side_dimension)?;
                Some(entries / 2)
            }
            Set::Other(_) => None,
            _ => Some(1),
        }
    }
}

/// Natural form, e.g. `Interval(2, 5)` or `Nonnegatives(3)`.
impl<T: fmt::Display> fmt::Display for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.kind().as_str();
        match self {
            Set::LessThan { upper } => write!(f, "{name}({upper})"),
            Set::GreaterThan { lower } => write!(f, "{name}({lower})"),
            Set::EqualTo { value } => write!(f, "{name}({value})"),
            Set::Interval { lower, upper }
            | Set::Semicontinuous { lower, upper }
            | Set::Semiinteger { lower, upper } => write!(f, "{name}({lower}, {upper})"),
            Set::ZeroOne | Set::Integer => write!(f, "{name}()"),
            Set::Nonnegatives { dimension }
            | Set::Nonpositives { dimension }
            | Set::Zeros { dimension }
            | Set::SecondOrderCone { dimension } => write!(f, "{name}({dimension})"),
            Set::PositiveSemidefiniteConeTriangle { side_dimension } => {
                write!(f, "{name}({side_dimension})")
            }
            Set::Other(text) => f.write_str(text),
        }
    }
}

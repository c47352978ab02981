//! Sign/coefficient composition for one term of a sum.
//!
//! A [`Term`] is the sign plus the coefficient text that goes in front of a
//! variable name. The composer never decides between `-x` and ` - x`; that
//! depends on the term's position and is the caller's call through
//! [`Sign::unary`] and [`Sign::binary`].

use crate::print::PrintMode;

/// Values closer than this to zero (or to ±1) print as zero (or unit).
pub const PRINT_TOLERANCE: f64 = 1e-10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    pub fn of(value: f64) -> Self {
        if value < 0.0 {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }

    /// Sign of a leading term: `-` or nothing.
    pub fn unary(self) -> &'static str {
        match self {
            Sign::Positive => "",
            Sign::Negative => "-",
        }
    }

    /// Sign joining a term to what precedes it.
    pub fn binary(self) -> &'static str {
        match self {
            Sign::Positive => " + ",
            Sign::Negative => " - ",
        }
    }

    pub fn is_negative(self) -> bool {
        matches!(self, Sign::Negative)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub sign: Sign,
    /// Coefficient magnitude; empty when a unit coefficient was elided.
    pub text: String,
}

impl Term {
    pub fn new(sign: Sign, text: impl Into<String>) -> Self {
        Self {
            sign,
            text: text.into(),
        }
    }

    /// `sign + text + " " + factor`, dropping the space when `text` is empty.
    pub(crate) fn write_with_factor(&self, out: &mut String, leading: bool, factor: &str) {
        out.push_str(if leading {
            self.sign.unary()
        } else {
            self.sign.binary()
        });
        if !self.text.is_empty() {
            out.push_str(&self.text);
            out.push(' ');
        }
        out.push_str(factor);
    }
}

pub fn is_zero_for_printing(value: f64) -> bool {
    value.abs() < PRINT_TOLERANCE
}

pub fn is_one_for_printing(value: f64) -> bool {
    is_zero_for_printing(value.abs() - 1.0)
}

/// Imaginary unit literal: `im` in terminals, `i` in markup.
pub fn imaginary_unit(mode: PrintMode) -> &'static str {
    match mode {
        PrintMode::Terminal(_) => "im",
        PrintMode::Markup => "i",
    }
}

/// Shared composition for real scalars.
///
/// `magnitude` renders `|value|`; it is only called when the text is not
/// elided.
pub(crate) fn compose_real(
    sign: Sign,
    is_zero: bool,
    is_unit: bool,
    elide_unit: bool,
    magnitude: impl FnOnce() -> String,
) -> Option<Term> {
    if is_zero {
        return None;
    }
    if elide_unit && is_unit {
        return Some(Term::new(sign, String::new()));
    }
    Some(Term::new(sign, magnitude()))
}

//! Scalar formatting and the [`Coefficient`] trait.
//!
//! Floats print in their shortest round-trip form with a trailing `.0`
//! removed. Magnitudes outside `[1e-4, 1e6)` switch to scientific notation,
//! which markup mode rewrites as `m \times 10^{e}`.

use std::fmt;

use num_complex::Complex;
use num_traits::Zero;

use crate::print::PrintMode;
use crate::print::term::{
    Sign, Term, compose_real, imaginary_unit, is_one_for_printing, is_zero_for_printing,
};

const SCIENTIFIC_ABOVE: f64 = 1e6;
const SCIENTIFIC_BELOW: f64 = 1e-4;

/// A scalar that can appear as a coefficient, constant or bound.
pub trait Coefficient: Copy + Zero + fmt::Display {
    /// Standalone rendering, sign included.
    fn format(self, mode: PrintMode) -> String;

    /// Sign and magnitude text for use in front of a factor, `None` when
    /// the value is negligible. With `elide_unit`, a unit magnitude renders
    /// as empty text.
    fn sign_and_text(self, mode: PrintMode, elide_unit: bool) -> Option<Term>;

    fn is_negligible(self) -> bool;

    /// `Some(sign)` for infinite values.
    fn infinity_sign(self) -> Option<Sign> {
        None
    }
}

/// Render `value` in `mode`.
pub fn format_number<T: Coefficient>(mode: PrintMode, value: T) -> String {
    value.format(mode)
}

fn shortest_repr<F: fmt::Debug + fmt::LowerExp>(value: F, magnitude: f64) -> String {
    let scientific =
        magnitude.is_finite() && (magnitude >= SCIENTIFIC_ABOVE || magnitude < SCIENTIFIC_BELOW);
    if scientific {
        format!("{value:e}")
    } else {
        format!("{value:?}")
    }
}

fn finish_real(mode: PrintMode, repr: String) -> String {
    let trimmed = repr.strip_suffix(".0").unwrap_or(&repr);
    if mode.is_markup()
        && let Some((mantissa, exponent)) = trimmed.split_once('e')
    {
        return format!("{mantissa} \\times 10^{{{exponent}}}");
    }
    trimmed.to_string()
}

macro_rules! impl_float_coefficient {
    ($($ty:ty),*) => {$(
        impl Coefficient for $ty {
            fn format(self, mode: PrintMode) -> String {
                if self == 0.0 {
                    return "0".to_string();
                }
                finish_real(mode, shortest_repr(self, f64::from(self).abs()))
            }

            fn sign_and_text(self, mode: PrintMode, elide_unit: bool) -> Option<Term> {
                let value = f64::from(self);
                compose_real(
                    Sign::of(value),
                    is_zero_for_printing(value),
                    is_one_for_printing(value),
                    elide_unit,
                    || self.abs().format(mode),
                )
            }

            fn is_negligible(self) -> bool {
                is_zero_for_printing(f64::from(self))
            }

            fn infinity_sign(self) -> Option<Sign> {
                self.is_infinite().then(|| Sign::of(f64::from(self)))
            }
        }
    )*};
}

macro_rules! impl_integer_coefficient {
    ($($ty:ty),*) => {$(
        impl Coefficient for $ty {
            fn format(self, _mode: PrintMode) -> String {
                self.to_string()
            }

            fn sign_and_text(self, _mode: PrintMode, elide_unit: bool) -> Option<Term> {
                let signed = i128::from(self);
                let magnitude = signed.unsigned_abs();
                let sign = if signed < 0 {
                    Sign::Negative
                } else {
                    Sign::Positive
                };
                compose_real(sign, magnitude == 0, magnitude == 1, elide_unit, || {
                    magnitude.to_string()
                })
            }

            fn is_negligible(self) -> bool {
                self == Self::zero()
            }
        }
    )*};
}

impl_float_coefficient!(f32, f64);
impl_integer_coefficient!(i32, i64, u32, u64);

impl Coefficient for Complex<f64> {
    fn format(self, mode: PrintMode) -> String {
        let unit = imaginary_unit(mode);
        match (is_zero_for_printing(self.re), is_zero_for_printing(self.im)) {
            (true, true) => "0".to_string(),
            (_, true) => self.re.format(mode),
            (true, false) => format!("{}{unit}", self.im.format(mode)),
            (false, false) => format!(
                "{}{}{}{unit}",
                self.re.format(mode),
                Sign::of(self.im).binary(),
                self.im.abs().format(mode)
            ),
        }
    }

    // A fully complex coefficient is parenthesized and reports a positive
    // sign: its own sign is already inside the parentheses.
    fn sign_and_text(self, mode: PrintMode, elide_unit: bool) -> Option<Term> {
        match (is_zero_for_printing(self.re), is_zero_for_printing(self.im)) {
            (true, true) => None,
            (_, true) => self.re.sign_and_text(mode, elide_unit),
            (true, false) => {
                let unit = imaginary_unit(mode);
                let text = if elide_unit && is_one_for_printing(self.im) {
                    unit.to_string()
                } else {
                    format!("{}{unit}", self.im.abs().format(mode))
                };
                Some(Term::new(Sign::of(self.im), text))
            }
            (false, false) => Some(Term::new(Sign::Positive, format!("({})", self.format(mode)))),
        }
    }

    fn is_negligible(self) -> bool {
        is_zero_for_printing(self.re) && is_zero_for_printing(self.im)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    const TERMINAL: PrintMode = PrintMode::Terminal(crate::print::Charset::Unicode);
    const MARKUP: PrintMode = PrintMode::Markup;

    #[test]
    fn zero_renders_bare_regardless_of_sign() {
        for mode in [TERMINAL, MARKUP] {
            assert_eq!(format_number(mode, 0.0), "0");
            assert_eq!(format_number(mode, -0.0), "0");
            assert_eq!(format_number(mode, 0_i64), "0");
        }
    }

    #[test]
    fn trailing_point_zero_is_stripped() {
        assert_eq!(format_number(TERMINAL, 5.0), "5");
        assert_eq!(format_number(TERMINAL, 5.3), "5.3");
        assert_eq!(format_number(MARKUP, -12.0), "-12");
        assert_eq!(format_number(TERMINAL, 100000.0), "100000");
    }

    #[test]
    fn shortest_round_trip_digits() {
        assert_eq!(format_number(TERMINAL, 0.1), "0.1");
        assert_eq!(format_number(TERMINAL, 0.1_f32), "0.1");
        assert_eq!(format_number(TERMINAL, 2.5e-3), "0.0025");
    }

    #[test]
    fn large_and_small_values_use_scientific_notation() {
        assert_eq!(format_number(TERMINAL, 1.0e10), "1e10");
        assert_eq!(format_number(TERMINAL, 1.5e-7), "1.5e-7");
        assert_eq!(format_number(TERMINAL, -2.0e6), "-2e6");
    }

    #[test]
    fn markup_rewrites_exponent() {
        let rendered = format_number(MARKUP, 1.0e10);
        assert!(rendered.contains("\\times 10^{"));
        assert_eq!(rendered, "1 \\times 10^{10}");
        assert_eq!(format_number(MARKUP, 1.5e-7), "1.5 \\times 10^{-7}");
    }

    #[test]
    fn integers_use_natural_form() {
        assert_eq!(format_number(TERMINAL, 42_i32), "42");
        assert_eq!(format_number(MARKUP, -7_i64), "-7");
        assert_eq!(format_number(TERMINAL, 3_u64), "3");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_number(TERMINAL, f64::INFINITY), "inf");
        assert_eq!(format_number(TERMINAL, f64::NEG_INFINITY), "-inf");
        assert_eq!(format_number(TERMINAL, f64::NAN), "NaN");
        assert_eq!(f64::NEG_INFINITY.infinity_sign(), Some(Sign::Negative));
        assert_eq!(3.0_f64.infinity_sign(), None);
    }

    #[test]
    fn real_terms_elide_unit_and_split_sign() {
        assert_eq!(
            (-3.0).sign_and_text(TERMINAL, true),
            Some(Term::new(Sign::Negative, "3"))
        );
        assert_eq!(
            1.0.sign_and_text(TERMINAL, true),
            Some(Term::new(Sign::Positive, ""))
        );
        assert_eq!(
            (-1.0 - 1e-12).sign_and_text(TERMINAL, true),
            Some(Term::new(Sign::Negative, ""))
        );
        assert_eq!(
            1.0.sign_and_text(TERMINAL, false),
            Some(Term::new(Sign::Positive, "1"))
        );
        assert_eq!(1e-11.sign_and_text(TERMINAL, true), None);
    }

    #[test]
    fn integer_terms() {
        assert_eq!(
            (-1_i64).sign_and_text(TERMINAL, true),
            Some(Term::new(Sign::Negative, ""))
        );
        assert_eq!(
            (-4_i32).sign_and_text(TERMINAL, true),
            Some(Term::new(Sign::Negative, "4"))
        );
        assert_eq!(0_u32.sign_and_text(TERMINAL, true), None);
        assert!(0_i64.is_negligible());
    }

    #[test]
    fn pure_imaginary_term_uses_mode_unit() {
        let two_i = Complex64::new(0.0, 2.0);
        assert_eq!(
            two_i.sign_and_text(TERMINAL, true),
            Some(Term::new(Sign::Positive, "2im"))
        );
        assert_eq!(
            two_i.sign_and_text(MARKUP, true),
            Some(Term::new(Sign::Positive, "2i"))
        );
    }

    #[test]
    fn negative_unit_imaginary_keeps_unit_symbol() {
        let minus_i = Complex64::new(0.0, -1.0);
        let term = minus_i.sign_and_text(TERMINAL, true).expect("nonzero");
        assert_eq!(term.sign, Sign::Negative);
        assert_eq!(term.text, "im");
        let kept = minus_i.sign_and_text(TERMINAL, false).expect("nonzero");
        assert_eq!(kept.text, "1im");
    }

    #[test]
    fn complex_with_both_parts_is_parenthesized_and_positive() {
        let c = Complex64::new(-1.0, -2.5);
        assert_eq!(
            c.sign_and_text(TERMINAL, true),
            Some(Term::new(Sign::Positive, "(-1 - 2.5im)"))
        );
        assert_eq!(
            Complex64::new(3.0, 1.0).sign_and_text(MARKUP, true),
            Some(Term::new(Sign::Positive, "(3 + 1i)"))
        );
    }

    #[test]
    fn complex_degenerate_cases() {
        assert_eq!(Complex64::new(0.0, 0.0).sign_and_text(TERMINAL, true), None);
        assert_eq!(
            Complex64::new(-2.0, 0.0).sign_and_text(TERMINAL, true),
            Some(Term::new(Sign::Negative, "2"))
        );
        assert_eq!(format_number(TERMINAL, Complex64::new(0.0, -3.0)), "-3im");
        assert_eq!(format_number(MARKUP, Complex64::new(1.0, 2.0)), "1 + 2i");
        assert_eq!(format_number(TERMINAL, Complex64::new(0.0, 0.0)), "0");
    }
}

//! Dual-mode rendering of functions, sets and whole models.
//!
//! Every entry point takes a [`PrintMode`] explicitly; nothing in this
//! module reads global state.
//!
//! - [`symbols`]: symbol table per mode
//! - [`number`]: scalar formatting and the [`Coefficient`] trait
//! - [`term`]: sign/coefficient composition for a single term
//! - [`function`]: function values to strings
//! - [`set`]: set membership phrases
//! - [`model`]: whole-model documents

pub mod function;
pub mod model;
pub mod number;
pub mod set;
pub mod symbols;
pub mod term;

pub use function::{
    VariableNameResolver, constraint_string, default_variable_name, function_string,
};
pub use model::{markup_string, model_string, terminal_string};
pub use number::{Coefficient, format_number};
pub use set::in_set_string;
pub use symbols::{Symbol, symbol};
pub use term::{Sign, Term};

const ASCII_ENV_VAR: &str = "OPTFMT_ASCII";

/// Character repertoire available to terminal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Charset {
    #[default]
    Unicode,
    Ascii,
}

impl Charset {
    /// `Ascii` when `OPTFMT_ASCII` is set to `1`, `true` or `yes`.
    ///
    /// Only front ends should call this; the printer itself takes the
    /// charset as an argument.
    pub fn from_env() -> Self {
        match std::env::var(ASCII_ENV_VAR) {
            Ok(value) if is_truthy(&value) => Charset::Ascii,
            _ => Charset::Unicode,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Charset::Unicode => "unicode",
            Charset::Ascii => "ascii",
        }
    }
}

fn is_truthy(value: &str) -> bool {
    let value = value.trim();
    value == "1" || value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("yes")
}

/// Output grammar: plain text for terminals or LaTeX for notebooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    Terminal(Charset),
    Markup,
}

impl PrintMode {
    /// Terminal output with Unicode glyphs.
    pub fn terminal() -> Self {
        PrintMode::Terminal(Charset::Unicode)
    }

    /// Terminal output restricted to ASCII.
    pub fn ascii() -> Self {
        PrintMode::Terminal(Charset::Ascii)
    }

    /// LaTeX output.
    pub fn markup() -> Self {
        PrintMode::Markup
    }

    pub fn is_markup(self) -> bool {
        matches!(self, PrintMode::Markup)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PrintMode::Terminal(Charset::Unicode) => "terminal",
            PrintMode::Terminal(Charset::Ascii) => "ascii",
            PrintMode::Markup => "markup",
        }
    }
}

impl Default for PrintMode {
    fn default() -> Self {
        Self::terminal()
    }
}

impl std::fmt::Display for PrintMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_pick_charset() {
        assert_eq!(PrintMode::terminal(), PrintMode::Terminal(Charset::Unicode));
        assert_eq!(PrintMode::ascii(), PrintMode::Terminal(Charset::Ascii));
        assert!(PrintMode::markup().is_markup());
        assert!(!PrintMode::ascii().is_markup());
    }

    #[test]
    fn default_mode_is_unicode_terminal() {
        assert_eq!(PrintMode::default().as_str(), "terminal");
    }

    #[test]
    fn truthy_values() {
        assert!(is_truthy("1"));
        assert!(is_truthy(" TRUE "));
        assert!(is_truthy("yes"));
        assert!(!is_truthy("0"));
        assert!(!is_truthy(""));
    }
}

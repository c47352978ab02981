//! Function values to strings.

use std::fmt::Write as _;

use optfmt_expr::ids::VariableIndex;
use optfmt_expr::{
    Function, ScalarAffineFunction, ScalarQuadraticFunction, Set, VectorAffineFunction,
};

use crate::print::number::Coefficient;
use crate::print::set::in_set_string;
use crate::print::symbols::{Symbol, symbol};
use crate::print::PrintMode;

/// Maps a variable to its display name.
pub type VariableNameResolver<'a> = &'a dyn Fn(VariableIndex) -> String;

/// Fallback name for variables without one: `x[<index>]`.
pub fn default_variable_name(variable: VariableIndex) -> String {
    format!("x[{}]", variable.value())
}

/// Render `function` in `mode`.
///
/// With `show_constant` false, affine constants are left out; a function
/// with nothing else to show renders `0`.
pub fn function_string<T: Coefficient>(
    mode: PrintMode,
    function: &Function<T>,
    resolver: VariableNameResolver<'_>,
    show_constant: bool,
) -> String {
    match function {
        Function::Variable(variable) => variable_string(mode, *variable, resolver),
        Function::Affine(affine) => affine_string(mode, affine, resolver, show_constant),
        Function::Quadratic(quadratic) => {
            quadratic_string(mode, quadratic, resolver, show_constant)
        }
        Function::VectorOfVariables(vector) => bracketed(
            vector
                .variables()
                .iter()
                .map(|variable| variable_string(mode, *variable, resolver)),
        ),
        Function::VectorAffine(vector) => {
            vector_affine_string(mode, vector, resolver, show_constant)
        }
    }
}

/// `[<name> : ]<function> <set phrase>`; an empty name adds no label.
pub fn constraint_string<T: Coefficient>(
    mode: PrintMode,
    name: &str,
    function: &Function<T>,
    set: &Set<T>,
    resolver: VariableNameResolver<'_>,
) -> String {
    let body = format!(
        "{} {}",
        function_string(mode, function, resolver, true),
        in_set_string(mode, set)
    );
    if name.is_empty() {
        body
    } else {
        format!("{name} : {body}")
    }
}

// Markup turns the first index bracket pair into a subscript. Only one
// replacement each, so a literal `]` inside the index breaks the subscript.
fn variable_string(
    mode: PrintMode,
    variable: VariableIndex,
    resolver: VariableNameResolver<'_>,
) -> String {
    let name = resolver(variable);
    if mode.is_markup() {
        name.replacen('[', "_{", 1).replacen(']', "}", 1)
    } else {
        name
    }
}

fn affine_string<T: Coefficient>(
    mode: PrintMode,
    function: &ScalarAffineFunction<T>,
    resolver: VariableNameResolver<'_>,
    show_constant: bool,
) -> String {
    let mut rendered = String::new();
    let mut leading = true;
    for (variable, coefficient) in function.terms() {
        let Some(term) = coefficient.sign_and_text(mode, true) else {
            continue;
        };
        let name = variable_string(mode, *variable, resolver);
        term.write_with_factor(&mut rendered, leading, &name);
        leading = false;
    }

    if leading {
        return constant_string(mode, function.constant(), show_constant);
    }

    if show_constant
        && let Some(constant) = function.constant().sign_and_text(mode, false)
    {
        rendered.push_str(constant.sign.binary());
        rendered.push_str(&constant.text);
    }
    rendered
}

fn constant_string<T: Coefficient>(mode: PrintMode, constant: T, show_constant: bool) -> String {
    if show_constant {
        constant.format(mode)
    } else {
        "0".to_string()
    }
}

fn quadratic_string<T: Coefficient>(
    mode: PrintMode,
    function: &ScalarQuadraticFunction<T>,
    resolver: VariableNameResolver<'_>,
    show_constant: bool,
) -> String {
    let mut rendered = String::new();
    let mut leading = true;
    for (left, right, coefficient) in function.quadratic_terms() {
        let Some(term) = coefficient.sign_and_text(mode, true) else {
            continue;
        };
        let left_name = variable_string(mode, *left, resolver);
        let factor = if left == right {
            format!("{left_name}{}", symbol(mode, Symbol::Sq))
        } else {
            let right_name = variable_string(mode, *right, resolver);
            format!("{left_name}{}{right_name}", symbol(mode, Symbol::Times))
        };
        term.write_with_factor(&mut rendered, leading, &factor);
        leading = false;
    }

    let affine = affine_string(mode, function.affine(), resolver, show_constant);
    if leading {
        return affine;
    }
    if affine != "0" {
        match affine.strip_prefix('-') {
            Some(negated) => {
                let _ = write!(rendered, " - {negated}");
            }
            None => {
                let _ = write!(rendered, " + {affine}");
            }
        }
    }
    rendered
}

fn vector_affine_string<T: Coefficient>(
    mode: PrintMode,
    function: &VectorAffineFunction<T>,
    resolver: VariableNameResolver<'_>,
    show_constant: bool,
) -> String {
    bracketed(
        function
            .rows()
            .iter()
            .map(|row| affine_string(mode, row, resolver, show_constant)),
    )
}

fn bracketed(components: impl Iterator<Item = String>) -> String {
    format!("[{}]", components.collect::<Vec<_>>().join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;
    use optfmt_expr::VectorOfVariables;

    fn var(index: u32) -> VariableIndex {
        VariableIndex::new(index)
    }

    fn named(variable: VariableIndex) -> String {
        ["x", "y", "z"]
            .get(variable.value() as usize)
            .map_or_else(|| default_variable_name(variable), ToString::to_string)
    }

    fn affine(terms: Vec<(u32, f64)>, constant: f64) -> Function<f64> {
        Function::Affine(ScalarAffineFunction::new(
            terms.into_iter().map(|(v, c)| (var(v), c)).collect(),
            constant,
        ))
    }

    fn terminal(function: &Function<f64>) -> String {
        function_string(PrintMode::terminal(), function, &named, true)
    }

    #[test]
    fn unit_coefficient_is_elided() {
        assert_eq!(terminal(&affine(vec![(0, 1.0)], 0.0)), "x");
        assert_eq!(terminal(&affine(vec![(0, -1.0)], 0.0)), "-x");
    }

    #[test]
    fn leading_term_uses_unary_sign_and_later_terms_binary() {
        let f = affine(vec![(0, -3.0), (1, 2.0), (2, -1.0)], 4.5);
        assert_eq!(terminal(&f), "-3 x + 2 y - z + 4.5");
    }

    #[test]
    fn negative_constant_joins_with_binary_minus() {
        assert_eq!(terminal(&affine(vec![(0, 3.0)], -1.0)), "3 x - 1");
    }

    #[test]
    fn zero_coefficients_are_skipped() {
        let f = affine(vec![(0, 0.0), (1, -2.0)], 0.0);
        assert_eq!(terminal(&f), "-2 y");
    }

    #[test]
    fn all_zero_terms_fall_back_to_constant() {
        let f = affine(vec![(0, 0.0), (1, 1e-12)], -2.0);
        assert_eq!(terminal(&f), "-2");
        assert_eq!(
            function_string(PrintMode::terminal(), &f, &named, false),
            "0"
        );
        assert_eq!(terminal(&affine(vec![], 0.0)), "0");
    }

    #[test]
    fn hidden_constant_is_dropped() {
        let f = affine(vec![(0, 3.0)], 1.0);
        assert_eq!(
            function_string(PrintMode::terminal(), &f, &named, false),
            "3 x"
        );
    }

    #[test]
    fn default_names_become_subscripts_in_markup() {
        let f = affine(vec![(7, 2.0)], 0.0);
        assert_eq!(
            function_string(PrintMode::markup(), &f, &default_variable_name, true),
            "2 x_{7}"
        );
        assert_eq!(
            function_string(PrintMode::terminal(), &f, &default_variable_name, true),
            "2 x[7]"
        );
    }

    #[test]
    fn markup_replaces_only_first_bracket_pair() {
        let resolver = |_: VariableIndex| "y[a][b]".to_string();
        assert_eq!(
            function_string(PrintMode::markup(), &Function::<f64>::Variable(var(0)), &resolver, true),
            "y_{a}[b]"
        );
    }

    #[test]
    fn quadratic_terms_render_square_and_product() {
        let q = ScalarQuadraticFunction::new(
            vec![(var(0), var(0), 2.0), (var(0), var(1), -1.0)],
            ScalarAffineFunction::new(vec![(var(2), -1.0)], 3.0),
        );
        let f = Function::Quadratic(q);
        assert_eq!(terminal(&f), "2 x² - x*y - z + 3");
        assert_eq!(
            function_string(PrintMode::ascii(), &f, &named, true),
            "2 x^2 - x*y - z + 3"
        );
        assert_eq!(
            function_string(PrintMode::markup(), &f, &named, true),
            "2 x^2 - x\\times y - z + 3"
        );
    }

    #[test]
    fn quadratic_without_affine_part() {
        let f = Function::Quadratic(ScalarQuadraticFunction::from_quadratic(vec![(
            var(1),
            var(1),
            1.0,
        )]));
        assert_eq!(terminal(&f), "y²");
    }

    #[test]
    fn quadratic_with_only_zero_products_renders_affine_part() {
        let f = Function::Quadratic(ScalarQuadraticFunction::new(
            vec![(var(0), var(1), 0.0)],
            ScalarAffineFunction::new(vec![(var(2), 4.0)], 0.0),
        ));
        assert_eq!(terminal(&f), "4 z");
    }

    #[test]
    fn vectors_are_bracketed() {
        let vars = Function::<f64>::VectorOfVariables(VectorOfVariables::new(vec![var(0), var(1)]));
        assert_eq!(terminal(&vars), "[x, y]");

        let rows = Function::VectorAffine(VectorAffineFunction::new(vec![
            ScalarAffineFunction::new(vec![(var(0), 1.0)], -1.0),
            ScalarAffineFunction::from_constant(2.0),
        ]));
        assert_eq!(terminal(&rows), "[x - 1, 2]");
    }

    #[test]
    fn complex_coefficients_in_sums() {
        let f = Function::Affine(ScalarAffineFunction::new(
            vec![
                (var(0), Complex64::new(0.0, 2.0)),
                (var(1), Complex64::new(1.0, -1.0)),
                (var(2), Complex64::new(0.0, -1.0)),
            ],
            Complex64::new(0.0, 0.0),
        ));
        assert_eq!(
            function_string(PrintMode::terminal(), &f, &named, true),
            "2im x + (1 - 1im) y - im z"
        );
        assert_eq!(
            function_string(PrintMode::markup(), &f, &named, true),
            "2i x + (1 - 1i) y - i z"
        );
    }

    #[test]
    fn constraint_name_prefix_only_when_named() {
        let f = affine(vec![(0, 1.0)], 0.0);
        let set = Set::LessThan { upper: 10.0 };
        assert_eq!(
            constraint_string(PrintMode::terminal(), "", &f, &set, &named),
            "x ≤ 10"
        );
        assert_eq!(
            constraint_string(PrintMode::terminal(), "c1", &f, &set, &named),
            "c1 : x ≤ 10"
        );
    }
}

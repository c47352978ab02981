//! Set membership phrases, the text that follows a function in a
//! constraint line.

use optfmt_expr::Set;

use crate::print::number::Coefficient;
use crate::print::symbols::{Symbol, symbol};
use crate::print::PrintMode;

/// Render the membership phrase for `set`.
///
/// Sets without a dedicated phrase fall back to `∈ <set>` using the set's
/// natural display form.
pub fn in_set_string<T: Coefficient>(mode: PrintMode, set: &Set<T>) -> String {
    let sym = |tag| symbol(mode, tag);
    match set {
        Set::LessThan { upper } => format!("{} {}", sym(Symbol::Leq), bound(mode, *upper)),
        Set::GreaterThan { lower } => format!("{} {}", sym(Symbol::Geq), bound(mode, *lower)),
        Set::EqualTo { value } => format!("{} {}", sym(Symbol::Eq), bound(mode, *value)),
        Set::Interval { lower, upper } => format!(
            "{} {}",
            sym(Symbol::In),
            closed_range(mode, *lower, *upper)
        ),
        Set::ZeroOne => "binary".to_string(),
        Set::Integer => sym(Symbol::Integer).to_string(),
        Set::Semicontinuous { lower, upper } => format!(
            "{} {} {}",
            sym(Symbol::In),
            zero_singleton(mode),
            closed_range(mode, *lower, *upper)
        ),
        Set::Semiinteger { lower, upper } => format!(
            "{} {} {}{}, {}, {}{}",
            sym(Symbol::In),
            zero_singleton(mode),
            sym(Symbol::OpenSet),
            bound(mode, *lower),
            sym(Symbol::Dots),
            bound(mode, *upper),
            sym(Symbol::CloseSet)
        ),
        Set::PositiveSemidefiniteConeTriangle { .. } => sym(Symbol::Succeq0).to_string(),
        other if mode.is_markup() => format!("{} \\text{{{other}}}", sym(Symbol::In)),
        other => format!("{} {other}", sym(Symbol::In)),
    }
}

fn bound<T: Coefficient>(mode: PrintMode, value: T) -> String {
    match value.infinity_sign() {
        Some(sign) => format!("{}{}", sign.unary(), symbol(mode, Symbol::Infty)),
        None => value.format(mode),
    }
}

fn closed_range<T: Coefficient>(mode: PrintMode, lower: T, upper: T) -> String {
    format!(
        "{}{}, {}{}",
        symbol(mode, Symbol::OpenRng),
        bound(mode, lower),
        bound(mode, upper),
        symbol(mode, Symbol::CloseRng)
    )
}

// `{0} ∪` prefix shared by the semi-continuous families.
fn zero_singleton(mode: PrintMode) -> String {
    format!(
        "{}0{} {}",
        symbol(mode, Symbol::OpenSet),
        symbol(mode, Symbol::CloseSet),
        symbol(mode, Symbol::Union)
    )
}

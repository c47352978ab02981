//! Symbol table: abstract math tags to mode-specific literals.

use crate::print::{Charset, PrintMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Leq,
    Geq,
    Eq,
    Times,
    Sq,
    IndOpen,
    IndClose,
    ForAll,
    In,
    OpenSet,
    Dots,
    CloseSet,
    Union,
    Infty,
    OpenRng,
    CloseRng,
    Integer,
    Succeq0,
    Vert,
    Sub2,
}

impl Symbol {
    pub const ALL: [Symbol; 20] = [
        Symbol::Leq,
        Symbol::Geq,
        Symbol::Eq,
        Symbol::Times,
        Symbol::Sq,
        Symbol::IndOpen,
        Symbol::IndClose,
        Symbol::ForAll,
        Symbol::In,
        Symbol::OpenSet,
        Symbol::Dots,
        Symbol::CloseSet,
        Symbol::Union,
        Symbol::Infty,
        Symbol::OpenRng,
        Symbol::CloseRng,
        Symbol::Integer,
        Symbol::Succeq0,
        Symbol::Vert,
        Symbol::Sub2,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Symbol::Leq => "leq",
            Symbol::Geq => "geq",
            Symbol::Eq => "eq",
            Symbol::Times => "times",
            Symbol::Sq => "sq",
            Symbol::IndOpen => "ind_open",
            Symbol::IndClose => "ind_close",
            Symbol::ForAll => "for_all",
            Symbol::In => "in",
            Symbol::OpenSet => "open_set",
            Symbol::Dots => "dots",
            Symbol::CloseSet => "close_set",
            Symbol::Union => "union",
            Symbol::Infty => "infty",
            Symbol::OpenRng => "open_rng",
            Symbol::CloseRng => "close_rng",
            Symbol::Integer => "integer",
            Symbol::Succeq0 => "succeq0",
            Symbol::Vert => "Vert",
            Symbol::Sub2 => "sub2",
        }
    }
}

/// Literal for `tag` in `mode`.
pub fn symbol(mode: PrintMode, tag: Symbol) -> &'static str {
    match mode {
        PrintMode::Terminal(Charset::Unicode) => unicode(tag),
        PrintMode::Terminal(Charset::Ascii) => ascii(tag).unwrap_or_else(|| unicode(tag)),
        PrintMode::Markup => latex(tag),
    }
}

fn unicode(tag: Symbol) -> &'static str {
    match tag {
        Symbol::Leq => "≤",
        Symbol::Geq => "≥",
        Symbol::Eq => "=",
        Symbol::Times => "*",
        Symbol::Sq => "²",
        Symbol::IndOpen => "[",
        Symbol::IndClose => "]",
        Symbol::ForAll => "∀",
        Symbol::In => "∈",
        Symbol::OpenSet => "{",
        Symbol::Dots => "…",
        Symbol::CloseSet => "}",
        Symbol::Union => "∪",
        Symbol::Infty => "∞",
        Symbol::OpenRng => "[",
        Symbol::CloseRng => "]",
        Symbol::Integer => "integer",
        Symbol::Succeq0 => "⪰ 0",
        Symbol::Vert => "‖",
        Symbol::Sub2 => "₂",
    }
}

// Tags whose unicode literal is already ASCII fall through to `unicode`.
fn ascii(tag: Symbol) -> Option<&'static str> {
    let literal = match tag {
        Symbol::Leq => "<=",
        Symbol::Geq => ">=",
        Symbol::Eq => "==",
        Symbol::Sq => "^2",
        Symbol::ForAll => "for all",
        Symbol::In => "in",
        Symbol::Dots => "..",
        Symbol::Union => "or",
        Symbol::Infty => "Inf",
        Symbol::Succeq0 => "is semidefinite",
        Symbol::Vert => "||",
        Symbol::Sub2 => "_2",
        _ => return None,
    };
    Some(literal)
}

fn latex(tag: Symbol) -> &'static str {
    match tag {
        Symbol::Leq => "\\leq",
        Symbol::Geq => "\\geq",
        Symbol::Eq => "=",
        Symbol::Times => "\\times ",
        Symbol::Sq => "^2",
        Symbol::IndOpen => "_{",
        Symbol::IndClose => "}",
        Symbol::ForAll => "\\quad\\forall",
        Symbol::In => "\\in",
        Symbol::OpenSet => "\\{",
        Symbol::Dots => "\\dots",
        Symbol::CloseSet => "\\}",
        Symbol::Union => "\\cup",
        Symbol::Infty => "\\infty",
        Symbol::OpenRng => "[",
        Symbol::CloseRng => "]",
        Symbol::Integer => "\\in \\mathbb{Z}",
        Symbol::Succeq0 => "\\succeq 0",
        Symbol::Vert => "\\Vert",
        Symbol::Sub2 => "_2",
    }
}

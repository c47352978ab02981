//! Whole-model documents.
//!
//! Terminal output:
//!
//! ```text
//! Min 3 x + 1
//! Subject to
//!  x ≤ 10
//! ```
//!
//! Markup output wraps the same lines in an `aligned` block, with ` & ` as
//! the column separator and `\\` ending each line.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::time::Instant;

use num_traits::Zero;
use optfmt_expr::Function;
use optfmt_expr::ids::VariableIndex;

use crate::model::ModelError;
use crate::print::function::{
    VariableNameResolver, constraint_string, default_variable_name, function_string,
};
use crate::print::{Charset, PrintMode};
use crate::types::ObjectiveSense;
use crate::view::ModelView;

const MARKUP_HEADER: &str = "$$ \\begin{aligned}\n";
const MARKUP_FOOTER: &str = "\\end{aligned} $$";

struct Layout {
    separator: &'static str,
    line_break: &'static str,
}

impl Layout {
    fn for_mode(mode: PrintMode) -> Self {
        if mode.is_markup() {
            Self {
                separator: " & ",
                line_break: "\\\\\n",
            }
        } else {
            Self {
                separator: " ",
                line_break: "\n",
            }
        }
    }
}

fn sense_keyword(mode: PrintMode, sense: ObjectiveSense) -> &'static str {
    match (mode.is_markup(), sense) {
        (false, ObjectiveSense::Min) => "Min",
        (false, ObjectiveSense::Max) => "Max",
        (false, ObjectiveSense::Feasibility) => "Feasibility",
        (true, ObjectiveSense::Min) => "\\min",
        (true, ObjectiveSense::Max) => "\\max",
        (true, ObjectiveSense::Feasibility) => "\\text{feasibility}",
    }
}

fn subject_to(mode: PrintMode) -> &'static str {
    if mode.is_markup() {
        "\\text{Subject to} \\quad"
    } else {
        "Subject to\n"
    }
}

/// Per-render cache of model-provided variable names.
///
/// Names are fetched before a function is rendered so that lookup failures
/// surface as errors instead of inside the infallible fragment renderers.
struct NameCache<'m, M: ?Sized> {
    model: &'m M,
    names: BTreeMap<VariableIndex, String>,
}

impl<'m, M: ModelView + ?Sized> NameCache<'m, M> {
    fn new(model: &'m M) -> Self {
        Self {
            model,
            names: BTreeMap::new(),
        }
    }

    fn with_resolver<T, R>(
        &mut self,
        function: &Function<T>,
        custom: Option<VariableNameResolver<'_>>,
        render: impl FnOnce(VariableNameResolver<'_>) -> R,
    ) -> Result<R, ModelError>
    where
        T: Copy + Zero,
    {
        if let Some(custom) = custom {
            return Ok(render(custom));
        }
        for variable in function.variables() {
            if let Entry::Vacant(slot) = self.names.entry(variable) {
                slot.insert(self.model.resolve_variable_name(variable)?);
            }
        }
        let names = &self.names;
        let cached = |variable: VariableIndex| {
            names
                .get(&variable)
                .cloned()
                .unwrap_or_else(|| default_variable_name(variable))
        };
        Ok(render(&cached))
    }
}

/// Render `model` as a complete document in `mode`.
///
/// `resolver` overrides variable naming; without it, names come from the
/// model when it supports them and fall back to `x[<index>]`. The first
/// failing model query aborts the render.
pub fn model_string<M: ModelView + ?Sized>(
    mode: PrintMode,
    model: &M,
    resolver: Option<VariableNameResolver<'_>>,
) -> Result<String, ModelError> {
    let started = Instant::now();
    let layout = Layout::for_mode(mode);
    let mut names = NameCache::new(model);
    let mut document = String::new();

    let sense = model.objective_sense()?;
    document.push_str(sense_keyword(mode, sense));
    if sense != ObjectiveSense::Feasibility {
        let objective = model.objective_function()?;
        if mode.is_markup() {
            document.push_str("\\quad");
        }
        document.push_str(layout.separator);
        let rendered = names.with_resolver(&objective, resolver, |resolve| {
            function_string(mode, &objective, resolve, true)
        })?;
        document.push_str(&rendered);
    }
    document.push_str(layout.line_break);
    document.push_str(subject_to(mode));

    let mut constraints = Vec::new();
    for ty in model.constraint_types()? {
        let indices = model.constraint_indices(ty)?;
        let named = model.supports_constraint_names(ty);
        tracing::trace!(
            component = "print",
            operation = "render_constraints",
            constraint_type = %ty,
            constraints = indices.len(),
            named,
            "Rendering constraint group"
        );
        for index in indices {
            let function = model.constraint_function(index)?;
            let set = model.constraint_set(index)?;
            let name = if named {
                model.constraint_name(index)?
            } else {
                String::new()
            };
            let mut line = names.with_resolver(&function, resolver, |resolve| {
                constraint_string(mode, &name, &function, &set, resolve)
            })?;
            if !mode.is_markup() {
                line = line.replace('\n', &format!("\n{}", layout.separator));
            }
            constraints.push(line);
        }
    }

    if !constraints.is_empty() {
        document.push_str(layout.separator);
        document.push_str(&constraints.join(&format!("{}{}", layout.line_break, layout.separator)));
        document.push_str(layout.line_break);
    }

    let document = if mode.is_markup() {
        format!("{MARKUP_HEADER}{document}{MARKUP_FOOTER}")
    } else {
        document
    };

    tracing::debug!(
        component = "print",
        operation = "model_string",
        status = "success",
        mode = mode.as_str(),
        sense = sense.as_str(),
        constraints = constraints.len(),
        bytes = document.len(),
        duration_ms = started.elapsed().as_secs_f64() * 1000.0,
        "Rendered model"
    );
    Ok(document)
}

/// Plain-text document for terminals.
pub fn terminal_string<M: ModelView + ?Sized>(
    model: &M,
    charset: Charset,
    resolver: Option<VariableNameResolver<'_>>,
) -> Result<String, ModelError> {
    model_string(PrintMode::Terminal(charset), model, resolver)
}

/// LaTeX document wrapped in a display-math `aligned` block.
pub fn markup_string<M: ModelView + ?Sized>(
    model: &M,
    resolver: Option<VariableNameResolver<'_>>,
) -> Result<String, ModelError> {
    model_string(PrintMode::Markup, model, resolver)
}

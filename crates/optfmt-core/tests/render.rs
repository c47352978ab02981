use num_complex::Complex64;
use optfmt_core::print::{constraint_string, function_string, in_set_string};
use optfmt_core::{
    Charset, InMemoryModel, ModelError, ObjectiveSense, PrintMode, UnsupportedOperation,
    markup_string, terminal_string,
};
use optfmt_expr::ids::VariableIndex;
use optfmt_expr::{
    Function, ScalarAffineFunction, ScalarQuadraticFunction, Set, VectorAffineFunction,
    VectorOfVariables,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn production_model() -> InMemoryModel {
    let mut model = InMemoryModel::new();
    let vars = model.add_variables(3).expect("variables");
    for (var, name) in vars.iter().zip(["gen[1]", "gen[2]", "on"]) {
        model.set_variable_name(*var, name).expect("name");
    }
    let (g1, g2, on) = (vars[0], vars[1], vars[2]);

    model
        .set_objective(
            ObjectiveSense::Min,
            ScalarAffineFunction::new(vec![(g1, 2.5), (g2, 4.0), (on, 100.0)], 0.0).into(),
        )
        .expect("objective");

    let demand = model
        .add_constraint_expr(ScalarAffineFunction::new(vec![(g1, 1.0), (g2, 1.0)], 0.0).ge_scalar(50.0))
        .expect("demand");
    model.set_constraint_name(demand, "demand").expect("name");
    model
        .add_constraint_expr(
            ScalarAffineFunction::new(vec![(g1, 1.0), (on, -80.0)], 0.0).le_scalar(0.0),
        )
        .expect("capacity");
    model
        .add_constraint(
            Function::Variable(g2),
            Set::Interval {
                lower: 0.0,
                upper: 1.0e6,
            },
        )
        .expect("range");
    model
        .add_constraint(Function::Variable(on), Set::ZeroOne)
        .expect("binary");
    model
}

#[test]
fn terminal_document_for_production_model() {
    init_tracing();
    let rendered = terminal_string(&production_model(), Charset::Unicode, None).expect("render");
    assert_eq!(
        rendered,
        "Min 2.5 gen[1] + 4 gen[2] + 100 on\n\
         Subject to\n \
         demand : gen[1] + gen[2] ≥ 50\n \
         gen[1] - 80 on ≤ 0\n \
         gen[2] ∈ [0, 1e6]\n \
         on binary\n"
    );
}

#[test]
fn ascii_document_avoids_unicode() {
    init_tracing();
    let rendered = terminal_string(&production_model(), Charset::Ascii, None).expect("render");
    assert!(rendered.is_ascii());
    assert!(rendered.contains("demand : gen[1] + gen[2] >= 50"));
    assert!(rendered.contains("gen[2] in [0, 1e6]"));
}

#[test]
fn markup_document_for_production_model() {
    init_tracing();
    let rendered = markup_string(&production_model(), None).expect("render");
    assert_eq!(
        rendered,
        "$$ \\begin{aligned}\n\
         \\min\\quad & 2.5 gen_{1} + 4 gen_{2} + 100 on\\\\\n\
         \\text{Subject to} \\quad & demand : gen_{1} + gen_{2} \\geq 50\\\\\n \
         & gen_{1} - 80 on \\leq 0\\\\\n \
         & gen_{2} \\in [0, 1 \\times 10^{6}]\\\\\n \
         & on binary\\\\\n\
         \\end{aligned} $$"
    );
}

#[test]
fn complex_model_renders_imaginary_units() {
    init_tracing();
    let mut model: InMemoryModel<Complex64> = InMemoryModel::new();
    let v = model.add_variable().expect("variable");
    model.set_variable_name(v, "v").expect("name");
    model
        .set_objective(
            ObjectiveSense::Max,
            ScalarAffineFunction::new(vec![(v, Complex64::new(0.0, 2.0))], Complex64::new(1.0, 0.0))
                .into(),
        )
        .expect("objective");
    model
        .add_constraint(
            ScalarAffineFunction::new(vec![(v, Complex64::new(1.0, -1.0))], Complex64::new(0.0, 0.0))
                .into(),
            Set::EqualTo {
                value: Complex64::new(0.0, -1.0),
            },
        )
        .expect("constraint");

    assert_eq!(
        terminal_string(&model, Charset::Unicode, None).expect("render"),
        "Max 2im v + 1\nSubject to\n (1 - 1im) v = -1im\n"
    );
    let markup = markup_string(&model, None).expect("render");
    assert!(markup.contains("\\max\\quad & 2i v + 1"));
    assert!(markup.contains("(1 - 1i) v = -1i"));
}

#[test]
fn integer_coefficients_render_naturally() {
    let mut model: InMemoryModel<i64> = InMemoryModel::new();
    let vars = model.add_variables(2).expect("variables");
    model
        .add_constraint(
            ScalarAffineFunction::new(vec![(vars[0], 1), (vars[1], -3)], 0).into(),
            Set::LessThan { upper: 12 },
        )
        .expect("constraint");
    assert_eq!(
        terminal_string(&model, Charset::Unicode, None).expect("render"),
        "Feasibility\nSubject to\n x[0] - 3 x[1] ≤ 12\n"
    );
}

#[test]
fn vector_and_quadratic_constraints() {
    let mut model = InMemoryModel::new();
    let vars = model.add_variables(3).expect("variables");
    for (var, name) in vars.iter().zip(["t", "a", "b"]) {
        model.set_variable_name(*var, name).expect("name");
    }
    model
        .add_constraint(
            Function::VectorOfVariables(VectorOfVariables::new(vars.clone())),
            Set::SecondOrderCone { dimension: 3 },
        )
        .expect("cone");
    model
        .add_constraint(
            ScalarQuadraticFunction::new(
                vec![(vars[1], vars[1], 1.0), (vars[1], vars[2], 2.0)],
                ScalarAffineFunction::default(),
            )
            .into(),
            Set::LessThan { upper: 4.0 },
        )
        .expect("quadratic");
    model
        .add_constraint(
            Function::VectorAffine(VectorAffineFunction::new(vec![
                ScalarAffineFunction::new(vec![(vars[0], 1.0)], -1.0),
                ScalarAffineFunction::new(vec![(vars[2], 2.0)], 0.0),
            ])),
            Set::Nonnegatives { dimension: 2 },
        )
        .expect("nonnegatives");

    assert_eq!(
        terminal_string(&model, Charset::Unicode, None).expect("render"),
        "Feasibility\nSubject to\n \
         [t, a, b] ∈ SecondOrderCone(3)\n \
         a² + 2 a*b ≤ 4\n \
         [t - 1, 2 b] ∈ Nonnegatives(2)\n"
    );
}

#[test]
fn fragments_render_without_a_model() {
    let x = VariableIndex::new(1);
    let resolver = |v: VariableIndex| format!("y[{}]", v.value());
    let f: Function = ScalarAffineFunction::new(vec![(x, 1.0)], -2.0).into();

    assert_eq!(function_string(PrintMode::terminal(), &f, &resolver, true), "y[1] - 2");
    assert_eq!(function_string(PrintMode::terminal(), &f, &resolver, false), "y[1]");
    assert_eq!(function_string(PrintMode::markup(), &f, &resolver, true), "y_{1} - 2");
    assert_eq!(
        in_set_string(
            PrintMode::terminal(),
            &Set::Interval {
                lower: 2.0,
                upper: 5.0
            }
        ),
        "∈ [2, 5]"
    );
    assert_eq!(
        constraint_string(
            PrintMode::markup(),
            "c1",
            &f,
            &Set::GreaterThan { lower: 0.0 },
            &resolver
        ),
        "c1 : y_{1} - 2 \\geq 0"
    );
}

#[test]
fn display_matches_terminal_string() {
    let model = production_model();
    assert_eq!(
        model.to_string(),
        terminal_string(&model, Charset::Unicode, None).expect("render")
    );
}

#[test]
fn unsupported_errors_surface_with_codes() {
    let mut model = InMemoryModel::<f64>::new();
    let x = model.add_variable().expect("variable");
    let err = model
        .set_objective(
            ObjectiveSense::Min,
            Function::VectorOfVariables(VectorOfVariables::new(vec![x])),
        )
        .expect_err("vector objective");
    assert!(matches!(
        err,
        ModelError::Unsupported(UnsupportedOperation::UnsupportedObjectiveFunction { .. })
    ));
    assert!(
        err.to_string()
            .starts_with("[UNSUPPORTED_OBJECTIVE_FUNCTION] UnsupportedObjectiveFunction: ")
    );
}

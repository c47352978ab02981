use optfmt_expr::ScalarAffineFunction;

use crate::model::InMemoryModel;
use optfmt_expr::ids::VariableIndex;

/// Model with named variables `x`, `y`, `z`.
pub(super) fn model_with_xyz() -> (InMemoryModel, [VariableIndex; 3]) {
    let mut model = InMemoryModel::new();
    let vars = model.add_variables(3).unwrap();
    for (var, name) in vars.iter().zip(["x", "y", "z"]) {
        model.set_variable_name(*var, name).unwrap();
    }
    (model, [vars[0], vars[1], vars[2]])
}

pub(super) fn affine(terms: &[(VariableIndex, f64)], constant: f64) -> ScalarAffineFunction {
    ScalarAffineFunction::new(terms.to_vec(), constant)
}

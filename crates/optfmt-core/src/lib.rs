//! optfmt core: dual-mode printing of optimization models.
//!
//! The [`print`] module renders functions, sets and whole models as terminal
//! text or LaTeX. Models are read through the [`ModelView`] trait;
//! [`InMemoryModel`] is the bundled implementation.

pub mod error;
pub mod model;
pub mod print;
pub mod types;
pub mod view;

pub use error::{ElementIndex, INVALID_STATE_HINT, InvalidStateOperation, UnsupportedOperation};
pub use model::{InMemoryModel, ModelError};
pub use print::{Charset, Coefficient, PrintMode, markup_string, model_string, terminal_string};
pub use types::{Objective, ObjectiveSense};
pub use view::ModelView;

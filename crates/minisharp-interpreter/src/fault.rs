//! Dynamic diagnostics.

use minisharp_syntax::ast::Type;
use thiserror::Error;

/// A problem met while running a program. Faults are reported and
/// evaluation moves on to the next statement.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Fault {
    #[error("variable '{name}' is not bound")]
    UnboundVariable { name: String },
    #[error("index {index} is out of bounds for '{name}' of length {len}")]
    IndexOutOfBounds { name: String, index: f64, len: usize },
    #[error("expected a {expected} value, found {found}")]
    TypeConfusion {
        expected: &'static str,
        found: &'static str,
    },
    #[error("program needs more arguments: expected {expected}, received {received}")]
    MissingArguments { expected: usize, received: usize },
    #[error("argument '{arg}' for parameter '{name}' is not a valid {ty}")]
    MalformedArgument { name: String, ty: Type, arg: String },
}

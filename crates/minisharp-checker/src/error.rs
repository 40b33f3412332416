//! Static diagnostics.

use minisharp_syntax::ast::Type;
use thiserror::Error;

/// A type-check violation. Reported, never fatal: the checker always
/// finishes its traversal.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TypeError {
    #[error("variable '{name}' has already been declared")]
    AlreadyDeclared { name: String },
    #[error("variable '{name}' has not been declared")]
    NotDeclared { name: String },
    #[error("type mismatch on declaration of '{name}': cannot assign {found} to {declared}")]
    DeclarationMismatch {
        name: String,
        declared: Type,
        found: Type,
    },
    #[error("type mismatch on assignment to '{name}': cannot assign {found} to {expected}")]
    AssignmentMismatch {
        name: String,
        expected: Type,
        found: Type,
    },
    #[error("array '{name}' must hold int, not {elem}")]
    ArrayElementType { name: String, elem: Type },
    #[error("variable '{name}' is not an int array (found {found})")]
    NotAnArray { name: String, found: Type },
    #[error("index into '{name}' must be int, found {found}")]
    IndexNotInt { name: String, found: Type },
    #[error("{construct} condition must be boolean, found {found}")]
    ConditionNotBool {
        construct: &'static str,
        found: Type,
    },
    #[error("for loop variable '{name}' cannot be an array")]
    LoopVariableArray { name: String },
    #[error("for loop variable '{name}' must be declared int, not {found}")]
    LoopVariableType { name: String, found: Type },
    #[error("for loop variable '{name}' must be initialized with an int, found {found}")]
    LoopInitNotInt { name: String, found: Type },
    #[error("loop step variable '{name}' must be int, found {found}")]
    StepNotInt { name: String, found: Type },
    #[error("arithmetic type error: {left} {op} {right}")]
    Arithmetic {
        op: &'static str,
        left: Type,
        right: Type,
    },
    #[error("incompatible types in comparison: {left} {op} {right}")]
    Comparison {
        op: &'static str,
        left: Type,
        right: Type,
    },
}

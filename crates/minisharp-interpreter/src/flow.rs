//! Control flow for the interpreter.

use crate::value::Value;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Flow {
    /// Carry on with the next statement
    Continue,
    /// Leave the procedure; `None` when the returned expression faulted
    Return(Option<Value>),
}

//! Minisharp interpreter: evaluates a parsed program by walking its tree.
//!
//! Evaluation never aborts. Problems met at runtime are recorded as
//! [`Fault`]s and execution continues with the next statement, so a
//! program that was rejected by the type checker can still be run.

pub mod binder;
pub mod env;
pub mod fault;
mod flow;
pub mod interpreter;
pub mod value;

pub use binder::bind_params;
pub use env::Env;
pub use fault::Fault;
pub use interpreter::Interpreter;
pub use value::{Number, Value};

use minisharp_syntax::ast::Program;

/// Outcome of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub result: Option<Value>,
    pub faults: Vec<Fault>,
}

/// Runs `program` with `args` in a fresh environment.
pub fn eval(program: &Program, args: &[String]) -> Evaluation {
    let mut interpreter = Interpreter::new();
    let result = interpreter.run(program, &mut Env::new(), args);
    Evaluation {
        result,
        faults: interpreter.take_faults(),
    }
}

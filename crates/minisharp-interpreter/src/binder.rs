//! Binding command-line arguments to procedure parameters.

use minisharp_syntax::ast::{Param, Type};
use tracing::debug;

use crate::env::Env;
use crate::fault::Fault;
use crate::value::{Number, Value};

/// Binds `args` to `params` positionally. Extra arguments are ignored.
///
/// With too few arguments nothing is bound. A malformed argument leaves
/// only its own parameter unbound.
pub fn bind_params(params: &[Param], args: &[String], env: &mut Env) -> Vec<Fault> {
    if args.len() < params.len() {
        return vec![Fault::MissingArguments {
            expected: params.len(),
            received: args.len(),
        }];
    }
    let mut faults = Vec::new();
    for (param, arg) in params.iter().zip(args) {
        match parse_arg(param.ty, arg) {
            Some(n) => env.bind(param.name.clone(), Value::Number(n)),
            None => faults.push(Fault::MalformedArgument {
                name: param.name.clone(),
                ty: param.ty,
                arg: arg.clone(),
            }),
        }
    }
    debug!(
        bound = params.len() - faults.len(),
        ignored = args.len() - params.len(),
        "bound parameters"
    );
    faults
}

/// `int` parameters must be integers; every other type reads as a decimal.
fn parse_arg(ty: Type, arg: &str) -> Option<Number> {
    let arg = arg.trim();
    match ty {
        Type::Int => arg.parse::<i64>().ok().map(Number::from),
        _ => arg.parse::<f64>().ok().map(Number),
    }
}

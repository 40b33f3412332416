//! Main interpreter engine.

use minisharp_syntax::ast::*;
use tracing::{debug, trace, warn};

use crate::binder::bind_params;
use crate::env::Env;
use crate::fault::Fault;
use crate::flow::Flow;
use crate::value::{Number, Value};

#[derive(Debug, Default)]
pub struct Interpreter {
    /// Dynamic diagnostics reported so far
    faults: Vec<Fault>,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn faults(&self) -> &[Fault] {
        &self.faults
    }

    pub fn take_faults(&mut self) -> Vec<Fault> {
        std::mem::take(&mut self.faults)
    }

    /// Binds parameters, runs the body and returns the value of the
    /// first `return` reached, if any.
    pub fn run(&mut self, program: &Program, env: &mut Env, args: &[String]) -> Option<Value> {
        if !program.params().is_empty() {
            for fault in bind_params(program.params(), args, env) {
                self.report(fault);
            }
        }
        debug!(statements = program.body().len(), "running program");
        let result = match self.exec_block(env, program.body()) {
            Flow::Return(v) => v,
            Flow::Continue => None,
        };
        debug!(result = ?result, faults = self.faults.len(), "program finished");
        result
    }

    fn report(&mut self, fault: Fault) {
        warn!(%fault, "runtime fault");
        self.faults.push(fault);
    }

    fn exec_block(&mut self, env: &mut Env, body: &[Stmt]) -> Flow {
        for s in body {
            if let Flow::Return(v) = self.exec_stmt(env, s) {
                return Flow::Return(v);
            }
        }
        Flow::Continue
    }

    fn exec_stmt(&mut self, env: &mut Env, stmt: &Stmt) -> Flow {
        trace!(%stmt, "exec");
        match stmt {
            Stmt::Decl(decl) => self.exec_decl(env, decl),
            Stmt::Assign(Assign::Scalar { name, expr }) => self.bind(env, name, expr),
            Stmt::Assign(Assign::Array { name, values }) => {
                env.bind(name.clone(), Value::Array(values.clone()));
            }
            Stmt::If {
                cond,
                then_body,
                else_body,
            } => {
                return match Self::eval_bool(env, cond) {
                    Ok(true) => self.exec_block(env, then_body),
                    Ok(false) => match else_body {
                        Some(else_body) => self.exec_block(env, else_body),
                        None => Flow::Continue,
                    },
                    Err(f) => {
                        self.report(f);
                        Flow::Continue
                    }
                };
            }
            Stmt::For {
                init,
                cond,
                step,
                body,
            } => {
                self.exec_decl(env, init);
                loop {
                    match Self::eval_bool(env, cond) {
                        Ok(true) => {}
                        Ok(false) => break,
                        Err(f) => {
                            self.report(f);
                            break;
                        }
                    }
                    // A return inside the body skips the step.
                    if let Flow::Return(v) = self.exec_block(env, body) {
                        return Flow::Return(v);
                    }
                    if let Err(f) = Self::exec_step(env, step) {
                        self.report(f);
                        break;
                    }
                }
            }
            Stmt::Return(expr) => {
                return match Self::eval_expr(env, expr) {
                    Ok(v) => Flow::Return(Some(v)),
                    Err(f) => {
                        self.report(f);
                        Flow::Return(None)
                    }
                };
            }
        }
        Flow::Continue
    }

    fn exec_decl(&mut self, env: &mut Env, decl: &Decl) {
        match decl {
            Decl::Scalar { name, init, .. } => self.bind(env, name, init),
            Decl::Array { name, values, .. } => env.bind(name.clone(), Value::Array(values.clone())),
        }
    }

    /// Binds `name` to the value of `expr`; a fault leaves the binding as it was.
    fn bind(&mut self, env: &mut Env, name: &str, expr: &Expr) {
        match Self::eval_expr(env, expr) {
            Ok(v) => env.bind(name, v),
            Err(f) => self.report(f),
        }
    }

    fn exec_step(env: &mut Env, step: &Step) -> Result<(), Fault> {
        let current = Self::lookup_number(env, &step.name)?;
        let next = match step.op {
            StepOp::Increment => current + Number(1.0),
            StepOp::Decrement => current - Number(1.0),
        };
        env.bind(step.name.clone(), Value::Number(next));
        Ok(())
    }

    fn lookup(env: &Env, name: &str) -> Result<Value, Fault> {
        env.get(name).cloned().ok_or_else(|| Fault::UnboundVariable {
            name: name.to_string(),
        })
    }

    fn lookup_number(env: &Env, name: &str) -> Result<Number, Fault> {
        expect_number(Self::lookup(env, name)?)
    }

    fn lookup_array<'e>(env: &'e Env, name: &str) -> Result<&'e [i64], Fault> {
        match env.get(name) {
            Some(Value::Array(items)) => Ok(items),
            Some(other) => Err(Fault::TypeConfusion {
                expected: "array",
                found: other.kind(),
            }),
            None => Err(Fault::UnboundVariable {
                name: name.to_string(),
            }),
        }
    }

    fn eval_number(env: &Env, expr: &Expr) -> Result<Number, Fault> {
        expect_number(Self::eval_expr(env, expr)?)
    }

    fn eval_bool(env: &Env, expr: &Expr) -> Result<bool, Fault> {
        match Self::eval_expr(env, expr)? {
            Value::Bool(b) => Ok(b),
            other => Err(Fault::TypeConfusion {
                expected: "boolean",
                found: other.kind(),
            }),
        }
    }

    fn eval_expr(env: &Env, expr: &Expr) -> Result<Value, Fault> {
        match expr {
            Expr::Const(n) => Ok(Value::from(*n)),
            Expr::Var(name) => Self::lookup(env, name),
            Expr::Paren(inner) => Self::eval_expr(env, inner),
            Expr::Add(a, b) => Ok(Value::Number(Self::eval_number(env, a)? + Self::eval_number(env, b)?)),
            Expr::Sub(a, b) => Ok(Value::Number(Self::eval_number(env, a)? - Self::eval_number(env, b)?)),
            Expr::Mul(a, b) => Ok(Value::Number(Self::eval_number(env, a)? * Self::eval_number(env, b)?)),
            Expr::Div(a, b) => Ok(Value::Number(Self::eval_number(env, a)? / Self::eval_number(env, b)?)),
            Expr::Lt(a, b) => Ok(Value::Bool(Self::eval_number(env, a)? < Self::eval_number(env, b)?)),
            Expr::Gt(a, b) => Ok(Value::Bool(Self::eval_number(env, a)? > Self::eval_number(env, b)?)),
            Expr::Eq(a, b) => Ok(Value::Bool(Self::eval_number(env, a)? == Self::eval_number(env, b)?)),
            Expr::Index(name, index) => {
                let raw = Self::eval_number(env, index)?.get();
                let items = Self::lookup_array(env, name)?;
                let i = raw.trunc();
                if i.is_nan() || i < 0.0 || i >= items.len() as f64 {
                    return Err(Fault::IndexOutOfBounds {
                        name: name.clone(),
                        index: raw,
                        len: items.len(),
                    });
                }
                Ok(Value::from(items[i as usize]))
            }
            Expr::Length(name) => Ok(Value::from(Self::lookup_array(env, name)?.len() as i64)),
        }
    }
}

fn expect_number(v: Value) -> Result<Number, Fault> {
    match v {
        Value::Number(n) => Ok(n),
        other => Err(Fault::TypeConfusion {
            expected: "number",
            found: other.kind(),
        }),
    }
}

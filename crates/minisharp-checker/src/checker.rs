//! The type-checking pass.

use minisharp_syntax::ast::*;
use tracing::{debug, trace, warn};

use crate::error::TypeError;
use crate::tenv::TypeEnv;

/// Operand rule for a comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CompareRule {
    /// `<` and `>`: any mix of `int` and `double`
    AnyNumeric,
    /// `==`: both sides the same numeric type
    SameNumeric,
}

/// Walks a program once, recording every violation it finds.
///
/// `type_of` answers `None` when an expression has no meaningful type
/// because a sub-expression was already rejected. Callers skip their own
/// checks in that case so one mistake yields one diagnostic.
pub struct TypeChecker<'a> {
    tenv: &'a mut TypeEnv,
    errors: Vec<TypeError>,
}

impl<'a> TypeChecker<'a> {
    pub fn new(tenv: &'a mut TypeEnv) -> Self {
        Self {
            tenv,
            errors: Vec::new(),
        }
    }

    /// Checks parameters, then the body, and returns what was found.
    pub fn check_program(mut self, program: &Program) -> Vec<TypeError> {
        debug!(
            params = program.params().len(),
            statements = program.body().len(),
            "type checking program"
        );
        for param in program.params() {
            if self.tenv.declare(param.name.clone(), param.ty).is_some() {
                self.report(TypeError::AlreadyDeclared {
                    name: param.name.clone(),
                });
            }
        }
        self.check_block(program.body());
        debug!(errors = self.errors.len(), "type check finished");
        self.errors
    }

    fn report(&mut self, err: TypeError) {
        warn!(%err, "type error");
        self.errors.push(err);
    }

    fn check_block(&mut self, stmts: &[Stmt]) {
        for stmt in stmts {
            self.check_stmt(stmt);
        }
    }

    fn check_stmt(&mut self, stmt: &Stmt) {
        trace!(%stmt, "check");
        match stmt {
            Stmt::Decl(decl) => self.check_decl(decl),
            Stmt::Assign(assign) => self.check_assign(assign),
            Stmt::If {
                cond,
                then_body,
                else_body,
            } => {
                self.expect_condition(cond, "if");
                self.check_block(then_body);
                if let Some(else_body) = else_body {
                    self.check_block(else_body);
                }
            }
            Stmt::For {
                init,
                cond,
                step,
                body,
            } => {
                self.check_loop_init(init);
                self.expect_condition(cond, "for");
                self.check_step(step);
                self.check_block(body);
            }
            Stmt::Return(expr) => {
                self.type_of(expr);
            }
        }
    }

    fn check_decl(&mut self, decl: &Decl) {
        match decl {
            Decl::Scalar { ty, name, init } => {
                if self.tenv.contains(name) {
                    self.report(TypeError::AlreadyDeclared { name: name.clone() });
                    return;
                }
                // `name` is visible to its own initializer.
                self.tenv.declare(name.clone(), *ty);
                if let Some(found) = self.type_of(init) {
                    if !found.can_assign_to(ty) {
                        self.report(TypeError::DeclarationMismatch {
                            name: name.clone(),
                            declared: *ty,
                            found,
                        });
                    }
                }
            }
            Decl::Array { elem, name, .. } => {
                if *elem != Type::Int {
                    self.report(TypeError::ArrayElementType {
                        name: name.clone(),
                        elem: *elem,
                    });
                } else if self.tenv.contains(name) {
                    self.report(TypeError::AlreadyDeclared { name: name.clone() });
                } else {
                    self.tenv.declare(name.clone(), Type::IntSequence);
                }
            }
        }
    }

    /// The loop variable must be a fresh `int` initialized with an `int`.
    fn check_loop_init(&mut self, init: &Decl) {
        let (ty, name, expr) = match init {
            Decl::Array { name, .. } => {
                self.report(TypeError::LoopVariableArray { name: name.clone() });
                return;
            }
            Decl::Scalar { ty, name, init } => (*ty, name, init),
        };
        if ty != Type::Int {
            self.report(TypeError::LoopVariableType {
                name: name.clone(),
                found: ty,
            });
        }
        if self.tenv.contains(name) {
            self.report(TypeError::AlreadyDeclared { name: name.clone() });
            return;
        }
        self.tenv.declare(name.clone(), ty);
        if let Some(found) = self.type_of(expr) {
            if found != Type::Int {
                self.report(TypeError::LoopInitNotInt {
                    name: name.clone(),
                    found,
                });
            }
        }
    }

    fn check_step(&mut self, step: &Step) {
        match self.lookup(&step.name) {
            Some(Type::Int) | None => {}
            Some(found) => self.report(TypeError::StepNotInt {
                name: step.name.clone(),
                found,
            }),
        }
    }

    fn check_assign(&mut self, assign: &Assign) {
        match assign {
            Assign::Scalar { name, expr } => {
                let found = self.type_of(expr);
                let expected = self.lookup(name);
                if let (Some(found), Some(expected)) = (found, expected) {
                    if !found.can_assign_to(&expected) {
                        self.report(TypeError::AssignmentMismatch {
                            name: name.clone(),
                            expected,
                            found,
                        });
                    }
                }
            }
            Assign::Array { name, .. } => self.expect_array(name),
        }
    }

    fn expect_condition(&mut self, cond: &Expr, construct: &'static str) {
        match self.type_of(cond) {
            Some(Type::Bool) | None => {}
            Some(found) => self.report(TypeError::ConditionNotBool { construct, found }),
        }
    }

    /// Looks `name` up, reporting it if undeclared.
    fn lookup(&mut self, name: &str) -> Option<Type> {
        let ty = self.tenv.get(name);
        if ty.is_none() {
            self.report(TypeError::NotDeclared {
                name: name.to_string(),
            });
        }
        ty
    }

    fn expect_array(&mut self, name: &str) {
        match self.lookup(name) {
            Some(Type::IntSequence) | None => {}
            Some(found) => self.report(TypeError::NotAnArray {
                name: name.to_string(),
                found,
            }),
        }
    }

    /// The static type of `expr`, reporting violations along the way.
    pub fn type_of(&mut self, expr: &Expr) -> Option<Type> {
        match expr {
            Expr::Var(name) => self.lookup(name),
            Expr::Const(_) => Some(Type::Int),
            Expr::Paren(inner) => self.type_of(inner),
            Expr::Add(l, r) => self.arithmetic("+", l, r),
            Expr::Sub(l, r) => self.arithmetic("-", l, r),
            Expr::Mul(l, r) => self.arithmetic("*", l, r),
            Expr::Div(l, r) => self.arithmetic("/", l, r),
            Expr::Lt(l, r) => self.comparison("<", CompareRule::AnyNumeric, l, r),
            Expr::Gt(l, r) => self.comparison(">", CompareRule::AnyNumeric, l, r),
            Expr::Eq(l, r) => self.comparison("==", CompareRule::SameNumeric, l, r),
            Expr::Index(name, index) => {
                self.expect_array(name);
                match self.type_of(index) {
                    Some(Type::Int) | None => {}
                    Some(found) => self.report(TypeError::IndexNotInt {
                        name: name.clone(),
                        found,
                    }),
                }
                Some(Type::Int)
            }
            Expr::Length(name) => {
                self.expect_array(name);
                Some(Type::Int)
            }
        }
    }

    /// `int op int` is `int`; any other numeric mix is `double`.
    fn arithmetic(&mut self, op: &'static str, l: &Expr, r: &Expr) -> Option<Type> {
        let left = self.type_of(l);
        let right = self.type_of(r);
        let (left, right) = (left?, right?);
        match (left, right) {
            (Type::Int, Type::Int) => Some(Type::Int),
            _ if left.is_numeric() && right.is_numeric() => Some(Type::Double),
            _ => {
                self.report(TypeError::Arithmetic { op, left, right });
                None
            }
        }
    }

    /// Always `boolean`, even when the operands are rejected.
    fn comparison(
        &mut self,
        op: &'static str,
        rule: CompareRule,
        l: &Expr,
        r: &Expr,
    ) -> Option<Type> {
        let left = self.type_of(l);
        let right = self.type_of(r);
        if let (Some(left), Some(right)) = (left, right) {
            let ok = left.is_numeric()
                && right.is_numeric()
                && (rule == CompareRule::AnyNumeric || left == right);
            if !ok {
                self.report(TypeError::Comparison { op, left, right });
            }
        }
        Some(Type::Bool)
    }
}

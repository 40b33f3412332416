//! LISP-style rendering of the tree, used by `minisharp --tree`.
//!
//! ```rust
//! use minisharp_syntax::ast::*;
//!
//! let program = Program::new(
//!     vec![Param { name: "n".into(), ty: Type::Int }],
//!     vec![Stmt::Return(Expr::Add(
//!         Box::new(Expr::Var("n".into())),
//!         Box::new(Expr::Const(1)),
//!     ))],
//! );
//! assert_eq!(program.to_string(), "program ( ( int n ) ) ( ( return ( n + 1 ) ) )");
//! ```

use std::fmt;

use crate::ast::*;

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn binary(f: &mut fmt::Formatter<'_>, l: &Expr, op: &str, r: &Expr) -> fmt::Result {
    write!(f, "( {} {} {} )", l, op, r)
}

fn literals(f: &mut fmt::Formatter<'_>, values: &[i64]) -> fmt::Result {
    write!(f, "{{")?;
    for v in values {
        write!(f, " {}", v)?;
    }
    write!(f, " }}")
}

fn block(f: &mut fmt::Formatter<'_>, stmts: &[Stmt]) -> fmt::Result {
    write!(f, "(")?;
    for s in stmts {
        write!(f, " {}", s)?;
    }
    write!(f, " )")
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Index(name, idx) => write!(f, "{}[ {} ]", name, idx),
            Expr::Const(n) => write!(f, "{}", n),
            Expr::Paren(inner) => write!(f, "( {} )", inner),
            Expr::Add(l, r) => binary(f, l, "+", r),
            Expr::Sub(l, r) => binary(f, l, "-", r),
            Expr::Mul(l, r) => binary(f, l, "*", r),
            Expr::Div(l, r) => binary(f, l, "/", r),
            Expr::Lt(l, r) => binary(f, l, "<", r),
            Expr::Gt(l, r) => binary(f, l, ">", r),
            Expr::Eq(l, r) => binary(f, l, "==", r),
            Expr::Length(name) => write!(f, "{}.length", name),
        }
    }
}

impl fmt::Display for Decl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decl::Scalar { ty, name, init } => write!(f, "( {} {} {} )", ty, name, init),
            Decl::Array { elem, name, values } => {
                write!(f, "( {}[] {} ", elem, name)?;
                literals(f, values)?;
                write!(f, " )")
            }
        }
    }
}

impl fmt::Display for Assign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Assign::Scalar { name, expr } => write!(f, "( = {} {} )", name, expr),
            Assign::Array { name, values } => {
                write!(f, "( = {} ", name)?;
                literals(f, values)?;
                write!(f, " )")
            }
        }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Decl(d) => write!(f, "{}", d),
            Stmt::Assign(a) => write!(f, "{}", a),
            Stmt::If { cond, then_body, else_body } => {
                write!(f, "( if {} ", cond)?;
                block(f, then_body)?;
                if let Some(else_body) = else_body {
                    write!(f, " else ")?;
                    block(f, else_body)?;
                }
                write!(f, " )")
            }
            Stmt::For { init, cond, step, body } => {
                write!(f, "( for {} {} ( {}{} ) ", init, cond, step.name, step.op.symbol())?;
                block(f, body)?;
                write!(f, " )")
            }
            Stmt::Return(e) => write!(f, "( return {} )", e),
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "program")?;
        if let Some(params) = &self.params {
            write!(f, " (")?;
            for p in params {
                write!(f, " ( {} {} )", p.ty, p.name)?;
            }
            write!(f, " )")?;
        }
        write!(f, " ")?;
        block(f, self.body())
    }
}

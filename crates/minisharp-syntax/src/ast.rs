//! AST (abstract syntax tree) types for the Minisharp language.

/// Static types. Arrays only ever hold integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Int,
    Double,
    Bool,
    IntSequence,
}

impl Type {
    /// Whether a value of type `self` may be stored where `target` is expected.
    ///
    /// `int` widens to `double`; every other type only matches itself.
    pub fn can_assign_to(&self, target: &Type) -> bool {
        match self {
            Type::Int => matches!(target, Type::Int | Type::Double),
            Type::Double => *target == Type::Double,
            Type::Bool => *target == Type::Bool,
            Type::IntSequence => *target == Type::IntSequence,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Type::Int | Type::Double)
    }

    /// Source spelling of the type.
    pub fn name(&self) -> &'static str {
        match self {
            Type::Int => "int",
            Type::Double => "double",
            Type::Bool => "boolean",
            Type::IntSequence => "int[]",
        }
    }
}

/// Expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Var(String),
    /// `name[index]`
    Index(String, Box<Expr>),
    Const(i64),
    Paren(Box<Expr>),
    // arithmetic
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    // comparisons
    Lt(Box<Expr>, Box<Expr>),
    Gt(Box<Expr>, Box<Expr>),
    Eq(Box<Expr>, Box<Expr>),
    /// `name.length`
    Length(String),
}

/// Declarations. Also used as the initializer of a `for` loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    Scalar {
        ty: Type,
        name: String,
        init: Expr,
    },
    /// `T[] name = { .. }`; `elem` is the written element type.
    Array {
        elem: Type,
        name: String,
        values: Vec<i64>,
    },
}

impl Decl {
    pub fn name(&self) -> &str {
        match self {
            Decl::Scalar { name, .. } | Decl::Array { name, .. } => name,
        }
    }
}

/// Assignments to an already declared name.
#[derive(Debug, Clone, PartialEq)]
pub enum Assign {
    Scalar { name: String, expr: Expr },
    Array { name: String, values: Vec<i64> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOp {
    Increment,
    Decrement,
}

impl StepOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            StepOp::Increment => "++",
            StepOp::Decrement => "--",
        }
    }
}

/// The `i++` / `i--` part of a `for` header.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub name: String,
    pub op: StepOp,
}

/// An ordered sequence of statements. Blocks do not open a scope.
pub type Block = Vec<Stmt>;

/// Statements.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Decl(Decl),
    Assign(Assign),
    If {
        cond: Expr,
        then_body: Block,
        else_body: Option<Block>,
    },
    For {
        init: Decl,
        cond: Expr,
        step: Step,
        body: Block,
    },
    Return(Expr),
}

/// Procedure parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub ty: Type,
}

/// Entire program: the single top-level procedure.
///
/// Both parts are optional, giving four root shapes. An empty parameter
/// list or an empty body is stored as `None`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub params: Option<Vec<Param>>,
    pub body: Option<Block>,
}

impl Program {
    pub fn new(params: Vec<Param>, body: Block) -> Self {
        Self {
            params: if params.is_empty() { None } else { Some(params) },
            body: if body.is_empty() { None } else { Some(body) },
        }
    }

    pub fn params(&self) -> &[Param] {
        self.params.as_deref().unwrap_or(&[])
    }

    pub fn body(&self) -> &[Stmt] {
        self.body.as_deref().unwrap_or(&[])
    }
}

//! Token definitions for the Minisharp language.
//!
//! Tokens are the smallest meaningful units of Minisharp source code:
//!
//! - **Identifiers**: variable and parameter names (`n`, `total`, `length`)
//! - **Literals**: unsigned integer constants (`0`, `42`)
//! - **Keywords**: type names and statement keywords (`int`, `for`, `return`)
//! - **Operators**: arithmetic, comparison, assignment and step operators
//! - **Punctuation**: brackets, braces, separators
//! - **Special**: end-of-file marker
//!
//! # Examples
//!
//! ```rust
//! use minisharp_syntax::{Token, TokenKind};
//!
//! let keyword = Token { kind: TokenKind::Return, line: 1, col: 1 };
//! let number = Token { kind: TokenKind::Number(42), line: 1, col: 8 };
//! assert_ne!(keyword.kind, number.kind);
//! ```

/// Token types that can be produced by the Minisharp lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // === Literals ===

    /// An identifier (`x`, `my_array`). `length` is an identifier too; the
    /// parser gives it meaning after a `.`.
    Ident(String),

    /// An unsigned integer literal. Negative values are written `0 - n`.
    Number(i64),

    // === Keywords ===

    /// `int`
    Int,
    /// `double`
    Double,
    /// `boolean`
    Boolean,
    /// `if`
    If,
    /// `else`
    Else,
    /// `for`
    For,
    /// `return`
    Return,

    // === Punctuation ===

    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `.`
    Dot,

    // === Operators ===

    /// Assignment `=`
    Equal,
    /// Equality comparison `==`
    EqEq,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// Increment step `++`
    PlusPlus,
    /// Decrement step `--`
    MinusMinus,

    /// End-of-file marker
    Eof,
}

impl TokenKind {
    /// Short description used in parser error messages.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Ident(name) => format!("identifier '{}'", name),
            TokenKind::Number(n) => format!("number {}", n),
            TokenKind::Int => "'int'".into(),
            TokenKind::Double => "'double'".into(),
            TokenKind::Boolean => "'boolean'".into(),
            TokenKind::If => "'if'".into(),
            TokenKind::Else => "'else'".into(),
            TokenKind::For => "'for'".into(),
            TokenKind::Return => "'return'".into(),
            TokenKind::LParen => "'('".into(),
            TokenKind::RParen => "')'".into(),
            TokenKind::LBrace => "'{'".into(),
            TokenKind::RBrace => "'}'".into(),
            TokenKind::LBracket => "'['".into(),
            TokenKind::RBracket => "']'".into(),
            TokenKind::Comma => "','".into(),
            TokenKind::Semicolon => "';'".into(),
            TokenKind::Dot => "'.'".into(),
            TokenKind::Equal => "'='".into(),
            TokenKind::EqEq => "'=='".into(),
            TokenKind::Less => "'<'".into(),
            TokenKind::Greater => "'>'".into(),
            TokenKind::Plus => "'+'".into(),
            TokenKind::Minus => "'-'".into(),
            TokenKind::Star => "'*'".into(),
            TokenKind::Slash => "'/'".into(),
            TokenKind::PlusPlus => "'++'".into(),
            TokenKind::MinusMinus => "'--'".into(),
            TokenKind::Eof => "end of input".into(),
        }
    }
}

/// A token with its 1-based source position.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The type and semantic content of this token
    pub kind: TokenKind,

    /// Line number in the source file (1-based)
    pub line: usize,

    /// Column number in the source file (1-based)
    pub col: usize,
}

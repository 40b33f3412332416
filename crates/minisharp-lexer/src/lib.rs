//! Minisharp lexer: converts source text into tokens.
use minisharp_syntax::error::{error_at, Error, Result};
use minisharp_syntax::token::{Token, TokenKind};
use tracing::trace;

/// Streaming character scanner that produces tokens with positions.
pub struct Lexer {
    src: Vec<char>,
    pos: usize,
    line: usize,
    col: usize,
}

impl Lexer {
    /// Create a new lexer over the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            src: input.chars().collect(),
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    fn peek(&self) -> Option<char> {
        self.src.get(self.pos).copied()
    }
    fn peek_next(&self) -> Option<char> {
        self.src.get(self.pos + 1).copied()
    }
    fn advance(&mut self) -> Option<char> {
        let ch = self.src.get(self.pos).copied();
        if let Some(c) = ch {
            self.pos += 1;
            if c == '\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
        }
        ch
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.advance();
            } else if c == '/' && self.peek_next() == Some('/') {
                while let Some(c2) = self.peek() {
                    self.advance();
                    if c2 == '\n' {
                        break;
                    }
                }
            } else {
                break;
            }
        }
    }

    fn read_number(&mut self) -> Result<TokenKind> {
        let start_line = self.line;
        let start_col = self.col;
        let mut s = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                s.push(c);
                self.advance();
            } else {
                break;
            }
        }
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            return error_at(
                start_line,
                start_col,
                "Decimal literals are not supported (only integer constants)",
            );
        }
        let val: i64 = s
            .parse()
            .map_err(|_| Error::with_span("Invalid number", start_line, start_col))?;
        Ok(TokenKind::Number(val))
    }

    fn read_ident_or_keyword(&mut self) -> TokenKind {
        let mut s = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                s.push(c);
                self.advance();
            } else {
                break;
            }
        }
        match s.as_str() {
            "int" => TokenKind::Int,
            "double" => TokenKind::Double,
            "boolean" => TokenKind::Boolean,
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "for" => TokenKind::For,
            "return" => TokenKind::Return,
            _ => TokenKind::Ident(s),
        }
    }

    /// Consume one character and, if the next one is `second`, that too.
    fn one_or_two(&mut self, second: char, single: TokenKind, double: TokenKind) -> TokenKind {
        self.advance();
        if self.peek() == Some(second) {
            self.advance();
            double
        } else {
            single
        }
    }

    /// Tokenize the entire input into a vector of tokens ending with Eof.
    pub fn tokenize(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace();
            let line = self.line;
            let col = self.col;
            let kind = match self.peek() {
                None => {
                    tokens.push(Token {
                        kind: TokenKind::Eof,
                        line,
                        col,
                    });
                    break;
                }
                Some(c) => match c {
                    '(' | ')' | '{' | '}' | '[' | ']' | ',' | ';' | '.' | '<' | '>' | '*'
                    | '/' => {
                        self.advance();
                        match c {
                            '(' => TokenKind::LParen,
                            ')' => TokenKind::RParen,
                            '{' => TokenKind::LBrace,
                            '}' => TokenKind::RBrace,
                            '[' => TokenKind::LBracket,
                            ']' => TokenKind::RBracket,
                            ',' => TokenKind::Comma,
                            ';' => TokenKind::Semicolon,
                            '.' => TokenKind::Dot,
                            '<' => TokenKind::Less,
                            '>' => TokenKind::Greater,
                            '*' => TokenKind::Star,
                            _ => TokenKind::Slash,
                        }
                    }
                    '=' => self.one_or_two('=', TokenKind::Equal, TokenKind::EqEq),
                    '+' => self.one_or_two('+', TokenKind::Plus, TokenKind::PlusPlus),
                    '-' => self.one_or_two('-', TokenKind::Minus, TokenKind::MinusMinus),
                    c if c.is_ascii_digit() => self.read_number()?,
                    c if c.is_ascii_alphabetic() || c == '_' => self.read_ident_or_keyword(),
                    other => {
                        return error_at(line, col, format!("Unexpected character '{}'", other));
                    }
                },
            };
            tokens.push(Token { kind, line, col });
        }
        trace!(count = tokens.len(), "tokenized source");
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        Lexer::new(input)
            .tokenize()
            .expect("Lexing should succeed")
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_keywords_and_identifiers() {
        assert_eq!(
            kinds("int double boolean if else for return length n_2"),
            vec![
                TokenKind::Int,
                TokenKind::Double,
                TokenKind::Boolean,
                TokenKind::If,
                TokenKind::Else,
                TokenKind::For,
                TokenKind::Return,
                TokenKind::Ident("length".into()),
                TokenKind::Ident("n_2".into()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            kinds("= == < > + ++ - -- * /"),
            vec![
                TokenKind::Equal,
                TokenKind::EqEq,
                TokenKind::Less,
                TokenKind::Greater,
                TokenKind::Plus,
                TokenKind::PlusPlus,
                TokenKind::Minus,
                TokenKind::MinusMinus,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_for_header() {
        assert_eq!(
            kinds("for (int i = 0; i < a.length; i++)"),
            vec![
                TokenKind::For,
                TokenKind::LParen,
                TokenKind::Int,
                TokenKind::Ident("i".into()),
                TokenKind::Equal,
                TokenKind::Number(0),
                TokenKind::Semicolon,
                TokenKind::Ident("i".into()),
                TokenKind::Less,
                TokenKind::Ident("a".into()),
                TokenKind::Dot,
                TokenKind::Ident("length".into()),
                TokenKind::Semicolon,
                TokenKind::Ident("i".into()),
                TokenKind::PlusPlus,
                TokenKind::RParen,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_comments_and_positions() {
        let tokens = Lexer::new("// header\n  return 7;").tokenize().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Return);
        assert_eq!((tokens[0].line, tokens[0].col), (2, 3));
        assert_eq!(tokens[1].kind, TokenKind::Number(7));
        assert_eq!((tokens[1].line, tokens[1].col), (2, 10));
    }

    #[test]
    fn test_errors() {
        let err = Lexer::new("return 1 @ 2;").tokenize().unwrap_err();
        assert_eq!((err.line, err.col), (Some(1), Some(10)));
        assert!(err.msg.contains("Unexpected character '@'"));

        let err = Lexer::new("return 1.5;").tokenize().unwrap_err();
        assert!(err.msg.contains("Decimal literals"));

        let err = Lexer::new("99999999999999999999").tokenize().unwrap_err();
        assert!(err.msg.contains("Invalid number"));
    }
}

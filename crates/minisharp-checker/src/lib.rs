//! Static type checking for Minisharp programs.
//!
//! The checker never stops at the first problem. It returns every
//! [`TypeError`] it finds and leaves the decision to run the program to
//! the caller.

pub mod checker;
pub mod error;
pub mod tenv;

pub use checker::TypeChecker;
pub use error::TypeError;
pub use tenv::TypeEnv;

use minisharp_syntax::ast::Program;

/// Checks `program` against `tenv`, registering its parameters and
/// declarations there.
pub fn typecheck(program: &Program, tenv: &mut TypeEnv) -> Vec<TypeError> {
    TypeChecker::new(tenv).check_program(program)
}

/// Checks `program` in a fresh environment.
pub fn check(program: &Program) -> Vec<TypeError> {
    typecheck(program, &mut TypeEnv::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use minisharp_lexer::Lexer;
    use minisharp_parser::Parser;
    use minisharp_syntax::ast::Type;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn parse(src: &str) -> Program {
        let tokens = Lexer::new(src).tokenize().expect("Lexing should succeed");
        Parser::new(tokens)
            .parse_program()
            .expect("Parsing should succeed")
    }

    fn errors(src: &str) -> Vec<TypeError> {
        check(&parse(src))
    }

    fn type_of_return(params: &str, expr: &str) -> Option<Type> {
        let program = parse(&format!("({}) {{ }}", params));
        let mut tenv = TypeEnv::new();
        assert!(typecheck(&program, &mut tenv).is_empty());
        let tokens = Lexer::new(expr).tokenize().expect("Lexing should succeed");
        let expr = Parser::new(tokens).parse_expr().expect("Parsing should succeed");
        TypeChecker::new(&mut tenv).type_of(&expr)
    }

    #[rstest]
    #[case("int", "1", true)]
    #[case("double", "1", true)]
    #[case("int", "d", false)]
    #[case("double", "d", true)]
    #[case("boolean", "1 < 2", true)]
    #[case("int", "1 < 2", false)]
    #[case("double", "1 == 2", false)]
    #[case("int[]", "a", true)]
    #[case("int", "a", false)]
    #[case("int[]", "1", false)]
    fn test_declaration_assignability(#[case] ty: &str, #[case] init: &str, #[case] ok: bool) {
        let src = format!("(double d, int[] a) {{ {} x = {}; }}", ty, init);
        let errs = errors(&src);
        assert_eq!(errs.is_empty(), ok, "{} x = {}: {:?}", ty, init, errs);
        if !ok {
            assert!(matches!(errs[0], TypeError::DeclarationMismatch { .. }));
        }
    }

    #[rstest]
    #[case("i + i", Type::Int)]
    #[case("i * d", Type::Double)]
    #[case("d - i", Type::Double)]
    #[case("d / d", Type::Double)]
    #[case("(i + 1) * 2", Type::Int)]
    #[case("a[0] + d", Type::Double)]
    #[case("a.length", Type::Int)]
    #[case("i < d", Type::Bool)]
    #[case("d == d", Type::Bool)]
    fn test_numeric_promotion(#[case] expr: &str, #[case] expected: Type) {
        assert_eq!(
            type_of_return("int i, double d, int[] a", expr),
            Some(expected)
        );
    }

    #[test]
    fn test_index_yields_element_type() {
        assert_eq!(type_of_return("int[] a, int i", "a[i]"), Some(Type::Int));
        assert!(errors("(int[] a) { int x = a[0]; }").is_empty());
    }

    #[test]
    fn test_mixed_equality_is_flagged() {
        let errs = errors("(double d) { boolean b = 1 == d; }");
        assert_eq!(
            errs,
            vec![TypeError::Comparison {
                op: "==",
                left: Type::Int,
                right: Type::Double
            }]
        );
        assert!(errors("(double d) { boolean b = 1 < d; }").is_empty());
        assert!(errors("(double d) { boolean b = d > 1; }").is_empty());
        assert!(errors("(double d) { boolean b = d == d; }").is_empty());
        assert_eq!(
            errors("(boolean f, boolean g) { boolean b = f == g; }"),
            vec![TypeError::Comparison {
                op: "==",
                left: Type::Bool,
                right: Type::Bool
            }]
        );
    }

    #[test]
    fn test_arithmetic_on_non_numbers() {
        let errs = errors("(boolean f) { int x = f + 1; }");
        assert_eq!(
            errs,
            vec![TypeError::Arithmetic {
                op: "+",
                left: Type::Bool,
                right: Type::Int
            }]
        );
    }

    #[test]
    fn test_declarations() {
        assert_eq!(
            errors("() { int x = 1; double x = 2; }"),
            vec![TypeError::AlreadyDeclared { name: "x".into() }]
        );
        assert_eq!(
            errors("() { double[] d = {1, 2}; }"),
            vec![TypeError::ArrayElementType {
                name: "d".into(),
                elem: Type::Double
            }]
        );
        assert_eq!(
            errors("(int a, double a) { }"),
            vec![TypeError::AlreadyDeclared { name: "a".into() }]
        );
    }

    #[test]
    fn test_declared_name_is_registered_before_its_initializer() {
        assert!(errors("() { int x = x; }").is_empty());
        assert!(errors("() { for (int i = i; i < 3; i++) { } }").is_empty());
        assert_eq!(
            errors("() { int x = 1; double x = y; }"),
            vec![TypeError::AlreadyDeclared { name: "x".into() }]
        );
        assert_eq!(
            errors("() { int i = 0; for (int i = y; i < 3; i++) { } }"),
            vec![TypeError::AlreadyDeclared { name: "i".into() }]
        );
    }

    #[test]
    fn test_duplicate_param_takes_later_type() {
        let mut tenv = TypeEnv::new();
        typecheck(&parse("(int a, double a) { }"), &mut tenv);
        assert_eq!(tenv.get("a"), Some(Type::Double));
    }

    #[test]
    fn test_assignments() {
        assert!(errors("() { double x = 1; x = 2; int[] a = {1}; a = {2, 3}; }").is_empty());
        assert_eq!(
            errors("() { y = 1; }"),
            vec![TypeError::NotDeclared { name: "y".into() }]
        );
        assert_eq!(
            errors("(double d) { int x = 1; x = d; }"),
            vec![TypeError::AssignmentMismatch {
                name: "x".into(),
                expected: Type::Int,
                found: Type::Double
            }]
        );
        assert_eq!(
            errors("() { int x = 1; x = {1, 2}; }"),
            vec![TypeError::NotAnArray {
                name: "x".into(),
                found: Type::Int
            }]
        );
    }

    #[test]
    fn test_conditions() {
        assert_eq!(
            errors("() { if (1) { } }"),
            vec![TypeError::ConditionNotBool {
                construct: "if",
                found: Type::Int
            }]
        );
        assert_eq!(
            errors("() { for (int i = 0; i; i++) { } }"),
            vec![TypeError::ConditionNotBool {
                construct: "for",
                found: Type::Int
            }]
        );
    }

    #[test]
    fn test_for_loop_variable() {
        assert!(
            errors("(int[] a) { int s = 0; for (int i = 0; i < a.length; i++) { s = s + a[i]; } }")
                .is_empty()
        );
        assert_eq!(
            errors("() { for (int[] i = {1}; 1 < 2; i++) { } }")[0],
            TypeError::LoopVariableArray { name: "i".into() }
        );
        assert_eq!(
            errors("() { for (double i = 0; i < 3; i++) { } }"),
            vec![
                TypeError::LoopVariableType {
                    name: "i".into(),
                    found: Type::Double
                },
                TypeError::StepNotInt {
                    name: "i".into(),
                    found: Type::Double
                },
            ]
        );
        assert_eq!(
            errors("(double d) { for (int i = d; i < 3; i++) { } }"),
            vec![TypeError::LoopInitNotInt {
                name: "i".into(),
                found: Type::Double
            }]
        );
        assert_eq!(
            errors("() { int i = 0; for (int i = 0; i < 3; i++) { } }"),
            vec![TypeError::AlreadyDeclared { name: "i".into() }]
        );
    }

    #[test]
    fn test_blocks_share_one_scope() {
        assert!(errors("() { if (1 < 2) { int x = 1; } else { } x = 2; }").is_empty());
        assert_eq!(
            errors("() { if (1 < 2) { int x = 1; } else { int x = 2; } }"),
            vec![TypeError::AlreadyDeclared { name: "x".into() }]
        );
    }

    #[test]
    fn test_array_expressions() {
        assert_eq!(
            errors("(int n) { return n.length; }"),
            vec![TypeError::NotAnArray {
                name: "n".into(),
                found: Type::Int
            }]
        );
        assert_eq!(
            errors("(int[] a, double d) { return a[d]; }"),
            vec![TypeError::IndexNotInt {
                name: "a".into(),
                found: Type::Double
            }]
        );
        assert_eq!(
            errors("() { return b[0]; }"),
            vec![TypeError::NotDeclared { name: "b".into() }]
        );
    }

    #[test]
    fn test_one_mistake_one_diagnostic() {
        assert_eq!(
            errors("() { int x = (y + 1) * 2; }"),
            vec![TypeError::NotDeclared { name: "y".into() }]
        );
        assert_eq!(errors("() { return y + z; }").len(), 2);
    }

    #[test]
    fn test_error_messages() {
        let err = TypeError::DeclarationMismatch {
            name: "x".into(),
            declared: Type::Int,
            found: Type::Double,
        };
        assert_eq!(
            err.to_string(),
            "type mismatch on declaration of 'x': cannot assign double to int"
        );
        let err = TypeError::Comparison {
            op: "==",
            left: Type::Int,
            right: Type::Double,
        };
        assert_eq!(
            err.to_string(),
            "incompatible types in comparison: int == double"
        );
    }
}

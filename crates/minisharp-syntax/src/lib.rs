pub mod ast;
pub mod error;
pub mod printer;
pub mod token;

pub use ast::*;
pub use error::*;
pub use token::*;

#[cfg(test)]
mod tests {
    use super::*;

    fn var(name: &str) -> Box<Expr> {
        Box::new(Expr::Var(name.to_string()))
    }

    #[test]
    fn test_assignability_relation() {
        let all = [Type::Int, Type::Double, Type::Bool, Type::IntSequence];
        for from in all {
            for to in all {
                let expected = from == to || (from == Type::Int && to == Type::Double);
                assert_eq!(from.can_assign_to(&to), expected, "{} -> {}", from, to);
            }
        }
    }

    #[test]
    fn test_program_shapes() {
        let param = Param { name: "n".into(), ty: Type::Int };
        let ret = Stmt::Return(Expr::Const(1));

        let both = Program::new(vec![param.clone()], vec![ret.clone()]);
        assert!(both.params.is_some() && both.body.is_some());

        let neither = Program::new(vec![], vec![]);
        assert_eq!(neither, Program::default());

        let block_only = Program::new(vec![], vec![ret]);
        assert!(block_only.params.is_none() && block_only.body.is_some());

        let params_only = Program::new(vec![param], vec![]);
        assert!(params_only.params.is_some() && params_only.body.is_none());
        assert!(params_only.body().is_empty());
    }

    #[test]
    fn test_tree_printing() {
        let program = Program::new(
            vec![],
            vec![
                Stmt::Decl(Decl::Array { elem: Type::Int, name: "a".into(), values: vec![1, 2] }),
                Stmt::For {
                    init: Decl::Scalar { ty: Type::Int, name: "i".into(), init: Expr::Const(0) },
                    cond: Expr::Lt(var("i"), Box::new(Expr::Length("a".into()))),
                    step: Step { name: "i".into(), op: StepOp::Increment },
                    body: vec![Stmt::Return(Expr::Index("a".into(), var("i")))],
                },
            ],
        );
        assert_eq!(
            program.to_string(),
            "program ( ( int[] a { 1 2 } ) ( for ( int i 0 ) ( i < a.length ) ( i++ ) ( ( return a[ i ] ) ) ) )"
        );
        assert_eq!(Program::default().to_string(), "program ( )");
    }
}

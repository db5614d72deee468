/// Expressions understood by the host evaluator.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Integer(i64),
    String(String),
    Array(Vec<Expr>),
    Identifier(String),
    Call {
        function: Box<Expr>,
        arguments: Vec<Expr>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let { name: String, value: Expr },
    Expression(Expr),
}

// Helper functions for constructing AST nodes, mostly used by tests.
pub fn ident(name: &str) -> Expr {
    Expr::Identifier(name.to_string())
}

pub fn call(function: &str, arguments: Vec<Expr>) -> Expr {
    Expr::Call {
        function: Box::new(ident(function)),
        arguments,
    }
}

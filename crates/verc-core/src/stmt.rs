use crate::decl::VariableDecl;
use crate::expr::Expression;
use serde::{Deserialize, Serialize};

/// A C target statement. Block, For, If and While are self-delimiting; everything
/// else takes a trailing `;` when printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Statement {
    Block(Vec<Statement>),
    VarDecl(VariableDecl),
    Assign {
        lhs: Expression,
        rhs: Expression,
    },
    If {
        condition: Expression,
        true_branch: Box<Statement>,
        false_branch: Option<Box<Statement>>,
    },
    While {
        condition: Expression,
        body: Box<Statement>,
    },
    DoWhile {
        body: Box<Statement>,
        condition: Expression,
    },
    For {
        initialiser: Box<Statement>,
        condition: Expression,
        increment: Box<Statement>,
        body: Box<Statement>,
    },
    Break,
    Continue,
    Return(Option<Expression>),
    Skip,
    /// An expression in statement position, e.g. a call.
    Expr(Expression),
}

impl Statement {
    pub fn block(stmts: Vec<Statement>) -> Self {
        Statement::Block(stmts)
    }

    pub fn assign(lhs: Expression, rhs: Expression) -> Self {
        Statement::Assign { lhs, rhs }
    }

    pub fn if_else(
        condition: Expression,
        true_branch: Statement,
        false_branch: Option<Statement>,
    ) -> Self {
        Statement::If {
            condition,
            true_branch: Box::new(true_branch),
            false_branch: false_branch.map(Box::new),
        }
    }

    pub fn while_loop(condition: Expression, body: Statement) -> Self {
        Statement::While {
            condition,
            body: Box::new(body),
        }
    }

    pub fn do_while(body: Statement, condition: Expression) -> Self {
        Statement::DoWhile {
            body: Box::new(body),
            condition,
        }
    }

    pub fn for_loop(
        initialiser: Statement,
        condition: Expression,
        increment: Statement,
        body: Statement,
    ) -> Self {
        Statement::For {
            initialiser: Box::new(initialiser),
            condition,
            increment: Box::new(increment),
            body: Box::new(body),
        }
    }
}

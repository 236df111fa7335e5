use crate::decl::Param;
use crate::expr::Expr;
use serde::{Deserialize, Serialize};

/// A statement within a callable body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Stmt {
    Assert {
        condition: Expr,
    },
    /// Simultaneous assignment of `rvals` to `lvals`.
    Assign {
        lvals: Vec<Expr>,
        rvals: Vec<Expr>,
    },
    Assume {
        condition: Expr,
    },
    Block {
        stmts: Vec<Stmt>,
    },
    Break,
    Continue,
    Debug {
        operand: Expr,
    },
    DoWhile {
        body: Box<Stmt>,
        condition: Expr,
    },
    Fail,
    /// Iteration of `variable` over the half-open range `[lower, upper)`.
    For {
        variable: String,
        lower: Expr,
        upper: Expr,
        body: Box<Stmt>,
    },
    IfElse {
        condition: Expr,
        true_branch: Box<Stmt>,
        false_branch: Option<Box<Stmt>>,
    },
    Initialiser {
        variables: Vec<Param>,
        initialiser: Option<Expr>,
    },
    NamedBlock {
        name: String,
        stmts: Vec<Stmt>,
    },
    Return {
        operand: Option<Expr>,
    },
    Skip,
    Switch {
        condition: Expr,
        cases: Vec<SwitchCase>,
    },
    While {
        condition: Expr,
        body: Box<Stmt>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwitchCase {
    /// Empty for the default case.
    pub values: Vec<Expr>,
    pub body: Stmt,
}

impl Stmt {
    pub fn block(stmts: Vec<Stmt>) -> Self {
        Stmt::Block { stmts }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Stmt::Assert { .. } => "assert statement",
            Stmt::Assign { .. } => "assignment statement",
            Stmt::Assume { .. } => "assume statement",
            Stmt::Block { .. } => "block statement",
            Stmt::Break => "break statement",
            Stmt::Continue => "continue statement",
            Stmt::Debug { .. } => "debug statement",
            Stmt::DoWhile { .. } => "do-while statement",
            Stmt::Fail => "fail statement",
            Stmt::For { .. } => "for statement",
            Stmt::IfElse { .. } => "if statement",
            Stmt::Initialiser { .. } => "variable initialiser",
            Stmt::NamedBlock { .. } => "named block",
            Stmt::Return { .. } => "return statement",
            Stmt::Skip => "skip statement",
            Stmt::Switch { .. } => "switch statement",
            Stmt::While { .. } => "while statement",
        }
    }
}

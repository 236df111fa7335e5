use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

/// A C target expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expression {
    BoolConst(bool),
    IntConst(BigInt),
    HexConst(u64),
    Var(String),
    Unary {
        op: UnaryOp,
        operand: Box<Expression>,
    },
    /// Pointer field access, `operand->field`.
    FieldDeref {
        operand: Box<Expression>,
        field: String,
    },
    Infix {
        op: InfixOp,
        lhs: Box<Expression>,
        rhs: Box<Expression>,
    },
    ArrayAccess {
        source: Box<Expression>,
        index: Box<Expression>,
    },
    FieldAccess {
        source: Box<Expression>,
        field: String,
    },
    Call {
        name: String,
        arguments: Vec<Expression>,
    },
    /// Designated initializer, `{.x = 1, .y = true}`.
    StructInit {
        fields: Vec<(String, Expression)>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
    Neg,
    Not,
    BitNot,
    Deref,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InfixOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Eq,
    NotEq,
    And,
    Or,
    BitAnd,
    BitOr,
    Shl,
    Shr,
}

impl UnaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Not => "!",
            UnaryOp::BitNot => "~",
            UnaryOp::Deref => "*",
        }
    }
}

impl InfixOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            InfixOp::Add => "+",
            InfixOp::Sub => "-",
            InfixOp::Mul => "*",
            InfixOp::Div => "/",
            InfixOp::Rem => "%",
            InfixOp::Lt => "<",
            InfixOp::LtEq => "<=",
            InfixOp::Gt => ">",
            InfixOp::GtEq => ">=",
            InfixOp::Eq => "==",
            InfixOp::NotEq => "!=",
            InfixOp::And => "&&",
            InfixOp::Or => "||",
            InfixOp::BitAnd => "&",
            InfixOp::BitOr => "|",
            InfixOp::Shl => "<<",
            InfixOp::Shr => ">>",
        }
    }
}

impl Expression {
    /// Whether this node must be parenthesised when nested inside another expression.
    /// This is the single precedence encoding; the printer never re-derives it.
    pub fn requires_parenthesis(&self) -> bool {
        matches!(self, Expression::Infix { .. })
    }

    pub fn bool_const(v: bool) -> Self {
        Expression::BoolConst(v)
    }

    pub fn int(v: impl Into<BigInt>) -> Self {
        Expression::IntConst(v.into())
    }

    pub fn hex(v: u64) -> Self {
        Expression::HexConst(v)
    }

    pub fn var(name: impl Into<String>) -> Self {
        Expression::Var(name.into())
    }

    pub fn unary(op: UnaryOp, operand: Expression) -> Self {
        Expression::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn infix(op: InfixOp, lhs: Expression, rhs: Expression) -> Self {
        Expression::Infix {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn field_deref(operand: Expression, field: impl Into<String>) -> Self {
        Expression::FieldDeref {
            operand: Box::new(operand),
            field: field.into(),
        }
    }

    pub fn array_access(source: Expression, index: Expression) -> Self {
        Expression::ArrayAccess {
            source: Box::new(source),
            index: Box::new(index),
        }
    }

    pub fn field_access(source: Expression, field: impl Into<String>) -> Self {
        Expression::FieldAccess {
            source: Box::new(source),
            field: field.into(),
        }
    }

    pub fn call(name: impl Into<String>, arguments: Vec<Expression>) -> Self {
        Expression::Call {
            name: name.into(),
            arguments,
        }
    }

    pub fn struct_init(fields: Vec<(String, Expression)>) -> Self {
        Expression::StructInit { fields }
    }
}

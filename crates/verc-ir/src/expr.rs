use crate::decl::{CalleeBinding, Param};
use crate::types::Type;
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

/// An expression with its resolved static type already established upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Expr {
    ArrayAccess {
        source: Box<Expr>,
        index: Box<Expr>,
    },
    ArrayLength {
        source: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Cast {
        ty: Type,
        operand: Box<Expr>,
    },
    Constant(Value),
    Dereference {
        operand: Box<Expr>,
    },
    FieldDereference {
        operand: Box<Expr>,
        field: String,
    },
    IndirectInvoke {
        source: Box<Expr>,
        arguments: Vec<Expr>,
    },
    Invoke {
        callee: CalleeBinding,
        arguments: Vec<Expr>,
    },
    Is {
        operand: Box<Expr>,
        ty: Type,
    },
    Lambda {
        params: Vec<Param>,
        body: Box<Expr>,
    },
    New {
        operand: Box<Expr>,
    },
    Quantifier {
        kind: QuantifierKind,
        ranges: Vec<(Param, Expr, Expr)>,
        body: Box<Expr>,
    },
    RecordAccess {
        source: Box<Expr>,
        field: String,
    },
    RecordInitialiser {
        fields: Vec<(String, Expr)>,
    },
    StaticVariableAccess {
        name: crate::unit::QualifiedName,
    },
    TupleInitialiser {
        operands: Vec<Expr>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    /// Left-folding operator over two or more operands.
    Variadic {
        op: VariadicOp,
        operands: Vec<Expr>,
    },
    VariableAccess {
        name: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    Bool(bool),
    Int(BigInt),
    Byte(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
    Negation,
    LogicalNot,
    BitwiseComplement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Remainder,
    Exponent,
    Equal,
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    ShiftLeft,
    ShiftRight,
    Implication,
    Iff,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VariadicOp {
    LogicalAnd,
    LogicalOr,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuantifierKind {
    Universal,
    Existential,
}

impl Expr {
    pub fn bool_const(v: bool) -> Self {
        Expr::Constant(Value::Bool(v))
    }

    pub fn int_const(v: impl Into<BigInt>) -> Self {
        Expr::Constant(Value::Int(v.into()))
    }

    pub fn byte_const(v: u8) -> Self {
        Expr::Constant(Value::Byte(v))
    }

    pub fn var(name: impl Into<String>) -> Self {
        Expr::VariableAccess { name: name.into() }
    }

    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn variadic(op: VariadicOp, operands: Vec<Expr>) -> Self {
        Expr::Variadic { op, operands }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::ArrayAccess { .. } => "array access",
            Expr::ArrayLength { .. } => "array length",
            Expr::Binary { op, .. } => op.kind_name(),
            Expr::Cast { .. } => "cast expression",
            Expr::Constant(_) => "constant",
            Expr::Dereference { .. } => "dereference",
            Expr::FieldDereference { .. } => "field dereference",
            Expr::IndirectInvoke { .. } => "indirect invocation",
            Expr::Invoke { .. } => "invocation",
            Expr::Is { .. } => "type test",
            Expr::Lambda { .. } => "lambda expression",
            Expr::New { .. } => "heap allocation",
            Expr::Quantifier { kind, .. } => match kind {
                QuantifierKind::Universal => "universal quantifier",
                QuantifierKind::Existential => "existential quantifier",
            },
            Expr::RecordAccess { .. } => "record access",
            Expr::RecordInitialiser { .. } => "record initialiser",
            Expr::StaticVariableAccess { .. } => "static variable access",
            Expr::TupleInitialiser { .. } => "tuple initialiser",
            Expr::Unary { op, .. } => op.kind_name(),
            Expr::Variadic { op, .. } => op.kind_name(),
            Expr::VariableAccess { .. } => "variable access",
        }
    }
}

impl UnaryOp {
    pub fn kind_name(&self) -> &'static str {
        match self {
            UnaryOp::Negation => "integer negation",
            UnaryOp::LogicalNot => "logical not",
            UnaryOp::BitwiseComplement => "bitwise complement",
        }
    }
}

impl BinaryOp {
    pub fn kind_name(&self) -> &'static str {
        match self {
            BinaryOp::Addition => "integer addition",
            BinaryOp::Subtraction => "integer subtraction",
            BinaryOp::Multiplication => "integer multiplication",
            BinaryOp::Division => "integer division",
            BinaryOp::Remainder => "integer remainder",
            BinaryOp::Exponent => "integer exponent",
            BinaryOp::Equal => "equality",
            BinaryOp::NotEqual => "inequality",
            BinaryOp::LessThan => "less-than comparison",
            BinaryOp::LessThanOrEqual => "less-than-or-equal comparison",
            BinaryOp::GreaterThan => "greater-than comparison",
            BinaryOp::GreaterThanOrEqual => "greater-than-or-equal comparison",
            BinaryOp::ShiftLeft => "shift left",
            BinaryOp::ShiftRight => "shift right",
            BinaryOp::Implication => "logical implication",
            BinaryOp::Iff => "logical iff",
        }
    }
}

impl VariadicOp {
    pub fn kind_name(&self) -> &'static str {
        match self {
            VariadicOp::LogicalAnd => "logical and",
            VariadicOp::LogicalOr => "logical or",
            VariadicOp::BitwiseAnd => "bitwise and",
            VariadicOp::BitwiseOr => "bitwise or",
            VariadicOp::BitwiseXor => "bitwise xor",
        }
    }
}

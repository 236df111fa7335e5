use crate::expr::Expr;
use crate::stmt::Stmt;
use crate::types::Type;
use crate::unit::QualifiedName;
use serde::{Deserialize, Serialize};

/// A top-level declaration within a source unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Decl {
    Function(FunctionDecl),
    StaticVariable(StaticVariableDecl),
    TypeAlias(TypeAliasDecl),
    Import(QualifiedName),
}

impl Decl {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Decl::Function(d) => d.kind.kind_name(),
            Decl::StaticVariable(_) => "static variable declaration",
            Decl::TypeAlias(_) => "type alias declaration",
            Decl::Import(_) => "import declaration",
        }
    }
}

/// A callable declaration. Functions are pure, methods may have side effects and
/// properties are named boolean predicates; all three lower the same way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionDecl {
    pub name: QualifiedName,
    pub kind: FunctionKind,
    pub params: Vec<Param>,
    pub ret: Type,
    pub body: Stmt,
    /// Callable from outside the generated unit; its emitted name is never mangled.
    pub exported: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FunctionKind {
    Function,
    Method,
    Property,
}

impl FunctionKind {
    pub fn kind_name(&self) -> &'static str {
        match self {
            FunctionKind::Function => "function declaration",
            FunctionKind::Method => "method declaration",
            FunctionKind::Property => "property declaration",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    pub ty: Type,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticVariableDecl {
    pub name: QualifiedName,
    pub ty: Type,
    pub initialiser: Expr,
    pub exported: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeAliasDecl {
    pub name: QualifiedName,
    pub ty: Type,
}

/// The resolved target of a direct invocation, as supplied by the name resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalleeBinding {
    pub name: QualifiedName,
    pub params: Vec<Type>,
    pub ret: Type,
    pub exported: bool,
}

use crate::expr::Expression;
use crate::stmt::Statement;
use crate::types::Type;
use serde::{Deserialize, Serialize};

/// A top-level declaration within a target document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Declaration {
    /// A standard-library include, e.g. `stdio.h`.
    Include(String),
    TypeDef {
        name: String,
        ty: Type,
    },
    Function {
        name: String,
        ret: Type,
        params: Vec<Parameter>,
        body: Statement,
    },
    Variable(VariableDecl),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub ty: Type,
    pub name: String,
}

impl Parameter {
    pub fn new(ty: Type, name: impl Into<String>) -> Self {
        Self {
            ty,
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableDecl {
    pub ty: Type,
    pub name: String,
    pub initialiser: Option<Expression>,
}

impl VariableDecl {
    pub fn new(ty: Type, name: impl Into<String>, initialiser: Option<Expression>) -> Self {
        Self {
            ty,
            name: name.into(),
            initialiser,
        }
    }
}

impl Declaration {
    pub fn function(
        name: impl Into<String>,
        ret: Type,
        params: Vec<Parameter>,
        body: Statement,
    ) -> Self {
        Declaration::Function {
            name: name.into(),
            ret,
            params,
            body,
        }
    }

    /// The emitted name, where one exists. Includes have none.
    pub fn name(&self) -> Option<&str> {
        match self {
            Declaration::Include(_) => None,
            Declaration::TypeDef { name, .. } => Some(name),
            Declaration::Function { name, .. } => Some(name),
            Declaration::Variable(v) => Some(&v.name),
        }
    }
}

use crate::{ModelError, Result};
use serde::{Deserialize, Serialize};

/// A C target type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    Void,
    Bool,
    /// `width` of `None` means the unbounded `int` / `unsigned int` spelling;
    /// a fixed width renders as `intNN_t` / `uintNN_t`.
    Int { signed: bool, width: Option<u16> },
    Pointer(Box<Type>),
    Nominal(String),
    /// Anonymous struct with fields in declaration order.
    Struct(Vec<Field>),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field {
    pub ty: Type,
    pub name: String,
}

impl Field {
    pub fn new(ty: Type, name: impl Into<String>) -> Self {
        Self {
            ty,
            name: name.into(),
        }
    }
}

impl Type {
    /// The unbounded signed integer type.
    pub fn int() -> Self {
        Type::Int {
            signed: true,
            width: None,
        }
    }

    /// The unbounded unsigned integer type.
    pub fn uint() -> Self {
        Type::Int {
            signed: false,
            width: None,
        }
    }

    /// A fixed-width integer type. The only representable widths are 8, 16, 32 and 64.
    pub fn fixed(signed: bool, width: u16) -> Result<Self> {
        match width {
            8 | 16 | 32 | 64 => Ok(Type::Int {
                signed,
                width: Some(width),
            }),
            _ => Err(ModelError::InvalidTypeWidth(width)),
        }
    }

    pub fn pointer(element: Type) -> Self {
        Type::Pointer(Box::new(element))
    }

    pub fn nominal(name: impl Into<String>) -> Self {
        Type::Nominal(name.into())
    }

    pub fn structure(fields: Vec<Field>) -> Self {
        Type::Struct(fields)
    }
}

//! Canonical name mangling.
//!
//! The source language allows overloading by type; C does not. Non-exported
//! declarations therefore carry a suffix encoding their parameter and return
//! types, while exported names are emitted verbatim and must stay stable.

use crate::{Result, TransformError};
use verc_ir::{QualifiedName, Type};

/// A qualified name with its path separators normalized to C identifier form.
pub fn normalize(name: &QualifiedName) -> String {
    name.segments().join("_")
}

/// The mangled form of a callable: normalized name, `_`, one code per parameter
/// type, then the return type's code. Deterministic by construction.
pub fn mangle(name: &QualifiedName, params: &[Type], ret: &Type) -> Result<String> {
    let mut out = normalize(name);
    out.push('_');
    for param in params {
        out.push_str(&type_code(param)?);
    }
    out.push_str(&type_code(ret)?);
    Ok(out)
}

/// One type, one code. Length prefixes keep embedded names unambiguous: no code
/// begins with a digit, so digits always extend a count or length.
fn type_code(ty: &Type) -> Result<String> {
    match ty {
        Type::Void => Ok("v".to_string()),
        Type::Bool => Ok("b".to_string()),
        Type::Byte => Ok("y".to_string()),
        Type::Int => Ok("i".to_string()),
        Type::Array(element) => Ok(format!("a{}", type_code(element)?)),
        Type::Reference(element) => Ok(format!("q{}", type_code(element)?)),
        Type::Nominal(name) => {
            let flat = normalize(name);
            Ok(format!("n{}{}", flat.len(), flat))
        }
        Type::Record(fields) => {
            let mut out = format!("r{}", fields.len());
            for field in fields {
                out.push_str(&field.name.len().to_string());
                out.push_str(&field.name);
                out.push_str(&type_code(&field.ty)?);
            }
            Ok(out)
        }
        Type::Union(_) | Type::Function { .. } => {
            Err(TransformError::UnsupportedConstruct(ty.kind_name().to_string()))
        }
    }
}

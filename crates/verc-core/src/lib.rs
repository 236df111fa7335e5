/*! C target AST for the Verc back end.
 *
 * A closed node algebra for the subset of C the lowering emits: documents, declarations,
 * statements, expressions and types, each with plain constructors and no behavior beyond the
 * per-expression parenthesisation flag the printer consults. Cross-node invariants (unique
 * declaration names, distinct struct fields) are the translator's job, not this crate's.
 */

pub mod decl;
pub mod document;
pub mod expr;
pub mod stmt;
pub mod types;

pub use decl::{Declaration, Parameter, VariableDecl};
pub use document::Document;
pub use expr::{Expression, InfixOp, UnaryOp};
pub use stmt::Statement;
pub use types::{Field, Type};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid integer width: {0} (expected 8, 16, 32 or 64)")]
    InvalidTypeWidth(u16),
}

pub type Result<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests;

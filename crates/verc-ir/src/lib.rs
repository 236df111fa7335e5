/*! Source IR for the Verc C back end.
 *
 * These are the trees the earlier pipeline stages hand over: every unit arriving here has already
 * been parsed, type checked, and verified. Each node exposes a kind tag, expressions carry their
 * resolved static type where the lowering needs one, and calls carry a resolved callee binding.
 * The back end trusts this invariant and never re-checks it.
 */

pub mod decl;
pub mod expr;
pub mod stmt;
pub mod types;
pub mod unit;

pub use decl::{CalleeBinding, Decl, FunctionDecl, FunctionKind, Param, StaticVariableDecl, TypeAliasDecl};
pub use expr::{BinaryOp, Expr, QuantifierKind, UnaryOp, Value, VariadicOp};
pub use stmt::{Stmt, SwitchCase};
pub use types::{Field, Type};
pub use unit::{QualifiedName, SourceUnit};

/*! Unified interface to the Verc back end.
 *
 * Single import for the whole pipeline: the source IR consumed from earlier compiler stages,
 * the C target AST, the translator that lowers one into the other, and the printer that turns
 * the result into compilable text.
 */

pub use verc_core as core;
pub use verc_emit as emit;
pub use verc_ir as ir;
pub use verc_transform as transform;

pub use verc_core::{Declaration, Document, Expression, Statement, Type};

pub use verc_emit::CFilePrinter;

pub use verc_ir::{QualifiedName, SourceUnit};

pub use verc_transform::{translate_units, TransformConfig, Translator};

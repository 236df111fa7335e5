/*! Turn a target document into C source text.
 *
 * The printer walks a completed document and emits syntactically valid C99: declarations in
 * document order, precedence-correct expressions, and block structure driven by an explicit
 * indentation level threaded through the traversal. It consults exactly one bit of expression
 * state, the parenthesisation flag fixed at construction, and never re-derives precedence.
 */

pub mod config;
pub mod printer;

pub use config::{IndentStyle, PrinterConfig};
pub use printer::CFilePrinter;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmitError {
    /// The document contained a node shape this renderer defines no rule for.
    /// That is a translator/model contract breach, never something to skip over.
    #[error("no rendering rule for {0}")]
    InvalidNode(String),

    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("emitted text was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type EmitResult = std::result::Result<(), EmitError>;

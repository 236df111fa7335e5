use thiserror::Error;
use verc_core::ModelError;

#[derive(Error, Debug)]
pub enum TransformError {
    /// A source node kind this back end defines no lowering for. Fatal; the
    /// offending construct is named rather than silently degraded.
    #[error("unsupported construct: {0}")]
    UnsupportedConstruct(String),

    /// Two declarations resolved to the same emitted name. Exported names form
    /// the external link contract, so this is surfaced, never auto-resolved.
    #[error("name collision: `{0}` is already declared")]
    NameCollision(String),

    #[error(transparent)]
    Model(#[from] ModelError),
}

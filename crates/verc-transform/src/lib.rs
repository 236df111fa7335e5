/*! Lower verified source units into the C target AST.
 *
 * Every unit arriving here is already type checked and verified; the translator maps each source
 * node kind onto exactly one target constructor, or refuses with an explicit error. It never
 * guesses and never degrades silently. Along the way it owns the two policies the target language
 * forces on us: flattening the source type system onto C's, and disambiguating overloaded names
 * through mangling while keeping exported names stable.
 */

mod errors;
mod mangle;
mod translator;

pub use errors::TransformError;
pub use translator::{TransformConfig, Translator};

use verc_core::Document;
use verc_ir::{QualifiedName, SourceUnit};

pub type Result<T> = std::result::Result<T, TransformError>;

/// Translates a batch of units into one fresh document: preamble first, then every
/// unit's declarations in order, then the synthesized entry point if one was asked for.
pub fn translate_units(
    units: &[SourceUnit],
    config: TransformConfig,
    entry: Option<&QualifiedName>,
) -> Result<Document> {
    let mut translator = Translator::new(config);
    let mut document = Document::new();
    translator.install_preamble(&mut document);
    for unit in units {
        translator.translate_unit(unit, &mut document)?;
    }
    if let Some(entry) = entry {
        translator.add_entry_point(&mut document, entry);
    }
    Ok(document)
}

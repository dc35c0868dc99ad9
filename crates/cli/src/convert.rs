use crate::error::CliError;
use model::globals::GlobalsDocument;
use std::path::Path;
use tracing::info;

/// Read a rule file and return its imports and globals as pretty JSON.
pub fn parse_file(path: impl AsRef<Path>) -> Result<String, CliError> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)?;
    let doc = drl_syntax::unmarshal(&source);
    info!(
        "Parsed {}: {} import(s), {} global(s)",
        path.display(),
        doc.imports.len(),
        doc.globals.len()
    );

    serde_json::to_string_pretty(&doc).map_err(CliError::JsonSerialize)
}

/// Read a JSON globals document and return it rendered as rule source.
pub fn render_file(path: impl AsRef<Path>) -> Result<String, CliError> {
    let source = std::fs::read_to_string(path)?;
    let doc: GlobalsDocument =
        serde_json::from_str(&source).map_err(CliError::JsonDeserialize)?;
    Ok(drl_syntax::marshal(&doc))
}

use crate::extract::extract_from_url;

/// Canonical entry name for a serialized petri-net model.
pub const MODEL_FILE: &str = "model.json";
/// Canonical entry name for a JavaScript declaration snippet.
pub const SNIPPET_FILE: &str = "declaration.js";

const DECLARATION_PREFIX: &str = "const declaration = ";

/// Canonical model JSON embedded in `url`, if any.
#[must_use]
pub fn resolve_model(url: &str) -> Option<Vec<u8>> {
    extract_from_url(url, MODEL_FILE)
}

/// Canonical declaration source embedded in `url`, if any.
///
/// The public editor emits either a `declaration.js` snippet or a
/// `model.json` document depending on save mode; this path must accept
/// both. When only the model form is present, the JSON text is wrapped as
/// a JS assignment so the result is a valid declaration body.
#[must_use]
pub fn resolve_snippet(url: &str) -> Option<Vec<u8>> {
    if let Some(source) = extract_from_url(url, SNIPPET_FILE) {
        return Some(source);
    }
    let json = extract_from_url(url, MODEL_FILE)?;
    let mut wrapped = Vec::with_capacity(DECLARATION_PREFIX.len() + json.len());
    wrapped.extend_from_slice(DECLARATION_PREFIX.as_bytes());
    wrapped.extend_from_slice(&json);
    Some(wrapped)
}

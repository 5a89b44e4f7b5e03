use petrilink_codec::{decode_base64, unpack_named_file};
use url::Url;

/// Pull the named virtual file out of a URL's `z` query parameter.
///
/// Missing parameter, bad base64, invalid zip, absent entry: all collapse
/// to `None` so callers can try an alternate filename or report "nothing
/// embedded". Read-only and idempotent; never panics for any input drawn
/// from the network.
#[must_use]
pub fn extract_from_url(raw_url: &str, filename: &str) -> Option<Vec<u8>> {
    let parsed = parse_lenient(raw_url)?;
    let value = parsed
        .query_pairs()
        .find(|(key, _)| key == "z")
        .map(|(_, value)| value.into_owned())?;
    if value.is_empty() {
        return None;
    }
    let decoded = decode_base64(&value)?;
    unpack_named_file(&decoded, filename)
}

/// The HTTP layer hands over path-and-query strings as well as absolute
/// URLs; resolve relative input against a placeholder base so both parse.
fn parse_lenient(raw_url: &str) -> Option<Url> {
    match Url::parse(raw_url) {
        Ok(url) => Some(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse("http://localhost/")
            .ok()?
            .join(raw_url)
            .ok(),
        Err(_) => None,
    }
}

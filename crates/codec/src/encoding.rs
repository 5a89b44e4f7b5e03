use base64::prelude::{Engine as _, BASE64_STANDARD};

/// Encode bytes for embedding in a `?z=` query parameter.
#[must_use]
pub fn encode_base64(bytes: &[u8]) -> String {
    BASE64_STANDARD.encode(bytes)
}

/// Decode a base64 query-parameter value.
///
/// Invalid input yields `None`; the value comes straight off the URL, so
/// failure here is a normal outcome, not an error.
#[must_use]
pub fn decode_base64(value: &str) -> Option<Vec<u8>> {
    match BASE64_STANDARD.decode(value) {
        Ok(bytes) => Some(bytes),
        Err(err) => {
            log::debug!("Discarding invalid base64 payload: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_round_trips() {
        let bytes = b"PK\x03\x04 pretend zip";
        assert_eq!(decode_base64(&encode_base64(bytes)).as_deref(), Some(bytes.as_slice()));
    }

    #[test]
    fn decode_rejects_invalid_input() {
        assert_eq!(decode_base64("not!!valid@@base64"), None);
    }

    #[test]
    fn decode_of_empty_is_empty() {
        assert_eq!(decode_base64(""), Some(Vec::new()));
    }
}

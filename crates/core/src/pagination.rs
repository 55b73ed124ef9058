//! Query-parameter parsing and cursor encoding for paginated scans.
//!
//! The continuation token travels to the client as URI-encoded JSON and comes
//! back the same way. Decoding is the exact inverse of encoding, so a cursor
//! always reaches the store byte-for-byte as the store produced it.

use thiserror::Error;

use crate::storage::ScanKey;

/// Page size used when the client does not send a `limit`.
pub const DEFAULT_PAGE_SIZE: i32 = 20;

/// Errors raised while interpreting pagination query parameters.
///
/// Callers fold both variants into one generic response; the variant only
/// matters for logging.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParameterError {
    #[error("limit must be a positive integer")]
    InvalidLimit,
    #[error("nextKey is not valid URI-encoded JSON")]
    InvalidNextKey,
}

/// Parses the `limit` query parameter.
///
/// Absent input yields [`DEFAULT_PAGE_SIZE`]. Anything that is not strictly a
/// positive integer fails.
pub fn parse_limit(raw: Option<&str>) -> Result<i32, ParameterError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_PAGE_SIZE);
    };

    let limit: i32 = raw.parse().map_err(|_| ParameterError::InvalidLimit)?;
    if limit <= 0 {
        return Err(ParameterError::InvalidLimit);
    }
    Ok(limit)
}

/// Encodes the store's last-evaluated key for transmission to the client.
///
/// `None` stays `None`: an absent key means the scan is complete and the
/// response advertises no next page.
pub fn encode_next_key(last_key: Option<&ScanKey>) -> Option<String> {
    last_key.map(|key| {
        // A map of strings always serializes.
        let json = serde_json::to_string(key).expect("scan key serializes to JSON");
        urlencoding::encode(&json).into_owned()
    })
}

/// Decodes a client-supplied `nextKey` back into the store's key form.
pub fn decode_next_key(raw: &str) -> Result<ScanKey, ParameterError> {
    let decoded = urlencoding::decode(raw).map_err(|_| ParameterError::InvalidNextKey)?;
    serde_json::from_str(&decoded).map_err(|_| ParameterError::InvalidNextKey)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_limit_accepts_positive_integers() {
        assert_eq!(parse_limit(Some("1")), Ok(1));
        assert_eq!(parse_limit(Some("20")), Ok(20));
        assert_eq!(parse_limit(Some("500")), Ok(500));
    }

    #[test]
    fn test_parse_limit_defaults_when_absent() {
        assert_eq!(parse_limit(None), Ok(DEFAULT_PAGE_SIZE));
    }

    #[test]
    fn test_parse_limit_rejects_zero_and_negatives() {
        assert_eq!(parse_limit(Some("0")), Err(ParameterError::InvalidLimit));
        assert_eq!(parse_limit(Some("-5")), Err(ParameterError::InvalidLimit));
    }

    #[test]
    fn test_parse_limit_rejects_non_numeric_input() {
        assert_eq!(parse_limit(Some("abc")), Err(ParameterError::InvalidLimit));
        assert_eq!(parse_limit(Some("10abc")), Err(ParameterError::InvalidLimit));
        assert_eq!(parse_limit(Some("")), Err(ParameterError::InvalidLimit));
        assert_eq!(parse_limit(Some("2.5")), Err(ParameterError::InvalidLimit));
    }

    #[test]
    fn test_encode_absent_key_is_none() {
        assert_eq!(encode_next_key(None), None);
    }

    #[test]
    fn test_encode_produces_uri_encoded_json() {
        let key = ScanKey::for_id("xyz");
        assert_eq!(
            encode_next_key(Some(&key)),
            Some("%7B%22id%22%3A%22xyz%22%7D".to_string())
        );
    }

    #[test]
    fn test_decode_inverts_encode() {
        let key = ScanKey::for_id("abc");
        let encoded = encode_next_key(Some(&key)).unwrap();
        assert_eq!(decode_next_key(&encoded), Ok(key));
    }

    #[test]
    fn test_decode_accepts_the_wire_format() {
        let key = decode_next_key("%7B%22id%22%3A%22abc%22%7D").unwrap();
        assert_eq!(key, ScanKey::for_id("abc"));
    }

    #[test]
    fn test_decode_accepts_already_decoded_json() {
        // The HTTP layer decodes the query string once before the handler
        // sees it; decoding must stay a no-op on percent-free JSON.
        let key = decode_next_key(r#"{"id":"abc"}"#).unwrap();
        assert_eq!(key, ScanKey::for_id("abc"));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert_eq!(
            decode_next_key("not-json"),
            Err(ParameterError::InvalidNextKey)
        );
        assert_eq!(
            decode_next_key("%7Bid%7D"),
            Err(ParameterError::InvalidNextKey)
        );
        // Percent sequence that is not valid UTF-8.
        assert_eq!(
            decode_next_key("%FF"),
            Err(ParameterError::InvalidNextKey)
        );
    }

    #[test]
    fn test_round_trip_preserves_multi_attribute_keys() {
        let mut map = std::collections::BTreeMap::new();
        map.insert("id".to_string(), "abc".to_string());
        map.insert("shard".to_string(), "7".to_string());
        let key = ScanKey(map);

        let encoded = encode_next_key(Some(&key)).unwrap();
        assert_eq!(decode_next_key(&encoded), Ok(key));
    }
}

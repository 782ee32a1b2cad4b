//! Resource key validation.
//!
//! Keys are used verbatim as cache keys; validation only decides whether a
//! key may be sent to the network. No normalization is performed, so two
//! spellings of the same resource are two cache entries.
//!
//! A key is any URI reference: absolute URLs as well as relative references
//! such as `img1` or `//cdn.example.com/a.png`. Relative references are
//! resolved against a placeholder base so the returned [`Url`] can be
//! inspected; the key handed to the source is still the original string.

use url::{ParseError, Url};

use crate::error::FetchError;

const REFERENCE_BASE: &str = "http://localhost/";

/// Parse `key` as a URI reference, failing with [`FetchError::InvalidKey`].
///
/// Rejected: the empty string, whitespace or control characters, malformed
/// percent-escapes, and absolute URLs the parser refuses (e.g. `http://`).
pub fn validate_key(key: &str) -> Result<Url, FetchError> {
    let invalid = |reason: String| FetchError::InvalidKey {
        key: key.to_string(),
        reason,
    };

    if key.is_empty() {
        return Err(invalid("empty key".to_string()));
    }
    if let Some(c) = key.chars().find(|c| c.is_whitespace() || c.is_control()) {
        return Err(invalid(format!("illegal character {c:?}")));
    }
    if !has_valid_escapes(key) {
        return Err(invalid("malformed percent-escape".to_string()));
    }

    match Url::parse(key) {
        Err(ParseError::RelativeUrlWithoutBase) => Url::parse(REFERENCE_BASE)
            .and_then(|base| Url::options().base_url(Some(&base)).parse(key))
            .map_err(|e| invalid(e.to_string())),
        result => result.map_err(|e| invalid(e.to_string())),
    }
}

/// Every `%` must be followed by two hex digits.
fn has_valid_escapes(key: &str) -> bool {
    key.split('%').skip(1).all(|rest| {
        rest.as_bytes()
            .get(..2)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit))
    })
}

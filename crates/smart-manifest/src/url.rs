//! # URL Shape Predicate
//!
//! The manifest schemas require several properties — launch endpoints, API
//! identifiers, icon and index locations — to be absolute http/https URLs.
//! The test applied everywhere is a literal prefix check for `"http://"` or
//! `"https://"`. No full URL parse is attempted: structure validation only
//! asks whether a value is plausibly a web URL, and deeper well-formedness
//! (hosts, ports, paths) is left to whatever later dereferences it.

use serde_json::Value;

/// Returns true iff `value` is a JSON string beginning with `http://` or
/// `https://`.
///
/// Every non-string shape — number, bool, null, array, object — returns
/// false. The predicate is total over arbitrary JSON; it is the building
/// block behind every "should be an http/https URL" message.
pub fn is_url(value: &Value) -> bool {
    value.as_str().is_some_and(is_url_str)
}

/// Prefix test for values already known to be strings, such as JSON object
/// keys.
pub(crate) fn is_url_str(candidate: &str) -> bool {
    candidate.starts_with("http://") || candidate.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_http_and_https_strings() {
        assert!(is_url(&json!("http://api.example.org")));
        assert!(is_url(&json!("https://api.example.org/records/123")));
    }

    #[test]
    fn rejects_strings_without_the_scheme_prefix() {
        assert!(!is_url(&json!("api.example.org")));
        assert!(!is_url(&json!("ftp://api.example.org")));
        assert!(!is_url(&json!("")));
        // The prefix is literal: uppercase schemes do not count.
        assert!(!is_url(&json!("HTTP://api.example.org")));
        assert!(!is_url(&json!(" http://api.example.org")));
    }

    #[test]
    fn rejects_every_non_string_shape() {
        assert!(!is_url(&json!(42)));
        assert!(!is_url(&json!(true)));
        assert!(!is_url(&json!(null)));
        assert!(!is_url(&json!(["http://api.example.org"])));
        assert!(!is_url(&json!({"url": "http://api.example.org"})));
    }

    #[test]
    fn a_bare_scheme_satisfies_the_prefix_test() {
        // Prefix check, not a parse: the degenerate "http://" passes.
        assert!(is_url(&json!("http://")));
        assert!(is_url(&json!("https://")));
    }
}

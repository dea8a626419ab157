//! # Capability Block Checks
//!
//! App manifests declare the APIs they consume under `requires`; container
//! manifests declare the APIs they serve under `capabilities`. Both blocks
//! share one shape: a dictionary keyed by API endpoint URL, each entry
//! carrying a required `methods` list and an optional `codes` list of
//! response-code URLs. One routine checks both.

use serde_json::{Map, Value};

use crate::url::{is_url, is_url_str};

/// HTTP methods a capability entry may declare.
const CAPABILITY_METHODS: &[&str] = &["GET", "PUT", "POST", "DELETE"];

/// Properties recognized inside a single capability entry.
const CAPABILITY_ENTRY_KEYS: &[&str] = &["methods", "codes"];

/// Check one capability/requirement dictionary, returning violations in
/// entry order.
///
/// The key and the value of an entry are tested independently: a non-URL
/// key and a non-dictionary value each contribute their own message. A
/// non-dictionary value skips the per-entry detail checks, since there is
/// nothing further to look inside.
pub(crate) fn validate_capability_block(block: &Map<String, Value>) -> Vec<String> {
    let mut messages = Vec::new();

    for (api, entry) in block {
        if !is_url_str(api) {
            messages.push(format!(
                "The '{api}' property should be a valid http/https url"
            ));
        }

        let Some(entry) = entry.as_object() else {
            messages.push(format!(
                "The '{api}' property definition should be a dictionary"
            ));
            continue;
        };

        match entry.get("methods").and_then(Value::as_array) {
            Some(methods) => {
                for method in methods {
                    let recognized = method
                        .as_str()
                        .is_some_and(|m| CAPABILITY_METHODS.contains(&m));
                    if !recognized {
                        messages.push(
                            "'methods' list items must be one of ('GET', 'PUT', 'POST', 'DELETE')"
                                .to_string(),
                        );
                    }
                }
            }
            None => messages.push(format!("'{api}' property should define a 'methods' list")),
        }

        if let Some(codes) = entry.get("codes") {
            match codes.as_array() {
                Some(codes) => {
                    for code in codes {
                        if !is_url(code) {
                            messages.push(format!(
                                "'{}' should be an http/https URL",
                                code_label(code)
                            ));
                        }
                    }
                }
                None => messages.push("'codes' property should be a list".to_string()),
            }
        }

        messages.extend(unknown_key_messages(entry, CAPABILITY_ENTRY_KEYS));
    }

    messages
}

/// Messages for every key of `object` outside the `recognized` set.
///
/// The manifest schemas and the capability entries are closed: an
/// unrecognized property is a violation. The message text is shared by
/// every closed set in the standard.
pub(crate) fn unknown_key_messages(
    object: &Map<String, Value>,
    recognized: &[&str],
) -> Vec<String> {
    object
        .keys()
        .filter(|key| !recognized.contains(&key.as_str()))
        .map(|key| format!("'{key}' property is not part of the SMART standard"))
        .collect()
}

/// Render a `codes` element for a violation message: the bare content for
/// strings, compact JSON for anything else.
fn code_label(code: &Value) -> String {
    match code.as_str() {
        Some(text) => text.to_string(),
        None => code.to_string(),
    }
}

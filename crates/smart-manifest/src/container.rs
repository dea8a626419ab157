//! # Container Manifest Validation
//!
//! A container manifest describes a SMART host platform to the apps it
//! hosts: an administrative contact, the API base URL, the OAuth launch
//! endpoints apps redirect through, and the API capabilities the platform
//! serves. Every top-level property is required, and unlike the app
//! manifest there is no branching: each check runs on every document.

use serde_json::{Map, Value};

use crate::capability::{unknown_key_messages, validate_capability_block};
use crate::url::is_url;

/// Top-level properties recognized by the container manifest schema.
const CONTAINER_MANIFEST_KEYS: &[&str] = &[
    "admin",
    "api_base",
    "description",
    "name",
    "smart_version",
    "launch_urls",
    "capabilities",
];

/// OAuth endpoints every container must publish under `launch_urls`.
const LAUNCH_URL_KEYS: &[&str] = &["authorize_token", "exchange_token", "request_token"];

/// Validate the structure of a container manifest document.
///
/// Returns every violation found, in check order; an empty list means the
/// document conforms to the container manifest schema. `smart_version` is
/// only required to be a string here — the dotted-version pattern applies
/// to app manifests alone.
pub fn validate_container_manifest(manifest: &Value) -> Vec<String> {
    let Some(manifest) = manifest.as_object() else {
        return vec!["The manifest definition should be a dictionary".to_string()];
    };

    let mut messages = Vec::new();

    require_string(manifest, "admin", &mut messages);

    if !manifest.get("api_base").is_some_and(is_url) {
        messages.push("The 'api_base' property should be an http/https URL".to_string());
    }

    require_string(manifest, "description", &mut messages);
    require_string(manifest, "name", &mut messages);
    require_string(manifest, "smart_version", &mut messages);

    match manifest.get("launch_urls").and_then(Value::as_object) {
        Some(launch_urls) => {
            for key in LAUNCH_URL_KEYS {
                if !launch_urls.get(*key).is_some_and(is_url) {
                    messages.push(format!("The '{key}' property should be an http/https URL"));
                }
            }
        }
        None => messages.push("The 'launch_urls' property should be a dictionary".to_string()),
    }

    match manifest.get("capabilities").and_then(Value::as_object) {
        Some(capabilities) => messages.extend(validate_capability_block(capabilities)),
        None => messages
            .push("The 'capabilities' property definition should be a dictionary".to_string()),
    }

    messages.extend(unknown_key_messages(manifest, CONTAINER_MANIFEST_KEYS));

    messages
}

/// Required string property: missing or non-string appends the standard
/// container-manifest message.
fn require_string(manifest: &Map<String, Value>, key: &str, messages: &mut Vec<String>) {
    if !manifest.get(key).is_some_and(Value::is_string) {
        messages.push(format!(
            "All container manifests must have an '{key}' string property"
        ));
    }
}

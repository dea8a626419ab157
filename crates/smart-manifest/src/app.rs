//! # App Manifest Validation
//!
//! An app manifest describes a SMART application to the container that will
//! launch it: identity (`name`, `description`, `id`), launch shape (`mode`,
//! `icon`, `index`), optional metadata (`author`, `version`, `scope`,
//! `smart_version`), and the APIs it consumes (`requires`).
//!
//! Checks run in a fixed order and never stop early, except for a
//! non-object top level where no property check is meaningful. The `mode`
//! property selects between launch-shape rules: browser-launched apps
//! (`ui`, `frame_ui`) must point at an icon and an index page, while
//! `background` apps must not carry any browser-facing properties.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use crate::capability::{unknown_key_messages, validate_capability_block};
use crate::url::is_url;

/// Top-level properties recognized by the app manifest schema.
const APP_MANIFEST_KEYS: &[&str] = &[
    "name",
    "description",
    "author",
    "id",
    "version",
    "mode",
    "scope",
    "icon",
    "index",
    "smart_version",
    "requires",
    "optimalBrowserEnvironments",
    "supportedBrowserEnvironments",
];

/// Properties that only make sense for apps a browser will render.
const BROWSER_FACING_KEYS: &[&str] = &[
    "icon",
    "index",
    "optimalBrowserEnvironments",
    "supportedBrowserEnvironments",
];

/// `major[.minor][.build]`: one to three dot-separated unsigned integers.
static SMART_VERSION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+(?:\.[0-9]+){0,2}$").expect("version pattern compiles"));

/// Validate the structure of an app manifest document.
///
/// Returns every violation found, in check order; an empty list means the
/// document conforms to the app manifest schema. The input is typically
/// what `serde_json::from_str` produced from a fetched manifest — this
/// function performs no I/O and accepts any JSON shape without panicking.
pub fn validate_app_manifest(manifest: &Value) -> Vec<String> {
    let Some(manifest) = manifest.as_object() else {
        return vec!["The manifest definition should be a dictionary".to_string()];
    };

    let mut messages = Vec::new();

    require_string(manifest, "name", &mut messages);
    require_string(manifest, "description", &mut messages);
    require_string(manifest, "id", &mut messages);

    match manifest.get("mode").and_then(Value::as_str) {
        Some("ui") | Some("frame_ui") => {
            if !manifest.get("icon").is_some_and(is_url) {
                messages.push(
                    "'icon' property for non-background apps should be an http/https URL"
                        .to_string(),
                );
            }
            if !manifest.get("index").is_some_and(is_url) {
                messages.push(
                    "'index' property for non-background apps should be an http/https URL"
                        .to_string(),
                );
            }
        }
        Some("background") => {
            if BROWSER_FACING_KEYS.iter().any(|key| manifest.contains_key(*key)) {
                messages.push(
                    "Background apps should not have 'icon', 'index', \
                     'supportedBrowserEnvironments', or 'optimalBrowserEnvironments' \
                     properties in their manifest"
                        .to_string(),
                );
            }
        }
        _ => messages
            .push("'mode' property must be one of ('ui','background','frame_ui')".to_string()),
    }

    if let Some(scope) = manifest.get("scope") {
        if !scope.is_string() {
            messages.push("'scope' parameter should be a string property".to_string());
        }
    }

    if let Some(version) = manifest.get("version") {
        if !version.is_string() {
            messages.push("'version' parameter should be a string property".to_string());
        }
    }

    if let Some(author) = manifest.get("author") {
        if !author.is_string() {
            messages.push("'author' should be a string property".to_string());
        }
    }

    if let Some(smart_version) = manifest.get("smart_version") {
        let well_formed = smart_version
            .as_str()
            .is_some_and(|v| SMART_VERSION_PATTERN.is_match(v));
        if !well_formed {
            messages
                .push("'smart_version' should be of type 'major[.minor][.build]'".to_string());
        }
    }

    if let Some(requires) = manifest.get("requires") {
        match requires.as_object() {
            Some(declared) => messages.extend(validate_capability_block(declared)),
            None => messages
                .push("The 'requires' property definition should be a dictionary".to_string()),
        }
    }

    messages.extend(unknown_key_messages(manifest, APP_MANIFEST_KEYS));

    messages
}

/// Required string property: missing or non-string appends the standard
/// app-manifest message.
fn require_string(manifest: &Map<String, Value>, key: &str, messages: &mut Vec<String>) {
    if !manifest.get(key).is_some_and(Value::is_string) {
        messages.push(format!(
            "All app manifests must have a '{key}' string property"
        ));
    }
}

//! # smart-manifest — Structure Checks for SMART Manifests
//!
//! The SMART health-app platform exchanges two manifest document kinds: app
//! manifests (what an application declares about itself to the container
//! that launches it) and container manifests (what a host platform declares
//! about itself to the apps it hosts). This crate validates the structure of
//! both. Given an already-parsed [`serde_json::Value`], each validator
//! returns an ordered list of human-readable violation messages; an empty
//! list means the document conforms.
//!
//! ## Key Design Principles
//!
//! 1. **Violations are data, not errors.** A malformed document never panics
//!    and never aborts the pass: every rule appends its message and the
//!    caller sees everything wrong with the document at once. The single
//!    exception is a non-object top level, which short-circuits because no
//!    property check is meaningful without an object.
//!
//! 2. **Untyped document model.** Manifests are inspected as
//!    [`serde_json::Value`] trees through narrow accessors (`as_object`,
//!    `as_str`, `as_array`) rather than deserialized into structs —
//!    reporting all violations requires walking shapes a typed decode would
//!    have rejected wholesale.
//!
//! 3. **Closed schemas.** Both manifest kinds and the per-endpoint
//!    capability entries recognize a fixed property set; anything else is a
//!    violation, never silently ignored.
//!
//! ## Crate Policy
//!
//! - No I/O, no network, no shared state: fetching, parsing, and rendering
//!   belong to the caller.
//! - Nothing in a document can make a validator panic; a wrong host type
//!   fails the check that tested it and the pass continues.
//! - Validators are pure: two calls on the same document return the
//!   identical list, in the same order.

mod app;
mod capability;
mod container;
mod report;
mod url;

// Re-export the validation surface for ergonomic imports.
pub use app::validate_app_manifest;
pub use container::validate_container_manifest;
pub use report::{
    check_app_manifest, check_container_manifest, ManifestError, ManifestKind, Violations,
};
pub use url::is_url;

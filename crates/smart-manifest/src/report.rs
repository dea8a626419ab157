//! # Validation Reports
//!
//! The validators return plain message lists so embedding code can do
//! whatever it wants with them. This module is the convenience layer on
//! top: a [`Violations`] wrapper that renders one message per line, a
//! [`ManifestError`] for pipelines that treat conformance as a `Result`,
//! and `check_*` entry points pairing each validator with its document
//! kind.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::{validate_app_manifest, validate_container_manifest};

/// Which manifest schema a document was validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestKind {
    /// A SMART application manifest.
    App,
    /// A SMART container (host platform) manifest.
    Container,
}

impl ManifestKind {
    /// Lowercase label used in error messages and log events.
    pub fn as_str(&self) -> &'static str {
        match self {
            ManifestKind::App => "app",
            ManifestKind::Container => "container",
        }
    }
}

impl fmt::Display for ManifestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered list of violation messages from one validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violations {
    messages: Vec<String>,
}

impl Violations {
    fn new(messages: Vec<String>) -> Self {
        Self { messages }
    }

    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns all messages, in check order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Consumes self and returns the inner message list.
    pub fn into_inner(self) -> Vec<String> {
        self.messages
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, message) in self.messages.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {message}")?;
        }
        Ok(())
    }
}

/// A manifest document failed structure validation.
#[derive(Error, Debug)]
#[error("{kind} manifest failed structure validation:\n{violations}")]
pub struct ManifestError {
    kind: ManifestKind,
    violations: Violations,
}

impl ManifestError {
    /// The schema the document was validated against.
    pub fn kind(&self) -> ManifestKind {
        self.kind
    }

    /// The violations that failed the document.
    pub fn violations(&self) -> &Violations {
        &self.violations
    }

    /// Consumes self and returns the violations.
    pub fn into_violations(self) -> Violations {
        self.violations
    }
}

/// Validate an app manifest, surfacing violations as an error.
///
/// Equivalent to [`validate_app_manifest`] with an empty result mapped to
/// `Ok(())`.
pub fn check_app_manifest(manifest: &Value) -> Result<(), ManifestError> {
    finish(ManifestKind::App, validate_app_manifest(manifest))
}

/// Validate a container manifest, surfacing violations as an error.
///
/// Equivalent to [`validate_container_manifest`] with an empty result
/// mapped to `Ok(())`.
pub fn check_container_manifest(manifest: &Value) -> Result<(), ManifestError> {
    finish(ManifestKind::Container, validate_container_manifest(manifest))
}

fn finish(kind: ManifestKind, messages: Vec<String>) -> Result<(), ManifestError> {
    if messages.is_empty() {
        return Ok(());
    }
    tracing::debug!(%kind, count = messages.len(), "manifest failed structure validation");
    Err(ManifestError {
        kind,
        violations: Violations::new(messages),
    })
}

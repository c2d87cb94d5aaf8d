//! The check capability and the built-in checks.
//!
//! A check is stateless: it reads a snapshot and returns a [`CheckResult`]. It
//! never mutates the snapshot and never performs I/O.

use crate::model::ResourceSnapshot;
use serde::Serialize;
use thiserror::Error;

mod active_access_key;
mod inactive_access_key;


pub use active_access_key::ActiveAccessKeyCheck;
pub use inactive_access_key::InactiveAccessKeyCheck;

/// Static identity of a check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CheckInfo {
    /// Stable external identifier. Never changes across versions.
    pub id: &'static str,
    /// Configuration handle.
    pub name: &'static str,
    /// Human-readable description, used as the compliance annotation.
    pub text: &'static str,
    pub default_score: u32,
}

pub trait Check: Send + Sync {
    fn info(&self) -> CheckInfo;

    /// Resource type tags this check applies to. Never empty.
    fn resource_types(&self) -> &'static [&'static str];

    fn evaluate(&self, snapshot: &ResourceSnapshot) -> Result<CheckResult, CheckFailure>;

    fn id(&self) -> &'static str {
        self.info().id
    }

    fn applies_to(&self, resource_type: &str) -> bool {
        self.resource_types().contains(&resource_type)
    }
}

/// A check could not produce a verdict.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CheckFailure {
    message: String,
}

impl CheckFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Outcome of one check against one snapshot.
///
/// `has_issue` is set whenever notes exist; a check may also flag an issue
/// without enumerable evidence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    check: CheckInfo,
    has_issue: bool,
    notes: Vec<String>,
}

impl CheckResult {
    /// An issue exactly when `notes` is non-empty.
    pub fn from_notes(check: CheckInfo, notes: Vec<String>) -> Self {
        Self {
            check,
            has_issue: !notes.is_empty(),
            notes,
        }
    }

    /// An issue regardless of evidence.
    pub fn flagged(check: CheckInfo, notes: Vec<String>) -> Self {
        Self {
            check,
            has_issue: true,
            notes,
        }
    }

    pub fn compliant(check: CheckInfo) -> Self {
        Self {
            check,
            has_issue: false,
            notes: Vec::new(),
        }
    }

    pub fn check(&self) -> &CheckInfo {
        &self.check
    }

    pub fn has_issue(&self) -> bool {
        self.has_issue
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }
}

impl std::fmt::Display for CheckResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} (score {}): [{}]",
            self.check.id,
            self.check.text,
            self.check.default_score,
            self.notes.join(", ")
        )
    }
}

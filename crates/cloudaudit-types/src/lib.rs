//! Stable DTOs and IDs used across the cloudaudit workspace.
//!
//! This crate is intentionally boring:
//! - stable check identifiers and resource type tags
//! - the compliance evaluation wire shape expected by the reporting service
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod compliance;
pub mod explain;
pub mod ids;

pub use compliance::{
    ANNOTATION_MAX_LEN, ComplianceEvaluationRecord, ComplianceType, EvaluationBatch,
    MAX_EVALUATIONS_PER_BATCH, truncate_annotation,
};
pub use explain::{Explanation, lookup_explanation};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// The reporting service rejects annotations longer than this (in characters).
pub const ANNOTATION_MAX_LEN: usize = 256;

/// Upper bound on evaluations accepted by a single submission call.
pub const MAX_EVALUATIONS_PER_BATCH: usize = 100;

/// Verdict for one check against one resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplianceType {
    Compliant,
    NonCompliant,
    /// Reserved for resources the check set does not cover.
    NotApplicable,
}

impl ComplianceType {
    pub fn as_str(self) -> &'static str {
        match self {
            ComplianceType::Compliant => "COMPLIANT",
            ComplianceType::NonCompliant => "NON_COMPLIANT",
            ComplianceType::NotApplicable => "NOT_APPLICABLE",
        }
    }
}

impl std::fmt::Display for ComplianceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One evaluation as submitted to the reporting service.
///
/// Field names are part of the external contract; do not rename.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ComplianceEvaluationRecord {
    pub compliance_resource_type: String,
    pub compliance_resource_id: String,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub ordering_timestamp: OffsetDateTime,
    pub annotation: String,
    pub compliance_type: ComplianceType,
}

/// A batch of evaluations paired with the result token of the triggering event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct EvaluationBatch {
    pub evaluations: Vec<ComplianceEvaluationRecord>,
    pub result_token: String,
}

/// Clamp an annotation to [`ANNOTATION_MAX_LEN`] characters.
pub fn truncate_annotation(annotation: &str) -> String {
    match annotation.char_indices().nth(ANNOTATION_MAX_LEN) {
        Some((idx, _)) => annotation[..idx].to_string(),
        None => annotation.to_string(),
    }
}

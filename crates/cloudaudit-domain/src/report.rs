//! Mapping of check outcomes onto the reporting service's compliance format.

use crate::checks::CheckResult;
use crate::engine::{ComplianceEvaluation, EvaluationError, Outcome};
use cloudaudit_types::{ComplianceEvaluationRecord, ComplianceType, truncate_annotation};
use time::OffsetDateTime;

/// Verdict for one check, before it is bound to a resource.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComplianceRecord {
    pub annotation: String,
    pub compliance_type: ComplianceType,
}

/// `has_issue` maps to `NON_COMPLIANT`, everything else to `COMPLIANT`.
pub fn to_compliance_format(result: &CheckResult) -> ComplianceRecord {
    let compliance_type = if result.has_issue() {
        ComplianceType::NonCompliant
    } else {
        ComplianceType::Compliant
    };
    ComplianceRecord {
        annotation: truncate_annotation(result.check().text),
        compliance_type,
    }
}

/// A failed check is reported as non-compliant with the failure as annotation.
pub fn error_record(err: &EvaluationError) -> ComplianceRecord {
    ComplianceRecord {
        annotation: truncate_annotation(&format!(
            "Check {} failed to evaluate: {}",
            err.check.name, err.message
        )),
        compliance_type: ComplianceType::NonCompliant,
    }
}

pub fn outcome_record(outcome: &Outcome) -> ComplianceRecord {
    match outcome {
        Outcome::Checked(result) => to_compliance_format(result),
        Outcome::Failed(err) => error_record(err),
    }
}

pub fn to_wire(eval: &ComplianceEvaluation) -> ComplianceEvaluationRecord {
    let record = outcome_record(&eval.outcome);
    ComplianceEvaluationRecord {
        compliance_resource_type: eval.resource_type.clone(),
        compliance_resource_id: eval.resource_id.clone(),
        ordering_timestamp: eval.ordering_timestamp,
        annotation: record.annotation,
        compliance_type: record.compliance_type,
    }
}

/// Record for a resource no check covers.
pub fn not_applicable(
    resource_type: &str,
    resource_id: &str,
    ordering_timestamp: OffsetDateTime,
    reason: &str,
) -> ComplianceEvaluationRecord {
    ComplianceEvaluationRecord {
        compliance_resource_type: resource_type.to_string(),
        compliance_resource_id: resource_id.to_string(),
        ordering_timestamp,
        annotation: truncate_annotation(reason),
        compliance_type: ComplianceType::NotApplicable,
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComplianceCounts {
    pub compliant: u32,
    pub non_compliant: u32,
    pub not_applicable: u32,
}

impl ComplianceCounts {
    pub fn from_records(records: &[ComplianceEvaluationRecord]) -> Self {
        let mut counts = ComplianceCounts::default();
        for r in records {
            match r.compliance_type {
                ComplianceType::Compliant => counts.compliant += 1,
                ComplianceType::NonCompliant => counts.non_compliant += 1,
                ComplianceType::NotApplicable => counts.not_applicable += 1,
            }
        }
        counts
    }

    pub fn is_compliant(&self) -> bool {
        self.non_compliant == 0
    }
}

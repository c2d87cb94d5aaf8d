use crate::checks::{Check, CheckInfo, CheckResult};
use crate::model::ResourceSnapshot;
use crate::registry::CheckRegistry;
use rayon::prelude::*;
use std::panic::{self, AssertUnwindSafe};
use thiserror::Error;
use time::OffsetDateTime;
use tracing::{debug, warn};

/// One check's evaluate function failed; the other checks still ran.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("check {} failed to evaluate: {message}", .check.name)]
pub struct EvaluationError {
    pub check: CheckInfo,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Checked(CheckResult),
    Failed(EvaluationError),
}

impl Outcome {
    pub fn check(&self) -> &CheckInfo {
        match self {
            Outcome::Checked(result) => result.check(),
            Outcome::Failed(err) => &err.check,
        }
    }
}

/// A check outcome bound to the resource it was evaluated against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComplianceEvaluation {
    pub resource_type: String,
    pub resource_id: String,
    pub ordering_timestamp: OffsetDateTime,
    pub outcome: Outcome,
}

#[derive(Debug, Default)]
pub struct Evaluator {
    registry: CheckRegistry,
}

impl Evaluator {
    pub fn new(registry: CheckRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &CheckRegistry {
        &self.registry
    }

    /// Run every check applicable to `resource_type` against `snapshot`.
    ///
    /// Checks run in parallel. The output has one entry per applicable check,
    /// in registry order, whether compliant, non-compliant, or failed.
    pub fn evaluate(
        &self,
        resource_type: &str,
        resource_id: &str,
        snapshot: &ResourceSnapshot,
        ordering_timestamp: OffsetDateTime,
    ) -> Vec<ComplianceEvaluation> {
        let checks = self.registry.checks_for(resource_type);
        debug!(
            resource_type,
            resource_id,
            checks = checks.len(),
            "evaluating resource"
        );

        checks
            .par_iter()
            .map(|check| ComplianceEvaluation {
                resource_type: resource_type.to_string(),
                resource_id: resource_id.to_string(),
                ordering_timestamp,
                outcome: run_isolated(*check, snapshot),
            })
            .collect()
    }
}

/// The process panic hook still runs for a contained panic; the CLI routes it to tracing.
fn run_isolated(check: &dyn Check, snapshot: &ResourceSnapshot) -> Outcome {
    let info = check.info();
    let message = match panic::catch_unwind(AssertUnwindSafe(|| check.evaluate(snapshot))) {
        Ok(Ok(result)) => return Outcome::Checked(result),
        Ok(Err(failure)) => failure.to_string(),
        Err(payload) => format!("panicked: {}", panic_payload_to_string(payload.as_ref())),
    };

    warn!(check_id = info.id, check = info.name, %message, "check failed to evaluate");
    Outcome::Failed(EvaluationError {
        check: info,
        message,
    })
}

fn panic_payload_to_string(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

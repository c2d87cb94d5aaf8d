//! Contracts with the collaborators that fetch snapshots and receive results.
//!
//! Retry and timeout policy belongs to the implementations, not to the pipeline.

use cloudaudit_domain::model::ResourceSnapshot;
use cloudaudit_types::ComplianceEvaluationRecord;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("no snapshot for {resource_type} {resource_id}")]
    NotFound {
        resource_type: String,
        resource_id: String,
    },
    #[error("snapshot for {resource_id} is unusable: {reason}")]
    Invalid { resource_id: String, reason: String },
    /// Retryable backend failure.
    #[error("transient provider failure: {0}")]
    Transient(String),
}

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to submit evaluations: {0}")]
    Submission(String),
}

pub trait ResourceProvider {
    fn get(&self, resource_type: &str, resource_id: &str)
    -> Result<ResourceSnapshot, ProviderError>;
}

pub trait ResultSink {
    /// Submit evaluations in order. Implementations batch as their transport requires.
    fn submit(
        &mut self,
        evaluations: &[ComplianceEvaluationRecord],
        result_token: &str,
    ) -> Result<(), SinkError>;
}

//! Local implementations of the collaborator contracts, used by the CLI and tests.

use crate::boundary::{ProviderError, ResourceProvider, ResultSink, SinkError};
use camino::{Utf8Path, Utf8PathBuf};
use cloudaudit_domain::model::ResourceSnapshot;
use cloudaudit_types::{ComplianceEvaluationRecord, EvaluationBatch, MAX_EVALUATIONS_PER_BATCH};
use std::collections::BTreeMap;
use std::io::Write;
use tracing::debug;

/// Snapshots keyed by resource type and id.
#[derive(Clone, Debug, Default)]
pub struct InMemoryProvider {
    snapshots: BTreeMap<(String, String), ResourceSnapshot>,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        resource_type: impl Into<String>,
        resource_id: impl Into<String>,
        snapshot: ResourceSnapshot,
    ) {
        self.snapshots
            .insert((resource_type.into(), resource_id.into()), snapshot);
    }
}

impl ResourceProvider for InMemoryProvider {
    fn get(
        &self,
        resource_type: &str,
        resource_id: &str,
    ) -> Result<ResourceSnapshot, ProviderError> {
        self.snapshots
            .get(&(resource_type.to_string(), resource_id.to_string()))
            .cloned()
            .ok_or_else(|| ProviderError::NotFound {
                resource_type: resource_type.to_string(),
                resource_id: resource_id.to_string(),
            })
    }
}

/// Serves one snapshot document from disk for whichever resource is requested.
#[derive(Clone, Debug)]
pub struct JsonFileProvider {
    path: Utf8PathBuf,
}

impl JsonFileProvider {
    pub fn new(path: impl AsRef<Utf8Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ResourceProvider for JsonFileProvider {
    fn get(
        &self,
        resource_type: &str,
        resource_id: &str,
    ) -> Result<ResourceSnapshot, ProviderError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(ProviderError::NotFound {
                    resource_type: resource_type.to_string(),
                    resource_id: resource_id.to_string(),
                });
            }
            Err(err) => {
                return Err(ProviderError::Transient(format!(
                    "read {}: {err}",
                    self.path
                )));
            }
        };

        let invalid = |reason: String| ProviderError::Invalid {
            resource_id: resource_id.to_string(),
            reason,
        };
        let value: serde_json::Value =
            serde_json::from_str(&text).map_err(|err| invalid(err.to_string()))?;
        ResourceSnapshot::from_value(value).map_err(|err| invalid(err.to_string()))
    }
}

/// Writes each batch as one JSON document per line.
#[derive(Debug)]
pub struct JsonWriterSink<W: Write> {
    writer: W,
    batches_written: usize,
}

impl<W: Write> JsonWriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            batches_written: 0,
        }
    }

    pub fn batches_written(&self) -> usize {
        self.batches_written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ResultSink for JsonWriterSink<W> {
    fn submit(
        &mut self,
        evaluations: &[ComplianceEvaluationRecord],
        result_token: &str,
    ) -> Result<(), SinkError> {
        for chunk in evaluations.chunks(MAX_EVALUATIONS_PER_BATCH) {
            let batch = EvaluationBatch {
                evaluations: chunk.to_vec(),
                result_token: result_token.to_string(),
            };
            let line = serde_json::to_string(&batch)
                .map_err(|err| SinkError::Submission(err.to_string()))?;
            writeln!(self.writer, "{line}").map_err(|err| SinkError::Submission(err.to_string()))?;
            self.batches_written += 1;
            debug!(records = chunk.len(), "wrote evaluation batch");
        }
        self.writer
            .flush()
            .map_err(|err| SinkError::Submission(err.to_string()))
    }
}

/// Keeps submitted batches in memory.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    pub batches: Vec<EvaluationBatch>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> impl Iterator<Item = &ComplianceEvaluationRecord> {
        self.batches.iter().flat_map(|b| b.evaluations.iter())
    }
}

impl ResultSink for MemorySink {
    fn submit(
        &mut self,
        evaluations: &[ComplianceEvaluationRecord],
        result_token: &str,
    ) -> Result<(), SinkError> {
        for chunk in evaluations.chunks(MAX_EVALUATIONS_PER_BATCH) {
            self.batches.push(EvaluationBatch {
                evaluations: chunk.to_vec(),
                result_token: result_token.to_string(),
            });
        }
        Ok(())
    }
}

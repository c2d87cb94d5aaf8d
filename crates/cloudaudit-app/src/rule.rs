//! The `rule` use case: fetch the snapshot, evaluate it, and submit the verdicts.

use crate::boundary::{ResourceProvider, ResultSink};
use crate::event::TriggerEvent;
use anyhow::Context;
use cloudaudit_domain::checks::CheckInfo;
use cloudaudit_domain::policy::EffectiveConfig;
use cloudaudit_domain::report::{self, ComplianceCounts};
use cloudaudit_domain::{CheckRegistry, Evaluator};
use cloudaudit_settings::{CloudauditConfigV1, Overrides, ResolvedConfig};
use cloudaudit_types::ComplianceEvaluationRecord;
use tracing::info;

/// Output from the rule use case.
#[derive(Clone, Debug)]
pub struct RuleOutput {
    /// Records in submission order.
    pub records: Vec<ComplianceEvaluationRecord>,
    pub counts: ComplianceCounts,
}

/// Parse and resolve configuration. Empty text means defaults.
pub fn load_config(config_text: &str, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let cfg = if config_text.trim().is_empty() {
        CloudauditConfigV1::default()
    } else {
        cloudaudit_settings::parse_config_toml(config_text).context("parse config")?
    };
    cloudaudit_settings::resolve_config(cfg, overrides).context("resolve config")
}

pub fn build_evaluator(cfg: &EffectiveConfig) -> Evaluator {
    Evaluator::new(CheckRegistry::builtin(cfg))
}

/// Registered checks in registry order.
pub fn list_checks(cfg: &EffectiveConfig) -> Vec<CheckInfo> {
    CheckRegistry::builtin(cfg)
        .all_checks()
        .iter()
        .map(|c| c.info())
        .collect()
}

/// Run one rule invocation end to end.
///
/// Provider and sink errors propagate; a single failing check does not.
pub fn run_rule(
    event: &TriggerEvent,
    evaluator: &Evaluator,
    provider: &dyn ResourceProvider,
    sink: &mut dyn ResultSink,
) -> anyhow::Result<RuleOutput> {
    let item = &event.invoking_event.configuration_item;
    let timestamp = item.configuration_item_capture_time;

    let records = if item.is_deleted() {
        info!(
            resource_type = %item.resource_type,
            resource_id = %item.resource_id,
            "resource deleted; reporting not applicable"
        );
        vec![report::not_applicable(
            &item.resource_type,
            &item.resource_id,
            timestamp,
            "Resource was deleted.",
        )]
    } else {
        let snapshot = provider
            .get(&item.resource_type, &item.resource_id)
            .with_context(|| {
                format!(
                    "fetch snapshot for {} {}",
                    item.resource_type, item.resource_id
                )
            })?;

        let evaluations =
            evaluator.evaluate(&item.resource_type, &item.resource_id, &snapshot, timestamp);
        if evaluations.is_empty() {
            vec![report::not_applicable(
                &item.resource_type,
                &item.resource_id,
                timestamp,
                &format!("No checks apply to resource type {}.", item.resource_type),
            )]
        } else {
            evaluations.iter().map(report::to_wire).collect()
        }
    };

    sink.submit(&records, &event.result_token)
        .context("submit evaluations")?;

    let counts = ComplianceCounts::from_records(&records);
    info!(
        resource_id = %item.resource_id,
        compliant = counts.compliant,
        non_compliant = counts.non_compliant,
        not_applicable = counts.not_applicable,
        "submitted evaluations"
    );

    Ok(RuleOutput { records, counts })
}

use super::{Check, CheckFailure, CheckInfo, CheckResult};
use crate::model::ResourceSnapshot;
use cloudaudit_types::ids;

const INFO: CheckInfo = CheckInfo {
    id: ids::CHECK_IAM_USER_ACTIVE_ACCESS_KEY,
    name: ids::NAME_IAM_USER_ACTIVE_ACCESS_KEY,
    text: "IAM User has an active access key.",
    default_score: 1,
};

/// Flags every access key whose status is `Active`; the key IDs are the evidence.
#[derive(Clone, Copy, Debug, Default)]
pub struct ActiveAccessKeyCheck;

impl Check for ActiveAccessKeyCheck {
    fn info(&self) -> CheckInfo {
        INFO
    }

    fn resource_types(&self) -> &'static [&'static str] {
        &[ids::RESOURCE_TYPE_IAM_USER]
    }

    fn evaluate(&self, snapshot: &ResourceSnapshot) -> Result<CheckResult, CheckFailure> {
        let notes = snapshot
            .access_keys()
            .into_iter()
            .filter(|key| key.status.is_active())
            .map(|key| key.access_key_id)
            .collect();
        Ok(CheckResult::from_notes(INFO, notes))
    }
}

use super::{Check, CheckFailure, CheckInfo, CheckResult};
use crate::model::ResourceSnapshot;
use cloudaudit_types::ids;

const INFO: CheckInfo = CheckInfo {
    id: ids::CHECK_IAM_USER_INACTIVE_ACCESS_KEY,
    name: ids::NAME_IAM_USER_INACTIVE_ACCESS_KEY,
    text: "IAM User has an inactive access key.",
    default_score: 0,
};

/// Looks for access keys in any state other than `Active`.
///
/// With `detect` off (the default) the check always reports compliant.
#[derive(Clone, Copy, Debug, Default)]
pub struct InactiveAccessKeyCheck {
    detect: bool,
}

impl InactiveAccessKeyCheck {
    pub fn new(detect: bool) -> Self {
        Self { detect }
    }

    pub fn detecting() -> Self {
        Self::new(true)
    }

    pub fn detects(&self) -> bool {
        self.detect
    }
}

impl Check for InactiveAccessKeyCheck {
    fn info(&self) -> CheckInfo {
        INFO
    }

    fn resource_types(&self) -> &'static [&'static str] {
        &[ids::RESOURCE_TYPE_IAM_USER]
    }

    fn evaluate(&self, snapshot: &ResourceSnapshot) -> Result<CheckResult, CheckFailure> {
        if !self.detect {
            return Ok(CheckResult::compliant(INFO));
        }

        let notes = snapshot
            .access_keys()
            .into_iter()
            .filter(|key| !key.status.is_active())
            .map(|key| key.access_key_id)
            .collect();
        Ok(CheckResult::from_notes(INFO, notes))
    }
}

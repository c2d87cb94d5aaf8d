use cloudaudit_types::ids;
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckPolicy {
    pub enabled: bool,
    /// Report what the check finds. Only consulted by checks that can run silenced.
    pub detect: bool,
}

impl CheckPolicy {
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            detect: true,
        }
    }

    pub fn silenced() -> Self {
        Self {
            enabled: true,
            detect: false,
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            detect: false,
        }
    }
}

/// Resolved configuration the registry is built from, keyed by check name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub profile: String,
    pub checks: BTreeMap<String, CheckPolicy>,
}

impl EffectiveConfig {
    pub fn check_policy(&self, check_name: &str) -> Option<&CheckPolicy> {
        self.checks.get(check_name).filter(|p| p.enabled)
    }
}

impl Default for EffectiveConfig {
    /// Every check enabled; the inactive-key check stays in its always-compliant mode.
    fn default() -> Self {
        let mut checks = BTreeMap::new();
        checks.insert(
            ids::NAME_IAM_USER_ACTIVE_ACCESS_KEY.to_string(),
            CheckPolicy::enabled(),
        );
        checks.insert(
            ids::NAME_IAM_USER_INACTIVE_ACCESS_KEY.to_string(),
            CheckPolicy::silenced(),
        );
        Self {
            profile: "default".to_string(),
            checks,
        }
    }
}

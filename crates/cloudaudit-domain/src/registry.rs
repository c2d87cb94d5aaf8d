use crate::checks::{ActiveAccessKeyCheck, Check, InactiveAccessKeyCheck};
use crate::policy::EffectiveConfig;
use cloudaudit_types::ids;
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("check {0} is registered more than once")]
    DuplicateId(String),
    #[error("check {0} declares no resource types")]
    NoResourceTypes(String),
}

/// Static catalog of checks, in declaration order.
pub struct CheckRegistry {
    checks: Vec<Box<dyn Check>>,
}

impl CheckRegistry {
    /// Build a registry from an explicit list, rejecting duplicate IDs and untagged checks.
    pub fn new(checks: Vec<Box<dyn Check>>) -> Result<Self, RegistryError> {
        let mut seen = BTreeSet::new();
        for check in &checks {
            let id = check.id();
            if !seen.insert(id) {
                return Err(RegistryError::DuplicateId(id.to_string()));
            }
            if check.resource_types().is_empty() {
                return Err(RegistryError::NoResourceTypes(id.to_string()));
            }
        }
        Ok(Self { checks })
    }

    /// The built-in checks enabled by `cfg`.
    pub fn builtin(cfg: &EffectiveConfig) -> Self {
        Self {
            checks: builtin_checks(cfg),
        }
    }

    pub fn all_checks(&self) -> Vec<&dyn Check> {
        self.checks.iter().map(|c| c.as_ref()).collect()
    }

    pub fn checks_for(&self, resource_type: &str) -> Vec<&dyn Check> {
        self.checks
            .iter()
            .filter(|c| c.applies_to(resource_type))
            .map(|c| c.as_ref())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl Default for CheckRegistry {
    fn default() -> Self {
        Self::builtin(&EffectiveConfig::default())
    }
}

impl std::fmt::Debug for CheckRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.checks.iter().map(|c| c.id()))
            .finish()
    }
}

fn builtin_checks(cfg: &EffectiveConfig) -> Vec<Box<dyn Check>> {
    let mut checks: Vec<Box<dyn Check>> = Vec::new();

    if cfg
        .check_policy(ids::NAME_IAM_USER_ACTIVE_ACCESS_KEY)
        .is_some()
    {
        checks.push(Box::new(ActiveAccessKeyCheck));
    }
    if let Some(policy) = cfg.check_policy(ids::NAME_IAM_USER_INACTIVE_ACCESS_KEY) {
        checks.push(Box::new(InactiveAccessKeyCheck::new(policy.detect)));
    }

    checks
}

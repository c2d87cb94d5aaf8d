use crate::checks::{Check, CheckFailure, CheckInfo, CheckResult};
use crate::model::ResourceSnapshot;
use serde_json::{Value, json};

pub fn access_key(id: &str, status: &str) -> Value {
    json!({"AccessKeyId": id, "Status": status})
}

pub fn iam_user_snapshot(keys: &[(&str, &str)]) -> ResourceSnapshot {
    let keys: Vec<Value> = keys
        .iter()
        .map(|(id, status)| access_key(id, status))
        .collect();
    snapshot(json!({"AccessKeys": keys}))
}

pub fn snapshot(value: Value) -> ResourceSnapshot {
    ResourceSnapshot::from_value(value).expect("test snapshots are objects")
}

pub fn ids_of(checks: &[&dyn Check]) -> Vec<&'static str> {
    checks.iter().map(|c| c.id()).collect()
}

#[derive(Clone, Copy, Debug)]
enum Behavior {
    Compliant,
    Flagged(&'static [&'static str]),
    Failing(&'static str),
    Panicking(&'static str),
}

/// A check with canned behavior, for exercising the registry and evaluator.
#[derive(Clone, Copy, Debug)]
pub struct FixedCheck {
    id: &'static str,
    resource_types: &'static [&'static str],
    behavior: Behavior,
}

impl FixedCheck {
    pub fn compliant(id: &'static str, resource_types: &'static [&'static str]) -> Self {
        Self {
            id,
            resource_types,
            behavior: Behavior::Compliant,
        }
    }

    pub fn flagged(
        id: &'static str,
        resource_types: &'static [&'static str],
        notes: &'static [&'static str],
    ) -> Self {
        Self {
            id,
            resource_types,
            behavior: Behavior::Flagged(notes),
        }
    }

    pub fn failing(
        id: &'static str,
        resource_types: &'static [&'static str],
        message: &'static str,
    ) -> Self {
        Self {
            id,
            resource_types,
            behavior: Behavior::Failing(message),
        }
    }

    pub fn panicking(
        id: &'static str,
        resource_types: &'static [&'static str],
        message: &'static str,
    ) -> Self {
        Self {
            id,
            resource_types,
            behavior: Behavior::Panicking(message),
        }
    }
}

impl Check for FixedCheck {
    fn info(&self) -> CheckInfo {
        CheckInfo {
            id: self.id,
            name: self.id,
            text: "Fixed test check.",
            default_score: 0,
        }
    }

    fn resource_types(&self) -> &'static [&'static str] {
        self.resource_types
    }

    fn evaluate(&self, _snapshot: &ResourceSnapshot) -> Result<CheckResult, CheckFailure> {
        match self.behavior {
            Behavior::Compliant => Ok(CheckResult::compliant(self.info())),
            Behavior::Flagged(notes) => Ok(CheckResult::flagged(
                self.info(),
                notes.iter().map(|n| n.to_string()).collect(),
            )),
            Behavior::Failing(message) => Err(CheckFailure::new(message)),
            Behavior::Panicking(message) => panic!("{message}"),
        }
    }
}

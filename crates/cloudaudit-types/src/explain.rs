//! Explain registry for checks.
//!
//! Maps check IDs and names to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Stable check ID.
    pub check_id: &'static str,
    /// Configuration name of the check.
    pub check_name: &'static str,
    /// Short description of the check.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
}

/// Look up an explanation by check ID or check name.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::CHECK_IAM_USER_ACTIVE_ACCESS_KEY | ids::NAME_IAM_USER_ACTIVE_ACCESS_KEY => {
            Some(explain_active_access_key())
        }
        ids::CHECK_IAM_USER_INACTIVE_ACCESS_KEY | ids::NAME_IAM_USER_INACTIVE_ACCESS_KEY => {
            Some(explain_inactive_access_key())
        }
        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[
        ids::CHECK_IAM_USER_ACTIVE_ACCESS_KEY,
        ids::CHECK_IAM_USER_INACTIVE_ACCESS_KEY,
    ]
}

/// List all known check names.
pub fn all_check_names() -> &'static [&'static str] {
    &[
        ids::NAME_IAM_USER_ACTIVE_ACCESS_KEY,
        ids::NAME_IAM_USER_INACTIVE_ACCESS_KEY,
    ]
}

fn explain_active_access_key() -> Explanation {
    Explanation {
        check_id: ids::CHECK_IAM_USER_ACTIVE_ACCESS_KEY,
        check_name: ids::NAME_IAM_USER_ACTIVE_ACCESS_KEY,
        title: "IAM User Has An Active Access Key",
        description: "\
Flags IAM users that hold at least one access key in the `Active` state.

Long-lived access keys are static credentials: they do not expire, they are easy
to leak through source control or logs, and they bypass interactive MFA. The
offending access key IDs are listed as evidence.",
        remediation: "\
Replace the key with short-lived credentials (an IAM role, instance profile or
federated session). If a key is unavoidable, rotate it regularly and deactivate
it as soon as it is no longer needed.",
    }
}

fn explain_inactive_access_key() -> Explanation {
    Explanation {
        check_id: ids::CHECK_IAM_USER_INACTIVE_ACCESS_KEY,
        check_name: ids::NAME_IAM_USER_INACTIVE_ACCESS_KEY,
        title: "IAM User Has An Inactive Access Key",
        description: "\
Looks for IAM users that still hold access keys in any state other than `Active`.

Detection is off by default: the check reports every user as compliant unless
`detect = true` is set for it in `cloudaudit.toml` or the `strict` profile is used.",
        remediation: "\
Delete access keys that have been deactivated. An inactive key can be
re-activated by anyone with `iam:UpdateAccessKey`, so keeping it around only
preserves a dormant credential.",
    }
}

//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - access key evidence collection and ordering
//! - the notes/has_issue relationship
//! - compliance mapping determinism and registry-ordered evaluation output

use crate::checks::{ActiveAccessKeyCheck, Check, InactiveAccessKeyCheck};
use crate::engine::{Evaluator, Outcome};
use crate::model::ResourceSnapshot;
use crate::registry::CheckRegistry;
use crate::report::to_compliance_format;
use cloudaudit_types::{ComplianceType, ids};
use proptest::prelude::*;
use serde_json::{Value, json};
use time::OffsetDateTime;

// ============================================================================
// Strategies
// ============================================================================

fn arb_key_id() -> impl Strategy<Value = String> {
    prop::string::string_regex("AKIA[A-Z0-9]{4,16}").unwrap()
}

fn arb_status() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Active".to_string()),
        Just("Inactive".to_string()),
        Just("InActive".to_string()),
        "[a-z]{1,8}",
    ]
}

/// Access key entries, some of them malformed.
fn arb_entry() -> impl Strategy<Value = Value> {
    prop_oneof![
        4 => (arb_key_id(), arb_status())
            .prop_map(|(id, status)| json!({"AccessKeyId": id, "Status": status})),
        1 => arb_key_id().prop_map(|id| json!({"AccessKeyId": id})),
        1 => arb_status().prop_map(|status| json!({"Status": status})),
        1 => Just(json!(null)),
    ]
}

fn arb_snapshot() -> impl Strategy<Value = (Vec<Value>, ResourceSnapshot)> {
    prop::collection::vec(arb_entry(), 0..12).prop_map(|entries| {
        let snapshot = ResourceSnapshot::from_value(json!({"AccessKeys": entries.clone()}))
            .expect("object snapshot");
        (entries, snapshot)
    })
}

fn expected_ids(entries: &[Value], active: bool) -> Vec<String> {
    entries
        .iter()
        .filter_map(|e| {
            let id = e.get("AccessKeyId")?.as_str()?;
            let status = e.get("Status")?.as_str()?;
            ((status == "Active") == active).then(|| id.to_string())
        })
        .collect()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn active_check_notes_are_active_ids_in_order((entries, snapshot) in arb_snapshot()) {
        let result = ActiveAccessKeyCheck.evaluate(&snapshot).unwrap();
        let expected = expected_ids(&entries, true);
        prop_assert_eq!(result.has_issue(), !expected.is_empty());
        prop_assert_eq!(result.notes(), expected.as_slice());
    }

    #[test]
    fn detecting_inactive_check_notes_are_inactive_ids_in_order((entries, snapshot) in arb_snapshot()) {
        let result = InactiveAccessKeyCheck::detecting().evaluate(&snapshot).unwrap();
        let expected = expected_ids(&entries, false);
        prop_assert_eq!(result.notes(), expected.as_slice());
    }

    #[test]
    fn notes_imply_issue((_entries, snapshot) in arb_snapshot()) {
        let checks: [&dyn Check; 3] = [
            &ActiveAccessKeyCheck,
            &InactiveAccessKeyCheck::default(),
            &InactiveAccessKeyCheck::detecting(),
        ];
        for check in checks {
            let result = check.evaluate(&snapshot).unwrap();
            prop_assert!(result.notes().is_empty() || result.has_issue());
        }
    }

    #[test]
    fn compliance_mapping_is_deterministic((_entries, snapshot) in arb_snapshot()) {
        let result = ActiveAccessKeyCheck.evaluate(&snapshot).unwrap();
        let first = to_compliance_format(&result);
        let second = to_compliance_format(&result.clone());
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(
            first.compliance_type == ComplianceType::NonCompliant,
            result.has_issue()
        );
    }

    #[test]
    fn evaluator_returns_one_outcome_per_check_in_order((_entries, snapshot) in arb_snapshot()) {
        let evaluator = Evaluator::new(CheckRegistry::default());
        let evals = evaluator.evaluate(
            ids::RESOURCE_TYPE_IAM_USER,
            "AIDAEXAMPLE",
            &snapshot,
            OffsetDateTime::UNIX_EPOCH,
        );
        let got: Vec<&str> = evals.iter().map(|e| e.outcome.check().id).collect();
        prop_assert_eq!(
            got,
            vec![
                ids::CHECK_IAM_USER_ACTIVE_ACCESS_KEY,
                ids::CHECK_IAM_USER_INACTIVE_ACCESS_KEY,
            ]
        );
        prop_assert!(evals.iter().all(|e| matches!(e.outcome, Outcome::Checked(_))));
    }
}

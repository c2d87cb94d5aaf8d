//! The `explain` use case: look up check documentation.

use cloudaudit_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// Found an explanation for the identifier.
    Found(Explanation),
    /// Unknown identifier; includes available check IDs and names.
    NotFound {
        identifier: String,
        available_check_ids: &'static [&'static str],
        available_check_names: &'static [&'static str],
    },
}

/// Look up an explanation for a check ID or name.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_check_ids: explain::all_check_ids(),
            available_check_names: explain::all_check_names(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.len()));
    out.push_str("\n\n");
    out.push_str(&format!("ID:   {}\n", exp.check_id));
    out.push_str(&format!("Name: {}\n\n", exp.check_name));
    out.push_str(exp.description);
    out.push_str("\n\n");
    out.push_str("Remediation\n");
    out.push_str("-----------\n");
    out.push_str(exp.remediation);
    out.push('\n');

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(
    identifier: &str,
    check_ids: &[&'static str],
    check_names: &[&'static str],
) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown check id or name: {}\n\n", identifier));
    out.push_str("Available check ids:\n");
    for id in check_ids {
        out.push_str(&format!("  - {}\n", id));
    }
    out.push_str("\nAvailable check names:\n");
    for name in check_names {
        out.push_str(&format!("  - {}\n", name));
    }

    out
}

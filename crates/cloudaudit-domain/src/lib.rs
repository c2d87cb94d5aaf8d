//! Pure compliance evaluation (no IO).
//!
//! Input: a resource snapshot fetched elsewhere.
//! Output: one compliance evaluation per applicable check, in registry order.

#![forbid(unsafe_code)]

pub mod checks;
pub mod model;
pub mod policy;
pub mod report;

mod engine;
mod registry;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod test_support;

pub use engine::{ComplianceEvaluation, EvaluationError, Evaluator, Outcome};
pub use registry::{CheckRegistry, RegistryError};

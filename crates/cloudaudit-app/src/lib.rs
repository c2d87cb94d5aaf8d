//! Use case orchestration for cloudaudit.
//!
//! This crate provides the application layer: use cases that coordinate the domain and
//! settings layers with the resource provider and result sink collaborators. It is
//! intentionally thin and delegates evaluation to the domain crate.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod adapters;
mod boundary;
mod event;
mod explain;
mod rule;

pub use adapters::{InMemoryProvider, JsonFileProvider, JsonWriterSink, MemorySink};
pub use boundary::{ProviderError, ResourceProvider, ResultSink, SinkError};
pub use event::{ConfigurationItem, InvokingEvent, TriggerEvent, parse_event};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use rule::{RuleOutput, build_evaluator, list_checks, load_config, run_rule};

//! Config parsing and profile resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{CheckConfig, CloudauditConfigV1};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `cloudaudit.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<CloudauditConfigV1> {
    let cfg: CloudauditConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config used by the registry (profile + overrides + per-check config).
pub fn resolve_config(
    cfg: CloudauditConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}

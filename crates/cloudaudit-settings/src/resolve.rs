use crate::{model::CloudauditConfigV1, presets};
use cloudaudit_domain::policy::CheckPolicy;
use cloudaudit_types::{explain, ids};

/// Checks that honor `detect`.
const SILENCEABLE_CHECKS: &[&str] = &[ids::NAME_IAM_USER_INACTIVE_ACCESS_KEY];

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: cloudaudit_domain::policy::EffectiveConfig,
}

pub fn resolve_config(
    cfg: CloudauditConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .or(cfg.profile)
        .unwrap_or_else(|| "default".to_string());

    let mut effective = presets::preset(&profile);

    for (name, cc) in cfg.checks.iter() {
        if !explain::all_check_names().contains(&name.as_str()) {
            anyhow::bail!(
                "unknown check: {name} (expected one of: {})",
                explain::all_check_names().join(", ")
            );
        }
        if cc.detect.is_some() && !SILENCEABLE_CHECKS.contains(&name.as_str()) {
            anyhow::bail!("check {name} does not support `detect`");
        }

        let entry = effective
            .checks
            .entry(name.clone())
            .or_insert_with(CheckPolicy::disabled);

        if let Some(enabled) = cc.enabled {
            entry.enabled = enabled;
        }
        if let Some(detect) = cc.detect {
            entry.detect = detect;
        }
    }

    Ok(ResolvedConfig { effective })
}

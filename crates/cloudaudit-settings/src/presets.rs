use cloudaudit_domain::policy::{CheckPolicy, EffectiveConfig};
use cloudaudit_types::ids;

/// Preset profiles. Unknown names fall back to `default`.
pub fn preset(profile: &str) -> EffectiveConfig {
    match profile {
        "strict" => strict_profile(),
        _ => EffectiveConfig::default(),
    }
}

fn strict_profile() -> EffectiveConfig {
    let mut cfg = EffectiveConfig::default();
    cfg.profile = "strict".to_string();
    cfg.checks.insert(
        ids::NAME_IAM_USER_INACTIVE_ACCESS_KEY.to_string(),
        CheckPolicy::enabled(),
    );
    cfg
}

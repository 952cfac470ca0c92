use crate::{model::RulesetConfigV1, presets};
use anyhow::Context;
use warband_domain::rules::Ruleset;

/// Resolve a parsed config into the effective ruleset: preset first, then
/// field-by-field overrides, then sanity validation.
pub fn resolve_ruleset(cfg: RulesetConfigV1) -> anyhow::Result<Ruleset> {
    let preset_name = cfg.preset.as_deref().unwrap_or("rulebook");
    let mut rules = presets::preset(preset_name);

    if let Some(costs) = &cfg.attribute_costs {
        if let Some(speed) = costs.speed {
            rules.attribute_costs.speed = speed;
        }
        if let Some(dice) = costs.dice {
            rules.attribute_costs.dice = dice;
        }
        if let Some(firepower) = costs.firepower {
            rules.attribute_costs.firepower = firepower;
        }
    }

    if let Some(list) = cfg.natural_weapons {
        rules.natural_weapons = list;
    }
    if let Some(list) = cfg.standard_issue {
        rules.standard_issue = list;
    }

    if let Some(v) = cfg.mutant_speed_discount {
        rules.mutant_speed_discount = v;
    }
    if let Some(v) = cfg.heavily_armed_discount {
        rules.heavily_armed_discount = v;
    }
    if let Some(v) = cfg.natural_weapon_discount {
        rules.natural_weapon_discount = v;
    }

    if let Some(v) = cfg.trooper_point_limit {
        rules.trooper_point_limit = v;
    }
    if let Some(v) = cfg.premium_trooper_point_limit {
        rules.premium_trooper_point_limit = v;
    }
    if let Some(v) = cfg.point_limit_warning_margin {
        rules.point_limit_warning_margin = v;
    }
    if let Some(v) = cfg.allowed_point_limits {
        rules.allowed_point_limits = v;
    }

    if let Some(v) = cfg.leader_equipment_limit {
        rules.leader_equipment_limit = v as usize;
    }
    if let Some(v) = cfg.trooper_equipment_limit {
        rules.trooper_equipment_limit = v as usize;
    }
    if let Some(v) = cfg.cyborg_equipment_bonus {
        rules.cyborg_equipment_bonus = v as usize;
    }

    validate(&rules).with_context(|| format!("invalid ruleset (preset '{preset_name}')"))?;
    Ok(rules)
}

fn validate(rules: &Ruleset) -> anyhow::Result<()> {
    if rules.allowed_point_limits.is_empty() {
        anyhow::bail!("allowed_point_limits must list at least one value");
    }
    if rules.premium_trooper_point_limit < rules.trooper_point_limit {
        anyhow::bail!(
            "premium_trooper_point_limit ({}) must be at least trooper_point_limit ({})",
            rules.premium_trooper_point_limit,
            rules.trooper_point_limit
        );
    }
    if rules.point_limit_warning_margin > rules.trooper_point_limit {
        anyhow::bail!(
            "point_limit_warning_margin ({}) exceeds trooper_point_limit ({})",
            rules.point_limit_warning_margin,
            rules.trooper_point_limit
        );
    }
    Ok(())
}

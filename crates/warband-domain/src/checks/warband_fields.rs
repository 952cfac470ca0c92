use crate::checks::utils::warband_error;
use crate::rules::Ruleset;
use warband_types::{ids, Finding, Warband};

pub fn run(warband: &Warband, rules: &Ruleset, out: &mut Vec<Finding>) {
    if warband.name.trim().is_empty() {
        out.push(warband_error(
            ids::CODE_WARBAND_NAME_REQUIRED,
            "name",
            "warband name is required".to_string(),
        ));
    }

    if !rules.is_allowed_point_limit(warband.point_limit) {
        let allowed: Vec<String> = rules
            .allowed_point_limits
            .iter()
            .map(|l| l.to_string())
            .collect();
        out.push(warband_error(
            ids::CODE_INVALID_POINT_LIMIT,
            "point_limit",
            format!(
                "point limit {} is not allowed (expected one of: {})",
                warband.point_limit,
                allowed.join(", ")
            ),
        ));
    }

    if warband.ability.is_none() {
        out.push(warband_error(
            ids::CODE_WARBAND_ABILITY_REQUIRED,
            "ability",
            "warband ability is required".to_string(),
        ));
    }
}

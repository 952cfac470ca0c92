use warband_domain::rules::Ruleset;

/// Preset rulesets are opinionated defaults.
///
/// Keep these small and readable. Anything beyond a tweak belongs in a
/// house-rules config file.
pub fn preset(name: &str) -> Ruleset {
    match name {
        "escalation" => escalation(),
        // default
        _ => Ruleset::rulebook(),
    }
}

/// Escalation league: bigger games only, and a little more headroom for
/// elite troopers.
fn escalation() -> Ruleset {
    let mut rules = Ruleset::rulebook();
    rules.allowed_point_limits = vec![100];
    rules.premium_trooper_point_limit = 30;
    rules
}

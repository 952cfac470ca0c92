use crate::rules::Ruleset;
use warband_types::{Finding, Warband, Weirdo};

mod equipment;
mod points;
mod utils;
mod warband_fields;
mod weapons;
mod weirdo_fields;


/// Run every rule for one weirdo in the context of its warband.
///
/// All rules are evaluated; violations accumulate, nothing short-circuits.
pub fn run_weirdo(weirdo: &Weirdo, warband: &Warband, rules: &Ruleset, out: &mut Vec<Finding>) {
    weirdo_fields::run(weirdo, out);
    weapons::run(weirdo, out);
    equipment::run(weirdo, warband.ability, rules, out);
    points::run_weirdo(weirdo, warband, rules, out);
}

/// Run every rule for a whole warband: roster fields, each weirdo, then the
/// cross-roster rules.
pub fn run_warband(warband: &Warband, rules: &Ruleset, out: &mut Vec<Finding>) {
    warband_fields::run(warband, rules, out);
    for weirdo in &warband.weirdos {
        run_weirdo(weirdo, warband, rules, out);
    }
    points::run_roster(warband, rules, out);
}

//! Point-ceiling rules, including the one cross-weirdo rule in the game:
//! a single "premium slot" allows one trooper per warband to cost 21-25
//! points instead of the usual 20.
//!
//! Ceiling selection and uniqueness enforcement are deliberately two
//! separate passes. Per-weirdo ceiling selection excludes the weirdo under
//! test by identity, so each claimant in isolation looks acceptable; the
//! whole-roster sweep is what catches two simultaneous claims.

use crate::checks::utils::{display_name, warband_error, weirdo_error, weirdo_warning};
use crate::cost;
use crate::rules::Ruleset;
use warband_types::{ids, Finding, Role, Warband, Weirdo};

/// Whether some other trooper in the warband already occupies the premium
/// band. Peers' costs are recomputed from their current contents, never
/// read from the cached totals.
fn other_premium_occupant(weirdo: &Weirdo, warband: &Warband, rules: &Ruleset) -> bool {
    warband.weirdos.iter().any(|peer| {
        peer.id != weirdo.id
            && peer.role == Role::Trooper
            && rules.is_premium_cost(cost::weirdo_cost(peer, warband.ability, rules))
    })
}

/// The ceiling that applies to `weirdo` right now. The premium ceiling only
/// kicks in once the trooper is actually above the normal limit and the
/// slot is free; a trooper at or under the normal limit is measured (and
/// warned) against that limit.
fn applicable_ceiling(total: u32, weirdo: &Weirdo, warband: &Warband, rules: &Ruleset) -> u32 {
    if total > rules.trooper_point_limit && !other_premium_occupant(weirdo, warband, rules) {
        rules.premium_trooper_point_limit
    } else {
        rules.trooper_point_limit
    }
}

pub fn run_weirdo(weirdo: &Weirdo, warband: &Warband, rules: &Ruleset, out: &mut Vec<Finding>) {
    if weirdo.role != Role::Trooper {
        return;
    }

    let total = cost::weirdo_cost(weirdo, warband.ability, rules);
    let ceiling = applicable_ceiling(total, weirdo, warband, rules);

    if total > ceiling {
        out.push(weirdo_error(
            ids::CODE_TROOPER_POINT_LIMIT_EXCEEDED,
            "total_cost",
            weirdo,
            format!(
                "{} costs {} points, over the {}-point trooper limit",
                display_name(weirdo),
                total,
                ceiling
            ),
        ));
    } else if ceiling - total <= rules.point_limit_warning_margin {
        out.push(weirdo_warning(
            ids::CODE_TROOPER_POINT_LIMIT_CLOSE,
            "total_cost",
            weirdo,
            format!(
                "{} costs {} points, within {} of the {}-point limit",
                display_name(weirdo),
                total,
                ceiling - total,
                ceiling
            ),
        ));
    }
}

pub fn run_roster(warband: &Warband, rules: &Ruleset, out: &mut Vec<Finding>) {
    // Uniqueness sweep: any roster member in the premium band counts,
    // regardless of which one a per-weirdo check would have blamed.
    let claimants: Vec<&Weirdo> = warband
        .weirdos
        .iter()
        .filter(|w| rules.is_premium_cost(cost::weirdo_cost(w, warband.ability, rules)))
        .collect();
    if claimants.len() > 1 {
        let names: Vec<&str> = claimants.iter().map(|w| display_name(w)).collect();
        out.push(warband_error(
            ids::CODE_MULTIPLE_25_POINT_WEIRDOS,
            "weirdos",
            format!(
                "only one weirdo may cost between {} and {} points; currently: {}",
                rules.trooper_point_limit + 1,
                rules.premium_trooper_point_limit,
                names.join(", ")
            ),
        ));
    }

    let total = cost::warband_cost(warband, rules);
    if total > warband.point_limit {
        out.push(warband_error(
            ids::CODE_WARBAND_POINT_LIMIT_EXCEEDED,
            "total_cost",
            format!(
                "warband costs {} points, over the {}-point limit",
                total, warband.point_limit
            ),
        ));
    }
}

use crate::checks::utils::{display_name, weirdo_error};
use warband_types::{ids, Finding, Weirdo};

pub fn run(weirdo: &Weirdo, out: &mut Vec<Finding>) {
    if weirdo.close_combat_weapons.is_empty() {
        out.push(weirdo_error(
            ids::CODE_CLOSE_COMBAT_WEAPON_REQUIRED,
            "close_combat_weapons",
            weirdo,
            format!("{} needs at least one close combat weapon", display_name(weirdo)),
        ));
    }

    let needs_ranged = weirdo
        .attributes
        .as_ref()
        .and_then(|attrs| attrs.firepower)
        .is_some_and(|fp| fp.requires_ranged_weapon());
    if needs_ranged && weirdo.ranged_weapons.is_empty() {
        out.push(weirdo_error(
            ids::CODE_RANGED_WEAPON_REQUIRED,
            "ranged_weapons",
            weirdo,
            format!(
                "{} has a firepower rating and needs at least one ranged weapon",
                display_name(weirdo)
            ),
        ));
    }
}

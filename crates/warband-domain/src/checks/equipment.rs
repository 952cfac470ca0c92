use crate::checks::utils::{display_name, weirdo_error};
use crate::rules::Ruleset;
use warband_types::{ids, Ability, Finding, Weirdo};

pub fn run(weirdo: &Weirdo, ability: Option<Ability>, rules: &Ruleset, out: &mut Vec<Finding>) {
    let limit = rules.equipment_limit(weirdo.role, ability);
    if weirdo.equipment.len() > limit {
        out.push(weirdo_error(
            ids::CODE_EQUIPMENT_LIMIT_EXCEEDED,
            "equipment",
            weirdo,
            format!(
                "{} carries {} equipment items but the limit is {}",
                display_name(weirdo),
                weirdo.equipment.len(),
                limit
            ),
        ));
    }
}

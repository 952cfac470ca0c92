use crate::checks::utils::{display_name, weirdo_error};
use warband_types::{ids, Finding, Role, Weirdo};

pub fn run(weirdo: &Weirdo, out: &mut Vec<Finding>) {
    if weirdo.name.trim().is_empty() {
        out.push(weirdo_error(
            ids::CODE_WEIRDO_NAME_REQUIRED,
            "name",
            weirdo,
            "weirdo name is required".to_string(),
        ));
    }

    // A missing block and a partially filled block are the same violation:
    // one finding, never a crash on absent nesting.
    let complete = weirdo
        .attributes
        .as_ref()
        .is_some_and(|attrs| attrs.is_complete());
    if !complete {
        out.push(weirdo_error(
            ids::CODE_ATTRIBUTES_INCOMPLETE,
            "attributes",
            weirdo,
            format!(
                "{} must have all five attributes set (speed, defense, firepower, prowess, willpower)",
                display_name(weirdo)
            ),
        ));
    }

    if weirdo.role == Role::Trooper && weirdo.leader_trait.is_some() {
        out.push(weirdo_error(
            ids::CODE_LEADER_TRAIT_INVALID,
            "leader_trait",
            weirdo,
            format!("{} is a trooper and cannot have a leader trait", display_name(weirdo)),
        ));
    }
}

//! The cost engine: pure, total functions from (item, ability, ruleset) to
//! non-negative points.
//!
//! Every discount rule is local to one item; no cross-item interaction
//! exists. Discounts use saturating subtraction so no combination can drive
//! a component negative. Cached `total_cost` fields on the model are never
//! read here.

use crate::rules::Ruleset;
use warband_types::{
    Ability, Attributes, Dice, Equipment, Firepower, PsychicPower, Speed, Warband, Weapon,
    WeaponKind, Weirdo,
};

/// One attribute slot together with its selected level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttributeValue {
    Speed(Speed),
    Defense(Dice),
    Firepower(Firepower),
    Prowess(Dice),
    Willpower(Dice),
}

/// Cost of a single attribute selection under `ability`.
///
/// Mutants shave a point off speed; no other (attribute, ability) pair is
/// modified.
pub fn attribute_cost(value: AttributeValue, ability: Option<Ability>, rules: &Ruleset) -> u32 {
    let base = match value {
        AttributeValue::Speed(level) => rules.attribute_costs.speed(level),
        AttributeValue::Defense(level)
        | AttributeValue::Prowess(level)
        | AttributeValue::Willpower(level) => rules.attribute_costs.dice(level),
        AttributeValue::Firepower(level) => rules.attribute_costs.firepower(level),
    };
    if ability == Some(Ability::Mutants) && matches!(value, AttributeValue::Speed(_)) {
        base.saturating_sub(rules.mutant_speed_discount)
    } else {
        base
    }
}

/// Cost of a whole attribute block; absent slots contribute 0.
pub fn attributes_cost(attrs: &Attributes, ability: Option<Ability>, rules: &Ruleset) -> u32 {
    let mut total = 0;
    if let Some(level) = attrs.speed {
        total += attribute_cost(AttributeValue::Speed(level), ability, rules);
    }
    if let Some(level) = attrs.defense {
        total += attribute_cost(AttributeValue::Defense(level), ability, rules);
    }
    if let Some(level) = attrs.firepower {
        total += attribute_cost(AttributeValue::Firepower(level), ability, rules);
    }
    if let Some(level) = attrs.prowess {
        total += attribute_cost(AttributeValue::Prowess(level), ability, rules);
    }
    if let Some(level) = attrs.willpower {
        total += attribute_cost(AttributeValue::Willpower(level), ability, rules);
    }
    total
}

/// Cost of one weapon under `ability`.
///
/// Heavily Armed discounts ranged weapons; Mutants discounts close weapons
/// on the natural-weapons list. A given ability only ever touches one
/// weapon kind, so the discounts are mutually exclusive by construction.
pub fn weapon_cost(weapon: &Weapon, ability: Option<Ability>, rules: &Ruleset) -> u32 {
    match (ability, weapon.kind) {
        (Some(Ability::HeavilyArmed), WeaponKind::Ranged) => {
            weapon.cost.saturating_sub(rules.heavily_armed_discount)
        }
        (Some(Ability::Mutants), WeaponKind::Close) if rules.is_natural_weapon(&weapon.name) => {
            weapon.cost.saturating_sub(rules.natural_weapon_discount)
        }
        _ => weapon.cost,
    }
}

/// Cost of one equipment item under `ability`.
///
/// Soldiers carry standard-issue gear for free; everything else is the base
/// cost unmodified.
pub fn equipment_cost(equipment: &Equipment, ability: Option<Ability>, rules: &Ruleset) -> u32 {
    if ability == Some(Ability::Soldiers) && rules.is_standard_issue(&equipment.name) {
        0
    } else {
        equipment.cost
    }
}

/// Cost of one psychic power. No ability ever modifies it.
pub fn psychic_power_cost(power: &PsychicPower) -> u32 {
    power.cost
}

/// Total cost of one weirdo under `ability`: all five attributes, every
/// weapon in both lists, every equipment item, every power.
pub fn weirdo_cost(weirdo: &Weirdo, ability: Option<Ability>, rules: &Ruleset) -> u32 {
    let attrs = weirdo
        .attributes
        .as_ref()
        .map(|a| attributes_cost(a, ability, rules))
        .unwrap_or(0);

    let weapons: u32 = weirdo
        .close_combat_weapons
        .iter()
        .chain(&weirdo.ranged_weapons)
        .map(|w| weapon_cost(w, ability, rules))
        .sum();

    let equipment: u32 = weirdo
        .equipment
        .iter()
        .map(|e| equipment_cost(e, ability, rules))
        .sum();

    let powers: u32 = weirdo.psychic_powers.iter().map(psychic_power_cost).sum();

    attrs + weapons + equipment + powers
}

/// Total cost of a warband: the sum of every weirdo under the warband's
/// ability.
pub fn warband_cost(warband: &Warband, rules: &Ruleset) -> u32 {
    warband
        .weirdos
        .iter()
        .map(|w| weirdo_cost(w, warband.ability, rules))
        .sum()
}

//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Cost non-negativity and clamping under every ability
//! - Sum decomposition of weirdo and warband totals
//! - Determinism and idempotence of validation

use crate::cost::{
    attributes_cost, equipment_cost, psychic_power_cost, warband_cost, weapon_cost, weirdo_cost,
};
use crate::engine::{evaluate, validate_weirdo};
use crate::rules::Ruleset;
use proptest::prelude::*;
use time::OffsetDateTime;
use warband_types::{
    Ability, Attributes, Dice, Equipment, Firepower, PsychicPower, Role, Speed, Warband,
    WarbandId, Weapon, WeaponKind, Weirdo, WeirdoId,
};

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

fn arb_speed() -> impl Strategy<Value = Speed> {
    prop_oneof![Just(Speed::One), Just(Speed::Two), Just(Speed::Three)]
}

fn arb_dice() -> impl Strategy<Value = Dice> {
    prop_oneof![Just(Dice::D6), Just(Dice::D8), Just(Dice::D10)]
}

fn arb_firepower() -> impl Strategy<Value = Firepower> {
    prop_oneof![
        Just(Firepower::None),
        Just(Firepower::D8),
        Just(Firepower::D10),
    ]
}

fn arb_ability() -> impl Strategy<Value = Option<Ability>> {
    prop_oneof![
        Just(None),
        Just(Some(Ability::Cyborgs)),
        Just(Some(Ability::Fanatics)),
        Just(Some(Ability::HeavilyArmed)),
        Just(Some(Ability::Mutants)),
        Just(Some(Ability::Psychics)),
        Just(Some(Ability::Soldiers)),
        Just(Some(Ability::SpeedFreaks)),
    ]
}

fn arb_role() -> impl Strategy<Value = Role> {
    prop_oneof![Just(Role::Leader), Just(Role::Trooper)]
}

fn arb_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z][A-Za-z ]{0,15}").unwrap()
}

/// Weapon names biased toward the rulebook's natural-weapon list so the
/// Mutants discount path gets real coverage.
fn arb_weapon_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Claws & Teeth".to_string()),
        Just("Tentacles".to_string()),
        Just("Blade".to_string()),
        Just("Pistol".to_string()),
        arb_name(),
    ]
}

fn arb_weapon(kind: WeaponKind) -> impl Strategy<Value = Weapon> {
    (arb_weapon_name(), 0u32..10, 1u8..=2).prop_map(move |(name, cost, max_actions)| Weapon {
        name,
        kind,
        cost,
        max_actions,
        notes: String::new(),
    })
}

/// Equipment names biased toward the standard-issue list for the Soldiers
/// discount path.
fn arb_equipment() -> impl Strategy<Value = Equipment> {
    (
        prop_oneof![
            Just("Medkit".to_string()),
            Just("Grenades".to_string()),
            Just("Armor".to_string()),
            arb_name(),
        ],
        0u32..8,
    )
        .prop_map(|(name, cost)| Equipment {
            name,
            category: "gear".to_string(),
            cost,
        })
}

fn arb_psychic_power() -> impl Strategy<Value = PsychicPower> {
    (arb_name(), 0u32..6).prop_map(|(name, cost)| PsychicPower {
        name,
        category: "offense".to_string(),
        cost,
    })
}

/// Attribute blocks in every state of completeness.
fn arb_attributes() -> impl Strategy<Value = Attributes> {
    (
        prop::option::of(arb_speed()),
        prop::option::of(arb_dice()),
        prop::option::of(arb_firepower()),
        prop::option::of(arb_dice()),
        prop::option::of(arb_dice()),
    )
        .prop_map(|(speed, defense, firepower, prowess, willpower)| Attributes {
            speed,
            defense,
            firepower,
            prowess,
            willpower,
        })
}

fn arb_weirdo(id: usize) -> impl Strategy<Value = Weirdo> {
    (
        arb_name(),
        arb_role(),
        prop::option::of(arb_attributes()),
        prop::collection::vec(arb_weapon(WeaponKind::Close), 0..3),
        prop::collection::vec(arb_weapon(WeaponKind::Ranged), 0..3),
        prop::collection::vec(arb_equipment(), 0..4),
        prop::collection::vec(arb_psychic_power(), 0..3),
        any::<u32>(),
    )
        .prop_map(
            move |(name, role, attributes, close, ranged, equipment, powers, stale_total)| {
                Weirdo {
                    id: WeirdoId::new(format!("w{id}")),
                    name,
                    role,
                    attributes,
                    close_combat_weapons: close,
                    ranged_weapons: ranged,
                    equipment,
                    psychic_powers: powers,
                    leader_trait: None,
                    notes: String::new(),
                    // Deliberately garbage: the engines must never read it.
                    total_cost: stale_total,
                }
            },
        )
}

fn arb_weirdos() -> impl Strategy<Value = Vec<Weirdo>> {
    (0usize..5).prop_flat_map(|n| {
        let mut parts = Vec::new();
        for i in 0..n {
            parts.push(arb_weirdo(i));
        }
        parts
    })
}

fn arb_warband() -> impl Strategy<Value = Warband> {
    (arb_name(), arb_ability(), prop_oneof![Just(75u32), Just(100u32)], arb_weirdos()).prop_map(
        |(name, ability, point_limit, weirdos)| Warband {
            id: WarbandId::new("wb"),
            name,
            ability,
            point_limit,
            total_cost: 0,
            weirdos,
            created_at: OffsetDateTime::UNIX_EPOCH,
            updated_at: OffsetDateTime::UNIX_EPOCH,
        },
    )
}

// ============================================================================
// Property tests: cost engine invariants
// ============================================================================

proptest! {
    /// A weapon discount never exceeds one point and never underflows.
    #[test]
    fn weapon_cost_is_clamped_and_bounded(
        weapon in prop_oneof![arb_weapon(WeaponKind::Close), arb_weapon(WeaponKind::Ranged)],
        ability in arb_ability(),
    ) {
        let rules = Ruleset::rulebook();
        let cost = weapon_cost(&weapon, ability, &rules);
        prop_assert!(cost <= weapon.cost);
        prop_assert!(cost >= weapon.cost.saturating_sub(1));
    }

    /// Equipment is either free (Soldiers + standard issue) or full price.
    #[test]
    fn equipment_cost_is_base_or_zero(equipment in arb_equipment(), ability in arb_ability()) {
        let rules = Ruleset::rulebook();
        let cost = equipment_cost(&equipment, ability, &rules);
        prop_assert!(cost == 0 || cost == equipment.cost);
        if ability != Some(Ability::Soldiers) {
            prop_assert_eq!(cost, equipment.cost);
        }
    }

    /// Psychic power costs are never modified by any ability.
    #[test]
    fn psychic_power_cost_is_always_base(power in arb_psychic_power()) {
        prop_assert_eq!(psychic_power_cost(&power), power.cost);
    }

    /// A weirdo's total is exactly the sum of its parts, for every ability.
    #[test]
    fn weirdo_cost_decomposes_into_components(weirdo in arb_weirdo(0), ability in arb_ability()) {
        let rules = Ruleset::rulebook();

        let attrs: u32 = weirdo
            .attributes
            .as_ref()
            .map(|a| attributes_cost(a, ability, &rules))
            .unwrap_or(0);
        let weapons: u32 = weirdo
            .close_combat_weapons
            .iter()
            .chain(&weirdo.ranged_weapons)
            .map(|w| weapon_cost(w, ability, &rules))
            .sum();
        let equipment: u32 = weirdo
            .equipment
            .iter()
            .map(|e| equipment_cost(e, ability, &rules))
            .sum();
        let powers: u32 = weirdo.psychic_powers.iter().map(psychic_power_cost).sum();

        prop_assert_eq!(
            weirdo_cost(&weirdo, ability, &rules),
            attrs + weapons + equipment + powers
        );
    }

    /// A warband's total is exactly the sum of its weirdos' totals.
    #[test]
    fn warband_cost_is_sum_of_weirdo_costs(warband in arb_warband()) {
        let rules = Ruleset::rulebook();
        let expected: u32 = warband
            .weirdos
            .iter()
            .map(|w| weirdo_cost(w, warband.ability, &rules))
            .sum();
        prop_assert_eq!(warband_cost(&warband, &rules), expected);
    }

    /// Repeated cost computation on unchanged input is identical.
    #[test]
    fn weirdo_cost_is_idempotent(weirdo in arb_weirdo(0), ability in arb_ability()) {
        let rules = Ruleset::rulebook();
        prop_assert_eq!(
            weirdo_cost(&weirdo, ability, &rules),
            weirdo_cost(&weirdo, ability, &rules)
        );
    }
}

// ============================================================================
// Property tests: validation invariants
// ============================================================================

proptest! {
    /// Identical input produces an identical report on repeated calls.
    #[test]
    fn evaluate_is_deterministic(warband in arb_warband()) {
        let rules = Ruleset::rulebook();
        let first = evaluate(&warband, &rules);
        let second = evaluate(&warband, &rules);
        prop_assert_eq!(first, second);
    }

    /// The valid flag reflects errors only, never warnings.
    #[test]
    fn valid_flag_tracks_errors_exactly(warband in arb_warband()) {
        let rules = Ruleset::rulebook();
        let report = evaluate(&warband, &rules);
        prop_assert_eq!(report.valid, report.errors.is_empty());
        prop_assert_eq!(report.counts.errors as usize, report.errors.len());
        prop_assert_eq!(report.counts.warnings as usize, report.warnings.len());
    }

    /// Cached totals on the model never influence the verdict.
    #[test]
    fn stale_cached_totals_do_not_change_the_report(
        warband in arb_warband(),
        fake_total in any::<u32>(),
    ) {
        let rules = Ruleset::rulebook();
        let baseline = evaluate(&warband, &rules);

        let mut tampered = warband;
        tampered.total_cost = fake_total;
        for weirdo in &mut tampered.weirdos {
            weirdo.total_cost = fake_total;
        }
        prop_assert_eq!(evaluate(&tampered, &rules), baseline);
    }

    /// Per-weirdo validation is idempotent.
    #[test]
    fn validate_weirdo_is_idempotent(warband in arb_warband()) {
        let rules = Ruleset::rulebook();
        for weirdo in &warband.weirdos {
            let first = validate_weirdo(weirdo, &warband, &rules);
            let second = validate_weirdo(weirdo, &warband, &rules);
            prop_assert_eq!(first, second);
        }
    }

    /// Findings in a report never carry a severity that contradicts the
    /// list they landed in.
    #[test]
    fn report_lists_are_severity_partitioned(warband in arb_warband()) {
        use warband_types::Severity;
        let rules = Ruleset::rulebook();
        let report = evaluate(&warband, &rules);
        prop_assert!(report.errors.iter().all(|f| f.severity == Severity::Error));
        prop_assert!(report.warnings.iter().all(|f| f.severity == Severity::Warning));
    }
}

use warband_types::{Ability, Dice, Firepower, Role, Speed};

/// Base point costs for each attribute slot, indexed by level.
///
/// Defense, prowess, and willpower share one dice table; speed and firepower
/// have their own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeCosts {
    /// Indexed by [`Speed`]: 1, 2, 3.
    pub speed: [u32; 3],
    /// Indexed by [`Dice`]: 2d6, 2d8, 2d10.
    pub dice: [u32; 3],
    /// Indexed by [`Firepower`]: None, 2d8, 2d10.
    pub firepower: [u32; 3],
}

impl AttributeCosts {
    pub fn speed(&self, level: Speed) -> u32 {
        self.speed[level as usize]
    }

    pub fn dice(&self, level: Dice) -> u32 {
        self.dice[level as usize]
    }

    pub fn firepower(&self, level: Firepower) -> u32 {
        self.firepower[level as usize]
    }
}

/// The full rule configuration both engines evaluate against.
///
/// Injected rather than hard-coded so house-rule variants are a config
/// change, not a code change. `rulebook()` carries the published values;
/// the settings crate layers TOML overrides on top of it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ruleset {
    pub attribute_costs: AttributeCosts,

    /// Close weapons the Mutants ability discounts.
    pub natural_weapons: Vec<String>,
    /// Equipment the Soldiers ability makes free.
    pub standard_issue: Vec<String>,

    pub mutant_speed_discount: u32,
    pub heavily_armed_discount: u32,
    pub natural_weapon_discount: u32,

    /// Normal trooper ceiling, and the relaxed ceiling for the one
    /// premium-slot trooper per warband.
    pub trooper_point_limit: u32,
    pub premium_trooper_point_limit: u32,
    /// A trooper within this many points of its ceiling gets a warning.
    pub point_limit_warning_margin: u32,

    pub allowed_point_limits: Vec<u32>,

    pub leader_equipment_limit: usize,
    pub trooper_equipment_limit: usize,
    /// Extra equipment slots granted to every role under Cyborgs.
    pub cyborg_equipment_bonus: usize,
}

impl Ruleset {
    /// The published rulebook values.
    pub fn rulebook() -> Self {
        Self {
            attribute_costs: AttributeCosts {
                speed: [0, 2, 4],
                dice: [2, 4, 6],
                firepower: [0, 4, 6],
            },
            natural_weapons: vec![
                "Claws & Teeth".to_string(),
                "Horns".to_string(),
                "Tail".to_string(),
                "Tentacles".to_string(),
            ],
            standard_issue: vec![
                "Ammo Pack".to_string(),
                "Grenades".to_string(),
                "Medkit".to_string(),
            ],
            mutant_speed_discount: 1,
            heavily_armed_discount: 1,
            natural_weapon_discount: 1,
            trooper_point_limit: 20,
            premium_trooper_point_limit: 25,
            point_limit_warning_margin: 3,
            allowed_point_limits: vec![75, 100],
            leader_equipment_limit: 2,
            trooper_equipment_limit: 1,
            cyborg_equipment_bonus: 1,
        }
    }

    pub fn is_natural_weapon(&self, name: &str) -> bool {
        self.natural_weapons.iter().any(|n| n == name)
    }

    pub fn is_standard_issue(&self, name: &str) -> bool {
        self.standard_issue.iter().any(|n| n == name)
    }

    pub fn is_allowed_point_limit(&self, limit: u32) -> bool {
        self.allowed_point_limits.contains(&limit)
    }

    /// Equipment slots available to `role` under `ability`.
    pub fn equipment_limit(&self, role: Role, ability: Option<Ability>) -> usize {
        let base = match role {
            Role::Leader => self.leader_equipment_limit,
            Role::Trooper => self.trooper_equipment_limit,
        };
        if ability == Some(Ability::Cyborgs) {
            base + self.cyborg_equipment_bonus
        } else {
            base
        }
    }

    /// The cost range that claims the warband's single premium slot.
    pub fn is_premium_cost(&self, cost: u32) -> bool {
        cost > self.trooper_point_limit && cost <= self.premium_trooper_point_limit
    }
}

impl Default for Ruleset {
    fn default() -> Self {
        Self::rulebook()
    }
}

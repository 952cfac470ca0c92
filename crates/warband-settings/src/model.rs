use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `warband.toml` schema v1.
///
/// This is a *user-facing* config model: every field is optional so a house
/// rules file only states what it changes from the preset.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RulesetConfigV1 {
    /// Optional schema string for tooling (`warband.ruleset.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Preset to start from; `rulebook` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_costs: Option<AttributeCostsConfig>,

    /// Close weapons the Mutants ability discounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub natural_weapons: Option<Vec<String>>,

    /// Equipment the Soldiers ability makes free.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard_issue: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mutant_speed_discount: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heavily_armed_discount: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub natural_weapon_discount: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trooper_point_limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premium_trooper_point_limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_limit_warning_margin: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_point_limits: Option<Vec<u32>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leader_equipment_limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trooper_equipment_limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cyborg_equipment_bonus: Option<u32>,
}

/// Per-table overrides; each array replaces the whole table when present.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AttributeCostsConfig {
    /// Costs for speed 1, 2, 3.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<[u32; 3]>,

    /// Costs for 2d6, 2d8, 2d10 (defense, prowess, willpower).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dice: Option<[u32; 3]>,

    /// Costs for firepower None, 2d8, 2d10.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firepower: Option<[u32; 3]>,
}

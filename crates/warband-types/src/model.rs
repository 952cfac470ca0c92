use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Speed attribute level. Serialized as the rulebook's literal values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Speed {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
}

/// Dice attribute level used by defense, prowess, and willpower.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Dice {
    #[serde(rename = "2d6")]
    D6,
    #[serde(rename = "2d8")]
    D8,
    #[serde(rename = "2d10")]
    D10,
}

/// Firepower attribute level. `None` means the model cannot shoot at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Firepower {
    #[serde(rename = "None")]
    None,
    #[serde(rename = "2d8")]
    D8,
    #[serde(rename = "2d10")]
    D10,
}

impl Firepower {
    /// Whether this level obliges the weirdo to carry a ranged weapon.
    pub fn requires_ranged_weapon(self) -> bool {
        matches!(self, Firepower::D8 | Firepower::D10)
    }
}

/// The five attribute slots of a weirdo.
///
/// Slots are individually nullable: rosters arrive from interactive editors
/// and a half-filled attribute block is ordinary input, not a defect.
/// Validation reports it as incomplete.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Attributes {
    #[serde(default)]
    pub speed: Option<Speed>,
    #[serde(default)]
    pub defense: Option<Dice>,
    #[serde(default)]
    pub firepower: Option<Firepower>,
    #[serde(default)]
    pub prowess: Option<Dice>,
    #[serde(default)]
    pub willpower: Option<Dice>,
}

impl Attributes {
    pub fn is_complete(&self) -> bool {
        self.speed.is_some()
            && self.defense.is_some()
            && self.firepower.is_some()
            && self.prowess.is_some()
            && self.willpower.is_some()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum WeaponKind {
    Close,
    Ranged,
}

/// Catalog weapon, copied by value into a weirdo's weapon lists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Weapon {
    pub name: String,
    pub kind: WeaponKind,
    pub cost: u32,
    pub max_actions: u8,
    #[serde(default)]
    pub notes: String,
}

/// Catalog equipment item, copied by value into a weirdo's equipment list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Equipment {
    pub name: String,
    pub category: String,
    pub cost: u32,
}

/// Catalog psychic power. Cost is never modified by any warband ability.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PsychicPower {
    pub name: String,
    pub category: String,
    pub cost: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Leader,
    Trooper,
}

/// Warband-wide ability modifier.
///
/// Only `Mutants`, `HeavilyArmed`, `Soldiers`, and `Cyborgs` alter costs or
/// limits; the rest exist so real rosters deserialize and are inert in the
/// engines (their effects are on-table, not on the points sheet).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Ability {
    Cyborgs,
    Fanatics,
    #[serde(rename = "Heavily Armed")]
    HeavilyArmed,
    Mutants,
    Psychics,
    Soldiers,
    #[serde(rename = "Speed Freaks")]
    SpeedFreaks,
}

/// Opaque weirdo identifier (assigned by the persistence layer).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct WeirdoId(String);

impl WeirdoId {
    pub fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Opaque warband identifier (assigned by the persistence layer).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct WarbandId(String);

impl WarbandId {
    pub fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One model in the roster.
///
/// `total_cost` is a cached, derived value the orchestration layer refreshes
/// after every mutation. The engines never read it; they recompute.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Weirdo {
    pub id: WeirdoId,
    pub name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
    #[serde(default)]
    pub close_combat_weapons: Vec<Weapon>,
    #[serde(default)]
    pub ranged_weapons: Vec<Weapon>,
    #[serde(default)]
    pub equipment: Vec<Equipment>,
    #[serde(default)]
    pub psychic_powers: Vec<PsychicPower>,
    /// Leader-only trait; must be absent on troopers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leader_trait: Option<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub total_cost: u32,
}

impl Weirdo {
    /// A fresh weirdo: zero cost, empty collections.
    pub fn new(id: WeirdoId, name: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            name: name.into(),
            role,
            attributes: None,
            close_combat_weapons: Vec::new(),
            ranged_weapons: Vec::new(),
            equipment: Vec::new(),
            psychic_powers: Vec::new(),
            leader_trait: None,
            notes: String::new(),
            total_cost: 0,
        }
    }
}

/// The top-level roster.
///
/// `total_cost` is cached and advisory, same as on `Weirdo`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Warband {
    pub id: WarbandId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ability: Option<Ability>,
    pub point_limit: u32,
    #[serde(default)]
    pub total_cost: u32,
    #[serde(default)]
    pub weirdos: Vec<Weirdo>,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

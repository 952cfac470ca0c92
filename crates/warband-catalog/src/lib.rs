//! The fixed rulebook catalog.
//!
//! Central static metadata: every weapon, equipment item, and psychic power
//! a weirdo can take, with base costs. The engines never read this crate;
//! they only see the items already copied onto a weirdo. The CRUD layer
//! uses it to populate pickers, and tests use it for realistic fixtures.

#![forbid(unsafe_code)]

use warband_types::{Equipment, PsychicPower, Weapon, WeaponKind};

/// Catalog weapon entry. `to_weapon` copies it into the owned DTO the
/// roster model stores.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeaponEntry {
    pub name: &'static str,
    pub kind: WeaponKind,
    pub cost: u32,
    pub max_actions: u8,
    pub notes: &'static str,
}

impl WeaponEntry {
    pub fn to_weapon(&self) -> Weapon {
        Weapon {
            name: self.name.to_string(),
            kind: self.kind,
            cost: self.cost,
            max_actions: self.max_actions,
            notes: self.notes.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EquipmentEntry {
    pub name: &'static str,
    pub category: &'static str,
    pub cost: u32,
}

impl EquipmentEntry {
    pub fn to_equipment(&self) -> Equipment {
        Equipment {
            name: self.name.to_string(),
            category: self.category.to_string(),
            cost: self.cost,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PsychicPowerEntry {
    pub name: &'static str,
    pub category: &'static str,
    pub cost: u32,
}

impl PsychicPowerEntry {
    pub fn to_psychic_power(&self) -> PsychicPower {
        PsychicPower {
            name: self.name.to_string(),
            category: self.category.to_string(),
            cost: self.cost,
        }
    }
}

const fn close(name: &'static str, cost: u32, max_actions: u8, notes: &'static str) -> WeaponEntry {
    WeaponEntry {
        name,
        kind: WeaponKind::Close,
        cost,
        max_actions,
        notes,
    }
}

const fn ranged(name: &'static str, cost: u32, max_actions: u8, notes: &'static str) -> WeaponEntry {
    WeaponEntry {
        name,
        kind: WeaponKind::Ranged,
        cost,
        max_actions,
        notes,
    }
}

pub const CLOSE_WEAPONS: &[WeaponEntry] = &[
    close("Unarmed", 0, 1, "Fists, feet, and desperation."),
    close("Claws & Teeth", 1, 2, "Natural weapons; Mutants take these cheap."),
    close("Horns", 1, 1, "Natural weapon; devastating on the charge."),
    close("Tail", 1, 1, "Natural weapon; strikes behind the model."),
    close("Tentacles", 2, 2, "Natural weapon; may attack two targets."),
    close("Blade", 2, 2, ""),
    close("Chainblade", 3, 2, "Re-roll one miss per activation."),
    close("Power Weapon", 4, 2, "Ignores armor equipment."),
    close("Heavy Mace", 4, 1, "Slow; pushes the target back."),
];

pub const RANGED_WEAPONS: &[WeaponEntry] = &[
    ranged("Thrown Rock", 0, 1, "Short range only."),
    ranged("Pistol", 2, 2, "Usable in close combat."),
    ranged("Shotgun", 3, 2, "Short range; hits hard."),
    ranged("Carbine", 3, 2, ""),
    ranged("Rifle", 4, 2, "Long range."),
    ranged("Grenade Launcher", 5, 1, "Small blast; one shot per activation."),
    ranged("Plasma Rifle", 6, 1, "Overheats on doubles."),
    ranged("Heavy Weapon", 6, 1, "May not move and fire."),
];

pub const EQUIPMENT: &[EquipmentEntry] = &[
    EquipmentEntry { name: "Ammo Pack", category: "supply", cost: 1 },
    EquipmentEntry { name: "Grenades", category: "supply", cost: 2 },
    EquipmentEntry { name: "Medkit", category: "supply", cost: 2 },
    EquipmentEntry { name: "Scanner", category: "tech", cost: 1 },
    EquipmentEntry { name: "Camo Cloak", category: "tech", cost: 2 },
    EquipmentEntry { name: "Shield", category: "armor", cost: 2 },
    EquipmentEntry { name: "Armor", category: "armor", cost: 3 },
    EquipmentEntry { name: "Jump Pack", category: "tech", cost: 3 },
];

pub const PSYCHIC_POWERS: &[PsychicPowerEntry] = &[
    PsychicPowerEntry { name: "Mind Blast", category: "offense", cost: 3 },
    PsychicPowerEntry { name: "Dominate", category: "offense", cost: 4 },
    PsychicPowerEntry { name: "Shield of Will", category: "defense", cost: 2 },
    PsychicPowerEntry { name: "Healing Touch", category: "defense", cost: 3 },
    PsychicPowerEntry { name: "Foresight", category: "utility", cost: 2 },
    PsychicPowerEntry { name: "Telekinesis", category: "utility", cost: 3 },
];

/// Look up a weapon by name across both kind tables.
pub fn weapon(name: &str) -> Option<&'static WeaponEntry> {
    CLOSE_WEAPONS
        .iter()
        .chain(RANGED_WEAPONS)
        .find(|entry| entry.name == name)
}

pub fn equipment(name: &str) -> Option<&'static EquipmentEntry> {
    EQUIPMENT.iter().find(|entry| entry.name == name)
}

pub fn psychic_power(name: &str) -> Option<&'static PsychicPowerEntry> {
    PSYCHIC_POWERS.iter().find(|entry| entry.name == name)
}

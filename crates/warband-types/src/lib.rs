//! Stable DTOs and IDs used across the warband workspace.
//!
//! This crate is intentionally boring:
//! - the roster/character data model as plain serializable data
//! - stable validation error codes
//! - the validation report envelope

#![forbid(unsafe_code)]

pub mod ids;
pub mod model;
pub mod report;

pub use model::{
    Ability, Attributes, Dice, Equipment, Firepower, PsychicPower, Role, Speed, Warband,
    WarbandId, Weapon, WeaponKind, Weirdo, WeirdoId,
};
pub use report::{Finding, ReportCounts, Severity, WarbandReport, WeirdoRef};

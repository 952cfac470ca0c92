//! Stable validation error codes.
//!
//! Codes are SCREAMING_SNAKE discriminators consumed by the API/UI layers;
//! renaming one is a breaking change.

// Warband-level
pub const CODE_WARBAND_NAME_REQUIRED: &str = "WARBAND_NAME_REQUIRED";
pub const CODE_INVALID_POINT_LIMIT: &str = "INVALID_POINT_LIMIT";
pub const CODE_WARBAND_ABILITY_REQUIRED: &str = "WARBAND_ABILITY_REQUIRED";
pub const CODE_WARBAND_POINT_LIMIT_EXCEEDED: &str = "WARBAND_POINT_LIMIT_EXCEEDED";
pub const CODE_MULTIPLE_25_POINT_WEIRDOS: &str = "MULTIPLE_25_POINT_WEIRDOS";

// Weirdo-level
pub const CODE_WEIRDO_NAME_REQUIRED: &str = "WEIRDO_NAME_REQUIRED";
pub const CODE_ATTRIBUTES_INCOMPLETE: &str = "ATTRIBUTES_INCOMPLETE";
pub const CODE_CLOSE_COMBAT_WEAPON_REQUIRED: &str = "CLOSE_COMBAT_WEAPON_REQUIRED";
pub const CODE_RANGED_WEAPON_REQUIRED: &str = "RANGED_WEAPON_REQUIRED";
pub const CODE_EQUIPMENT_LIMIT_EXCEEDED: &str = "EQUIPMENT_LIMIT_EXCEEDED";
pub const CODE_TROOPER_POINT_LIMIT_EXCEEDED: &str = "TROOPER_POINT_LIMIT_EXCEEDED";
pub const CODE_LEADER_TRAIT_INVALID: &str = "LEADER_TRAIT_INVALID";

// Warnings
pub const CODE_TROOPER_POINT_LIMIT_CLOSE: &str = "TROOPER_POINT_LIMIT_CLOSE";

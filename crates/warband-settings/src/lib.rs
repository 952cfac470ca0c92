//! Ruleset parsing and preset resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves ruleset
//! configuration provided as strings. The domain crate carries the rulebook
//! defaults; this crate layers house-rule overrides on top of them.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{AttributeCostsConfig, RulesetConfigV1};
pub use presets::preset;
pub use resolve::resolve_ruleset;

use warband_domain::rules::Ruleset;

/// Parse `warband.toml` (or equivalent) into a typed model.
pub fn parse_ruleset_toml(input: &str) -> anyhow::Result<RulesetConfigV1> {
    let cfg: RulesetConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Parse and resolve in one step: the common path for callers holding the
/// config file's contents.
pub fn load_ruleset(input: &str) -> anyhow::Result<Ruleset> {
    let cfg = parse_ruleset_toml(input)?;
    resolve_ruleset(cfg)
}

//! Pure roster rules evaluation (no IO).
//!
//! Input: a warband (or one weirdo plus its warband) and a ruleset.
//! Output: recomputed point costs and a list of structured findings.
//!
//! Both engines are total over well-formed input: cost computation has no
//! error path, and validation reports rule violations as data rather than
//! returning `Err`.

#![forbid(unsafe_code)]

pub mod cost;
pub mod rules;

pub mod checks;
mod engine;


#[cfg(test)]
mod proptest;

pub use engine::{evaluate, validate_weirdo};

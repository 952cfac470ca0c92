use crate::model::WeirdoId;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Severity is intentionally small: errors block save, warnings never do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// Which weirdo a finding concerns, when it concerns one at all.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WeirdoRef {
    pub id: WeirdoId,
    pub name: String,
}

/// One validation result: a rule that did not hold (or, for warnings, a
/// rule that is close to not holding).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    pub severity: Severity,

    /// Stable machine-readable code (see [`crate::ids`]).
    pub code: String,

    /// The roster/weirdo field the finding concerns (e.g. `"name"`,
    /// `"equipment"`). UI layers use this for inline placement.
    pub field: String,

    /// Absent for warband-level findings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weirdo: Option<WeirdoRef>,

    pub message: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReportCounts {
    pub errors: u32,
    pub warnings: u32,
}

/// Validation result for a whole warband.
///
/// `valid` reflects errors only; warnings are advisory and never block save.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WarbandReport {
    pub valid: bool,
    pub errors: Vec<Finding>,
    pub warnings: Vec<Finding>,
    pub counts: ReportCounts,
}

impl WarbandReport {
    /// Split a flat finding list into the report shape.
    pub fn from_findings(findings: Vec<Finding>) -> Self {
        let (errors, warnings): (Vec<_>, Vec<_>) = findings
            .into_iter()
            .partition(|f| f.severity == Severity::Error);
        let counts = ReportCounts {
            errors: errors.len() as u32,
            warnings: warnings.len() as u32,
        };
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
            counts,
        }
    }
}

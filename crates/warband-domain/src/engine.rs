use crate::checks;
use crate::rules::Ruleset;
use warband_types::{Finding, Severity, Warband, WarbandReport, Weirdo};

/// Validate one weirdo in the context of its warband.
///
/// Returns the flat finding list (errors and warnings mixed, deterministic
/// order). Callers that need the roster-wide rules as well should use
/// [`evaluate`].
pub fn validate_weirdo(weirdo: &Weirdo, warband: &Warband, rules: &Ruleset) -> Vec<Finding> {
    let mut findings = Vec::new();
    checks::run_weirdo(weirdo, warband, rules, &mut findings);
    findings.sort_by(compare_findings);
    findings
}

/// Validate a whole warband and assemble the report.
///
/// Costs are always recomputed from current contents; cached totals on the
/// model play no part in the verdict.
pub fn evaluate(warband: &Warband, rules: &Ruleset) -> WarbandReport {
    let mut findings = Vec::new();
    checks::run_warband(warband, rules, &mut findings);

    // Deterministic ordering before the error/warning split.
    findings.sort_by(compare_findings);

    WarbandReport::from_findings(findings)
}

fn compare_findings(a: &Finding, b: &Finding) -> std::cmp::Ordering {
    // Ordering priority:
    // 1) severity (error -> warning)
    // 2) weirdo id (warband-level findings first)
    // 3) code
    // 4) field
    // 5) message
    let severity_rank = |sev: Severity| match sev {
        Severity::Error => 0,
        Severity::Warning => 1,
    };
    let aw = a.weirdo.as_ref().map(|w| w.id.as_str()).unwrap_or("");
    let bw = b.weirdo.as_ref().map(|w| w.id.as_str()).unwrap_or("");

    severity_rank(a.severity)
        .cmp(&severity_rank(b.severity))
        .then(aw.cmp(bw))
        .then(a.code.cmp(&b.code))
        .then(a.field.cmp(&b.field))
        .then(a.message.cmp(&b.message))
}

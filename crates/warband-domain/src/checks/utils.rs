use warband_types::{Finding, Severity, Weirdo, WeirdoRef};

pub fn warband_error(code: &str, field: &str, message: String) -> Finding {
    Finding {
        severity: Severity::Error,
        code: code.to_string(),
        field: field.to_string(),
        weirdo: None,
        message,
    }
}

pub fn weirdo_error(code: &str, field: &str, weirdo: &Weirdo, message: String) -> Finding {
    Finding {
        severity: Severity::Error,
        code: code.to_string(),
        field: field.to_string(),
        weirdo: Some(weirdo_ref(weirdo)),
        message,
    }
}

pub fn weirdo_warning(code: &str, field: &str, weirdo: &Weirdo, message: String) -> Finding {
    Finding {
        severity: Severity::Warning,
        code: code.to_string(),
        field: field.to_string(),
        weirdo: Some(weirdo_ref(weirdo)),
        message,
    }
}

pub fn weirdo_ref(weirdo: &Weirdo) -> WeirdoRef {
    WeirdoRef {
        id: weirdo.id.clone(),
        name: weirdo.name.clone(),
    }
}

/// Display name for messages; editors routinely hold unnamed weirdos.
pub fn display_name(weirdo: &Weirdo) -> &str {
    let trimmed = weirdo.name.trim();
    if trimmed.is_empty() { "unnamed weirdo" } else { trimmed }
}

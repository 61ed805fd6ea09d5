/// Required-field check: whitespace-only input counts as empty
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Length in characters rather than bytes
pub fn char_count(value: &str) -> usize {
    value.chars().count()
}

/// Basic email syntax check: exactly one @, a non-empty local part and a dotted
/// domain made of non-empty labels.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return false;
    }

    let local_part = parts[0];
    let domain_part = parts[1];
    if local_part.is_empty() || !domain_part.contains('.') {
        return false;
    }

    let labels: Vec<&str> = domain_part.split('.').collect();
    let tld_ok = labels.last().is_some_and(|tld| tld.len() >= 2);
    tld_ok
        && labels.iter().all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_alphanumeric() || c == '-')
        })
}

pub fn input_class(error: Option<&str>) -> &'static str {
    match error {
        Some(_) => "input-field input-invalid",
        None => "input-field",
    }
}

// clean.rs
//
// Pure string cleanups applied to raw extracted fields. All three treat
// an empty input as a missing value, not an empty string, so downstream
// address concatenation and geocoding stay safe.

/// Remove every colon and whitespace character anywhere in the string.
pub fn clean_phone(raw: &str) -> Option<String> {
    if raw.is_empty() {
        return None;
    }
    let phone: String = raw
        .chars()
        .filter(|c| *c != ':' && !c.is_whitespace())
        .collect();
    if phone.is_empty() {
        None
    } else {
        Some(phone)
    }
}

/// Strip a leading run of whitespace, an optional hyphen, more whitespace,
/// then a leading colon with any whitespace after it.
pub fn clean_address(raw: &str) -> Option<String> {
    if raw.is_empty() {
        return None;
    }
    let mut rest = raw.trim_start();
    rest = rest.strip_prefix('-').unwrap_or(rest).trim_start();
    rest = rest.strip_prefix(':').unwrap_or(rest).trim_start();
    let address = rest.trim_end();
    if address.is_empty() {
        None
    } else {
        Some(address.to_string())
    }
}

/// Keep the part before the first colon, trimmed.
pub fn clean_name(raw: &str) -> Option<String> {
    if raw.is_empty() {
        return None;
    }
    let name = raw.split(':').next().unwrap_or("").trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Longest incident summary rendered before truncation.
pub const SUMMARY_MAX_CHARS: usize = 150;

const REGION_NAMES: [(&str, &str); 7] = [
    ("americas", "Americas"),
    ("europe", "Europe"),
    ("asiaPacific", "Asia Pacific"),
    ("middleEast", "Middle East"),
    ("africa", "Africa"),
    ("multiRegions", "Multi-regions"),
    ("global", "Global"),
];

/// Uppercase the first character, leave the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Clip to `SUMMARY_MAX_CHARS` characters, appending `...` only when something was cut.
///
/// Counts chars, not bytes, so multi-byte text never splits mid-codepoint.
pub fn truncate_summary(text: &str) -> String {
    match text.char_indices().nth(SUMMARY_MAX_CHARS) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Display name for an internal region code; unmapped codes pass through verbatim.
pub fn region_display_name(code: &str) -> &str {
    REGION_NAMES
        .iter()
        .find(|(k, _)| *k == code)
        .map(|(_, v)| *v)
        .unwrap_or(code)
}

/// Treat empty and whitespace-only strings as absent.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_handles_multibyte_first_char() {
        assert_eq!(capitalize_first("élevé"), "Élevé");
        assert_eq!(capitalize_first("ok then"), "Ok then");
    }

    #[test]
    fn truncation_counts_characters() {
        let s = "é".repeat(151);
        let out = truncate_summary(&s);
        assert_eq!(out.chars().count(), 153);
        assert!(out.ends_with("..."));
    }
}

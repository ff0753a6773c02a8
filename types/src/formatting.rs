//! Display-string helpers.
//!
//! All name shaping for the panel goes through this module so the overlay
//! and any future app surface render action names identically.

/// Trim the padding whitespace the client leaves in display strings.
///
/// # Examples
/// ```
/// use slotwatch_types::formatting::trim_name;
/// assert_eq!(trim_name("  Heavy Swing "), "Heavy Swing");
/// assert_eq!(trim_name("Cure"), "Cure");
/// ```
pub fn trim_name(name: &str) -> &str {
    name.trim()
}

/// Truncate a name to `max_chars`, adding "..." if truncated.
///
/// Operates on characters, not bytes, so multi-byte names never split
/// mid-codepoint.
///
/// # Examples
/// ```
/// use slotwatch_types::formatting::truncate_name;
/// assert_eq!(truncate_name("Fire", 10), "Fire");
/// assert_eq!(truncate_name("Sharpcast of the Ages", 10), "Sharpca...");
/// ```
pub fn truncate_name(name: &str, max_chars: usize) -> String {
    if name.chars().count() <= max_chars {
        name.to_string()
    } else {
        let truncated: String = name.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

//! Spell level extraction from note text.
//!
//! The note is free-form sheet prose ("Choose a 1st-level spell",
//! "Choose a cantrip"). The rules, in order:
//!
//! 1. A note mentioning "cantrip" (case-insensitive) is level 0.
//! 2. Otherwise the first integer in the text is the level.
//! 3. Neither → `None`, and no request is made for the card.

use std::sync::OnceLock;

use regex::Regex;

static LEVEL_RE: OnceLock<Regex> = OnceLock::new();

/// Extracts the spell level a note asks for, if any.
///
/// ## Example
/// ```rust
/// use outpost_grimoire::level::spell_level;
///
/// assert_eq!(spell_level("Choose a 1st-level spell"), Some(1));
/// assert_eq!(spell_level("Choose a cantrip"), Some(0));
/// assert_eq!(spell_level("Choose damage type"), None);
/// ```
pub fn spell_level(note: &str) -> Option<u32> {
    if note.to_lowercase().contains("cantrip") {
        return Some(0);
    }

    let re = LEVEL_RE.get_or_init(|| Regex::new(r"\d+").expect("level pattern is valid"));
    re.find(note)?.as_str().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_levels() {
        assert_eq!(spell_level("Choose a 1st-level spell"), Some(1));
        assert_eq!(spell_level("Choose a 2nd-level spell"), Some(2));
        assert_eq!(spell_level("Choose a 3rd level spell"), Some(3));
    }

    #[test]
    fn test_cantrip_is_level_zero() {
        assert_eq!(spell_level("Choose a cantrip"), Some(0));
        assert_eq!(spell_level("Choose a Cantrip"), Some(0));
    }

    #[test]
    fn test_cantrip_beats_digits() {
        // "cantrip" is checked before any integer in the text.
        assert_eq!(spell_level("Choose 1 cantrip"), Some(0));
    }

    #[test]
    fn test_first_integer_wins() {
        assert_eq!(spell_level("Choose a 2nd-level spell (max 3 uses)"), Some(2));
    }

    #[test]
    fn test_no_level_means_no_request() {
        assert_eq!(spell_level("Choose damage type"), None);
        assert_eq!(spell_level(""), None);
    }
}

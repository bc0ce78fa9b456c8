//! # Cost Module
//!
//! Provides the `Cost` type: the tagged representation of a raw catalog
//! cost cell.
//!
//! ## The Raw Cell Problem
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  WHAT THE "Cost (GP)" COLUMN ACTUALLY CONTAINS                          │
//! │                                                                         │
//! │    "50"        → a plain number                                         │
//! │    "1,500"     → thousands separators                                   │
//! │    "Varies"    → no fixed price at all                                  │
//! │    ""          → somebody left the cell blank                           │
//! │                                                                         │
//! │  OUR SOLUTION: one tagged value, one conversion boundary                │
//! │    Cost::parse is the ONLY place raw text becomes a price               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use outpost_core::cost::Cost;
//!
//! assert_eq!(Cost::parse("1,500").amount(), 1500.0);
//! assert_eq!(Cost::parse("Varies").amount(), 0.0);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{VARIES_LABEL, VARIES_SORT_CEILING, VARIES_SORT_FLOOR};
use crate::query::SortDir;

// =============================================================================
// Cost Type
// =============================================================================

/// The price of a catalog item in gold pieces.
///
/// ## Variants
/// - `Numeric(gp)`: a concrete price. Zero is legal (and renders as
///   "Varies", see [`display_gp`]).
/// - `Unknown`: the literal "Varies" token. Prices as zero, sorts at the
///   expensive extreme in both directions.
///
/// Anything else in the raw cell (including blanks) parses as
/// `Numeric(0.0)`: it prices and sorts as zero, matching the historical
/// behavior of the shop sheet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Cost {
    Numeric(f64),
    Unknown,
}

impl Cost {
    /// Parses a raw cost cell. This is the sole conversion boundary from
    /// raw text to a price.
    ///
    /// ## Example
    /// ```rust
    /// use outpost_core::cost::Cost;
    ///
    /// assert_eq!(Cost::parse("50"), Cost::Numeric(50.0));
    /// assert_eq!(Cost::parse("1,500"), Cost::Numeric(1500.0));
    /// assert_eq!(Cost::parse("Varies"), Cost::Unknown);
    /// assert_eq!(Cost::parse("n/a"), Cost::Numeric(0.0));
    /// ```
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw == VARIES_LABEL {
            return Cost::Unknown;
        }

        let stripped: String = raw.chars().filter(|c| *c != ',').collect();
        match stripped.parse::<f64>() {
            Ok(gp) if gp.is_finite() => Cost::Numeric(gp),
            _ => Cost::Numeric(0.0),
        }
    }

    /// The amount used for pricing. `Unknown` contributes zero.
    #[inline]
    pub fn amount(&self) -> f64 {
        match self {
            Cost::Numeric(gp) => *gp,
            Cost::Unknown => 0.0,
        }
    }

    /// The effective amount used when sorting the catalog.
    ///
    /// `Unknown` lands at the expensive extreme regardless of direction:
    /// past every priced row ascending, past every priced row descending.
    pub fn sort_key(&self, dir: SortDir) -> f64 {
        match self {
            Cost::Numeric(gp) => *gp,
            Cost::Unknown => match dir {
                SortDir::Asc => VARIES_SORT_CEILING,
                SortDir::Desc => VARIES_SORT_FLOOR,
            },
        }
    }

    #[inline]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Cost::Unknown)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", display_gp(self.amount()))
    }
}

// =============================================================================
// Display Formatting
// =============================================================================

/// Renders a final price for the card footer.
///
/// Positive amounts are grouped with thousands separators; zero renders
/// the "Varies" label. A free item is indistinguishable from a
/// variable-cost item here - that ambiguity is inherited from the shop
/// sheet and kept.
///
/// ## Example
/// ```rust
/// use outpost_core::cost::display_gp;
///
/// assert_eq!(display_gp(1500.0), "1,500");
/// assert_eq!(display_gp(400.5), "400.5");
/// assert_eq!(display_gp(0.0), "Varies");
/// ```
pub fn display_gp(amount: f64) -> String {
    if amount <= 0.0 {
        return VARIES_LABEL.to_string();
    }
    format_gp(amount)
}

/// Groups an amount with thousands separators, no "Varies" rule.
///
/// Used for running totals, where zero really means zero.
pub fn format_gp(amount: f64) -> String {
    // Up to three fractional digits, trailing zeros dropped.
    let fixed = format!("{:.3}", amount);
    let (digits, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let frac = frac.trim_end_matches('0');
    if !frac.is_empty() {
        grouped.push('.');
        grouped.push_str(frac);
    }

    grouped
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_number() {
        assert_eq!(Cost::parse("50"), Cost::Numeric(50.0));
        assert_eq!(Cost::parse(" 750 "), Cost::Numeric(750.0));
    }

    #[test]
    fn test_parse_thousands_separators() {
        assert_eq!(Cost::parse("1,500"), Cost::Numeric(1500.0));
        assert_eq!(Cost::parse("25,000"), Cost::Numeric(25000.0));
    }

    #[test]
    fn test_parse_varies_token() {
        assert_eq!(Cost::parse("Varies"), Cost::Unknown);
        assert_eq!(Cost::parse("  Varies  "), Cost::Unknown);
        // Case matters: only the exact token is Unknown.
        assert_eq!(Cost::parse("varies"), Cost::Numeric(0.0));
    }

    #[test]
    fn test_parse_garbage_is_zero() {
        assert_eq!(Cost::parse(""), Cost::Numeric(0.0));
        assert_eq!(Cost::parse("n/a"), Cost::Numeric(0.0));
        assert_eq!(Cost::parse("ask Igor"), Cost::Numeric(0.0));
    }

    #[test]
    fn test_amount() {
        assert_eq!(Cost::Numeric(400.0).amount(), 400.0);
        assert_eq!(Cost::Unknown.amount(), 0.0);
    }

    #[test]
    fn test_sort_key_extremes() {
        assert_eq!(Cost::Unknown.sort_key(SortDir::Asc), 999_999.0);
        assert_eq!(Cost::Unknown.sort_key(SortDir::Desc), -1.0);
        assert_eq!(Cost::Numeric(75.0).sort_key(SortDir::Asc), 75.0);
        assert_eq!(Cost::Numeric(75.0).sort_key(SortDir::Desc), 75.0);
    }

    #[test]
    fn test_display_gp_grouping() {
        assert_eq!(display_gp(5.0), "5");
        assert_eq!(display_gp(400.0), "400");
        assert_eq!(display_gp(1500.0), "1,500");
        assert_eq!(display_gp(1234567.0), "1,234,567");
    }

    #[test]
    fn test_display_gp_zero_is_varies() {
        assert_eq!(display_gp(0.0), "Varies");
    }

    #[test]
    fn test_display_gp_fractional() {
        assert_eq!(display_gp(400.5), "400.5");
        assert_eq!(display_gp(10.25), "10.25");
    }

    #[test]
    fn test_format_gp_keeps_zero_as_zero() {
        assert_eq!(format_gp(0.0), "0");
        assert_eq!(format_gp(1500.0), "1,500");
    }
}

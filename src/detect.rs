//! Card type detection using an ordered prefix-pattern table.
//!
//! Each network is described by a regular expression anchored at the start of
//! the digit string. Patterns are tested in table order and the first match
//! wins, so the table is a plain ordered slice rather than a map.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::card::CardType;

/// A single entry of the prefix table.
#[derive(Debug)]
pub struct CardTypePattern {
    card_type: CardType,
    regex: Regex,
}

impl CardTypePattern {
    fn new(card_type: CardType, pattern: &str) -> Self {
        Self {
            card_type,
            regex: Regex::new(pattern).expect("Valid card prefix pattern"),
        }
    }

    /// The label this entry reports on a match.
    #[inline]
    pub fn card_type(&self) -> CardType {
        self.card_type
    }

    /// The anchored prefix expression.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Returns true if `digits` starts with this entry's prefix.
    #[inline]
    pub fn matches(&self, digits: &str) -> bool {
        self.regex.is_match(digits)
    }
}

// Order is significant. Do not sort.
static CARD_TYPE_PATTERNS: Lazy<Vec<CardTypePattern>> = Lazy::new(|| {
    vec![
        CardTypePattern::new(CardType::Visa, r"^4"),
        CardTypePattern::new(CardType::MasterCard, r"^5[1-5]"),
        CardTypePattern::new(CardType::Amex, r"^3[47]"),
        CardTypePattern::new(CardType::Discover, r"^(?:6011|65)"),
        CardTypePattern::new(CardType::DinersClub, r"^(?:30[0-5]|3[68])"),
        CardTypePattern::new(CardType::Jcb, r"^(?:2131|1800|35)"),
    ]
});

/// Returns the prefix table in evaluation order.
pub fn card_type_patterns() -> &'static [CardTypePattern] {
    &CARD_TYPE_PATTERNS
}

/// Detects the card type from a digit string.
///
/// Works on partial input: too few digits to reach a prefix simply yields
/// `CardType::Unknown` until more arrive.
///
/// # Example
///
/// ```
/// use card_field::detect::detect_card_type;
/// use card_field::CardType;
///
/// assert_eq!(detect_card_type("4111111111111111"), CardType::Visa);
/// assert_eq!(detect_card_type("3714496353984"), CardType::Amex);
/// assert_eq!(detect_card_type("3"), CardType::Unknown);
/// ```
pub fn detect_card_type(digits: &str) -> CardType {
    card_type_patterns()
        .iter()
        .find(|pattern| pattern.matches(digits))
        .map_or(CardType::Unknown, CardTypePattern::card_type)
}

//! Core types shared by every stage of the input pipeline.
//!
//! This module provides the `CardType` enum for identifying card networks,
//! the `Validity` tri-state reported to the caller, and the length limits
//! that govern clamping and checksum evaluation.

use std::fmt;

use crate::luhn;

/// Maximum number of digits kept from user input.
///
/// Anything typed or pasted beyond this is silently dropped.
pub const MAX_CARD_DIGITS: usize = 19;

/// Number of digits at which the Luhn checksum starts being reported.
///
/// Below this the field is `Validity::Unknown`, so partially typed numbers
/// never flash as invalid.
pub const MIN_VALIDATION_DIGITS: usize = 13;

/// Card networks recognized from the leading digits of a number.
///
/// The set is closed: anything the prefix table does not match is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardType {
    /// Visa - Prefix 4
    Visa,
    /// MasterCard - Prefix 51-55
    MasterCard,
    /// American Express - Prefix 34, 37
    Amex,
    /// Discover - Prefix 6011, 65
    Discover,
    /// Diners Club - Prefix 300-305, 36, 38
    DinersClub,
    /// JCB - Prefix 2131, 1800, 35
    Jcb,
    /// No prefix rule matched (including empty input).
    #[default]
    Unknown,
}

impl CardType {
    /// Every label, in prefix-table order followed by `Unknown`.
    pub const ALL: [CardType; 7] = [
        Self::Visa,
        Self::MasterCard,
        Self::Amex,
        Self::Discover,
        Self::DinersClub,
        Self::Jcb,
        Self::Unknown,
    ];

    /// Returns the display label for the card network.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::MasterCard => "MasterCard",
            Self::Amex => "American Express",
            Self::Discover => "Discover",
            Self::DinersClub => "Diners Club",
            Self::Jcb => "JCB",
            Self::Unknown => "Unknown",
        }
    }

    /// Returns true for every label except `Unknown`.
    #[inline]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Checksum state of the field.
///
/// Recomputed from scratch on every edit, never carried over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Validity {
    /// Too few digits to judge.
    #[default]
    Unknown,
    /// The Luhn checksum passes.
    Valid,
    /// The Luhn checksum fails.
    Invalid,
}

impl Validity {
    /// Derives the validity of a digit string.
    ///
    /// Strings shorter than [`MIN_VALIDATION_DIGITS`] are `Unknown` no matter
    /// what their checksum says.
    ///
    /// # Example
    ///
    /// ```
    /// use card_field::Validity;
    ///
    /// assert_eq!(Validity::from_digits("4111"), Validity::Unknown);
    /// assert_eq!(Validity::from_digits("4532015112830366"), Validity::Valid);
    /// assert_eq!(Validity::from_digits("4532015112830367"), Validity::Invalid);
    /// ```
    pub fn from_digits(digits: &str) -> Self {
        if digits.len() < MIN_VALIDATION_DIGITS {
            Self::Unknown
        } else if luhn::is_luhn_valid(digits) {
            Self::Valid
        } else {
            Self::Invalid
        }
    }

    /// Returns `Some(true)`/`Some(false)` once known, `None` otherwise.
    #[inline]
    pub const fn as_option(&self) -> Option<bool> {
        match self {
            Self::Unknown => None,
            Self::Valid => Some(true),
            Self::Invalid => Some(false),
        }
    }

    /// Lowercase name used by the CLI and WASM bindings.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Valid => "valid",
            Self::Invalid => "invalid",
        }
    }
}

impl fmt::Display for Validity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

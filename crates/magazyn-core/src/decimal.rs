//! Exact decimal parsing and display-time quantization.
//!
//! Quantities and prices are [`Decimal`] values end to end. User input
//! enters the system as text and is parsed here; floats are not accepted
//! as a source type anywhere, so binary floating-point rounding error
//! cannot leak into a stored value.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;
use thiserror::Error;

/// Error returned when text cannot be read as an exact decimal numeral.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid decimal input: {input}")]
pub struct ValidationError {
    /// The rejected input, verbatim.
    pub input: String,
}

impl ValidationError {
    /// Create a validation error for the given input.
    #[must_use]
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

/// Parse a decimal literal.
///
/// Accepts plain decimal numerals (optional sign, optional fractional
/// part) after trimming surrounding whitespace. Blank input, scientific
/// notation, and anything else [`Decimal`] cannot represent exactly are
/// rejected.
///
/// # Example
///
/// ```
/// use magazyn_core::parse_decimal;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(parse_decimal("2.30").unwrap(), dec!(2.30));
/// assert!(parse_decimal("2,30").is_err());
/// assert!(parse_decimal("").is_err());
/// ```
pub fn parse_decimal(input: &str) -> Result<Decimal, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(input));
    }
    Decimal::from_str(trimmed).map_err(|_| ValidationError::new(input))
}

/// Round to exactly `dp` fractional digits with half-up tie-breaking.
///
/// Ties round away from zero, matching the conventional half-up rule for
/// money display, and the result always carries `dp` fractional digits
/// (`7` quantized to 2 renders as `7.00`). Internal totals are kept
/// unrounded; this is applied only when rendering.
#[must_use]
pub fn quantize(value: Decimal, dp: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    rounded
}

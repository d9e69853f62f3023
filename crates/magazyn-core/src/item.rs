//! The stocked-good record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{parse_decimal, ValidationError};

/// A stocked good: name, quantity on hand, unit of measure, unit price.
///
/// Identity within a collection is the case-insensitive name; uniqueness
/// is enforced by [`Warehouse::add`](crate::Warehouse::add) merging on
/// name, not by construction. The field names double as the persisted CSV
/// header and JSON keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Display name.
    pub name: String,
    /// Quantity on hand, in `unit`s.
    pub quantity: Decimal,
    /// Unit of measure (L, kg, pcs, ...).
    pub unit: String,
    /// Price per unit.
    pub unit_price: Decimal,
}

impl Item {
    /// Create an item from already-parsed decimals.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        quantity: Decimal,
        unit: impl Into<String>,
        unit_price: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
            unit_price,
        }
    }

    /// Create an item, coercing the numeric fields from text.
    ///
    /// Rejects malformed numerals with [`ValidationError`]; this is the
    /// constructor for raw user input.
    pub fn from_text(
        name: impl Into<String>,
        quantity: &str,
        unit: impl Into<String>,
        unit_price: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self::new(
            name,
            parse_decimal(quantity)?,
            unit,
            parse_decimal(unit_price)?,
        ))
    }

    /// Case-insensitive name match.
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// quantity × unit price, unrounded.
    #[must_use]
    pub fn value(&self) -> Decimal {
        self.quantity * self.unit_price
    }
}

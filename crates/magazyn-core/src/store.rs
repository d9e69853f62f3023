//! The warehouse store: current stock and the cumulative sales ledger.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::item::Item;

/// Outcome of [`Warehouse::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new row was appended to the stock.
    Added,
    /// An existing row with the same name was updated in place.
    Updated,
}

/// Expected failure modes of [`Warehouse::sell`].
///
/// These are ordinary outcomes of user input; the shell reports them as
/// soft single-line messages and keeps running.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SellError {
    /// No stocked item carries the requested name.
    #[error("no such item: {name}")]
    NotFound {
        /// The name as the user typed it.
        name: String,
    },
    /// The stock does not cover the requested quantity.
    #[error("not enough {name} in stock: requested {requested}, available {available}")]
    InsufficientStock {
        /// The stored item name.
        name: String,
        /// Units requested.
        requested: Decimal,
        /// Units currently in stock.
        available: Decimal,
    },
}

/// Receipt for a completed sale, used for the confirmation message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SellReceipt {
    /// The item name as stored (not as typed).
    pub name: String,
    /// Units sold.
    pub quantity: Decimal,
    /// Unit of measure of the sold item.
    pub unit: String,
}

/// Owns the two ordered collections: `items` (current stock) and
/// `sold_items` (cumulative sales ledger, one aggregated entry per
/// distinct name).
///
/// Created empty at program start, populated by `add` commands or a bulk
/// load, and mutated in place by `sell`. Lives for the process lifetime.
#[derive(Debug, Clone, Default)]
pub struct Warehouse {
    items: Vec<Item>,
    sold_items: Vec<Item>,
}

impl Warehouse {
    /// Create an empty warehouse.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current stock, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Sales ledger, in first-sale order.
    #[must_use]
    pub fn sold_items(&self) -> &[Item] {
        &self.sold_items
    }

    /// Look up a stocked item by case-insensitive name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.is_named(name))
    }

    /// Add a new item, or update the existing entry with the same name.
    ///
    /// On update the stored quantity and unit price are overwritten; the
    /// unit and the stored name casing are kept.
    pub fn add(&mut self, item: Item) -> AddOutcome {
        match self.items.iter().position(|i| i.is_named(&item.name)) {
            Some(at) => {
                let existing = &mut self.items[at];
                existing.quantity = item.quantity;
                existing.unit_price = item.unit_price;
                AddOutcome::Updated
            }
            None => {
                self.items.push(item);
                AddOutcome::Added
            }
        }
    }

    /// Sell `quantity` units of the named item.
    ///
    /// On success the stock entry is decremented and the ledger entry for
    /// the name is credited, created with the sold quantity if absent.
    /// On failure both collections are left untouched.
    pub fn sell(&mut self, name: &str, quantity: Decimal) -> Result<SellReceipt, SellError> {
        let Some(at) = self.items.iter().position(|i| i.is_named(name)) else {
            return Err(SellError::NotFound {
                name: name.to_string(),
            });
        };
        let stock = &mut self.items[at];
        if stock.quantity < quantity {
            return Err(SellError::InsufficientStock {
                name: stock.name.clone(),
                requested: quantity,
                available: stock.quantity,
            });
        }
        stock.quantity -= quantity;
        let receipt = SellReceipt {
            name: stock.name.clone(),
            quantity,
            unit: stock.unit.clone(),
        };
        let unit_price = stock.unit_price;

        match self
            .sold_items
            .iter()
            .position(|i| i.is_named(&receipt.name))
        {
            Some(at) => self.sold_items[at].quantity += quantity,
            None => self.sold_items.push(Item::new(
                receipt.name.clone(),
                quantity,
                receipt.unit.clone(),
                unit_price,
            )),
        }
        Ok(receipt)
    }

    /// Σ quantity × unit price over the stock, unrounded.
    #[must_use]
    pub fn costs(&self) -> Decimal {
        self.items.iter().map(Item::value).sum()
    }

    /// Σ quantity × unit price over the ledger, unrounded.
    #[must_use]
    pub fn income(&self) -> Decimal {
        self.sold_items.iter().map(Item::value).sum()
    }

    /// income − costs, unrounded.
    #[must_use]
    pub fn revenue(&self) -> Decimal {
        self.income() - self.costs()
    }

    /// Replace the stock wholesale. Load semantics are replace, not merge.
    pub fn replace_items(&mut self, items: Vec<Item>) {
        self.items = items;
    }

    /// Replace the sales ledger wholesale.
    pub fn replace_sold(&mut self, sold_items: Vec<Item>) {
        self.sold_items = sold_items;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn stocked() -> Warehouse {
        let mut store = Warehouse::new();
        store.add(Item::new("Milk", dec!(120), "L", dec!(2.30)));
        store.add(Item::new("Sugar", dec!(1000), "kg", dec!(3.00)));
        store
    }

    #[test]
    fn test_add_appends_new_items() {
        let store = stocked();
        assert_eq!(store.items().len(), 2);
        assert_eq!(store.items()[0].name, "Milk");
    }

    #[test]
    fn test_add_existing_name_updates_in_place() {
        let mut store = stocked();
        let outcome = store.add(Item::new("milk", dec!(80), "bottle", dec!(2.50)));
        assert_eq!(outcome, AddOutcome::Updated);
        assert_eq!(store.items().len(), 2);

        let milk = store.find("Milk").unwrap();
        assert_eq!(milk.quantity, dec!(80));
        assert_eq!(milk.unit_price, dec!(2.50));
        // Unit and stored casing survive the update
        assert_eq!(milk.unit, "L");
        assert_eq!(milk.name, "Milk");
    }

    #[test]
    fn test_sell_decrements_stock_and_credits_ledger() {
        let mut store = stocked();
        let receipt = store.sell("milk", dec!(20)).unwrap();
        assert_eq!(receipt.name, "Milk");
        assert_eq!(receipt.unit, "L");

        assert_eq!(store.find("Milk").unwrap().quantity, dec!(100));
        assert_eq!(store.sold_items().len(), 1);
        assert_eq!(store.sold_items()[0].quantity, dec!(20));
        assert_eq!(store.sold_items()[0].unit_price, dec!(2.30));
    }

    #[test]
    fn test_sell_twice_aggregates_one_ledger_entry() {
        let mut store = stocked();
        store.sell("Milk", dec!(20)).unwrap();
        store.sell("MILK", dec!(30)).unwrap();

        assert_eq!(store.sold_items().len(), 1);
        assert_eq!(store.sold_items()[0].quantity, dec!(50));
        assert_eq!(store.find("Milk").unwrap().quantity, dec!(70));
    }

    #[test]
    fn test_sell_unknown_name_is_a_noop() {
        let mut store = stocked();
        let err = store.sell("Flour", dec!(1)).unwrap_err();
        assert_eq!(
            err,
            SellError::NotFound {
                name: "Flour".to_string()
            }
        );
        assert_eq!(store.find("Milk").unwrap().quantity, dec!(120));
        assert!(store.sold_items().is_empty());
    }

    #[test]
    fn test_sell_over_stock_is_a_noop() {
        let mut store = stocked();
        let err = store.sell("Milk", dec!(121)).unwrap_err();
        assert_eq!(
            err,
            SellError::InsufficientStock {
                name: "Milk".to_string(),
                requested: dec!(121),
                available: dec!(120),
            }
        );
        assert_eq!(store.find("Milk").unwrap().quantity, dec!(120));
        assert!(store.sold_items().is_empty());
    }

    #[test]
    fn test_sell_exact_stock_empties_the_entry() {
        let mut store = stocked();
        store.sell("Milk", dec!(120)).unwrap();
        assert_eq!(store.find("Milk").unwrap().quantity, dec!(0));
        assert_eq!(store.sold_items()[0].quantity, dec!(120));
    }

    #[test]
    fn test_revenue_is_income_minus_costs() {
        let mut store = Warehouse::new();
        store.add(Item::new("Milk", dec!(120), "L", dec!(2.30)));
        store.sell("Milk", dec!(20)).unwrap();

        // income = 20 * 2.30, costs = 100 * 2.30
        assert_eq!(store.income(), dec!(46.00));
        assert_eq!(store.costs(), dec!(230.00));
        assert_eq!(store.revenue(), dec!(-184.00));
        assert_eq!(store.revenue(), store.income() - store.costs());
    }

    #[test]
    fn test_totals_stay_unrounded() {
        let mut store = Warehouse::new();
        store.add(Item::new("Saffron", dec!(0.123), "kg", dec!(11.11)));
        assert_eq!(store.costs(), dec!(1.36653));
    }

    #[test]
    fn test_replace_on_load() {
        let mut store = stocked();
        store.replace_items(vec![Item::new("Flour", dec!(12000), "kg", dec!(1.2))]);
        assert_eq!(store.items().len(), 1);
        assert!(store.find("Milk").is_none());
        assert!(store.find("Flour").is_some());
    }
}

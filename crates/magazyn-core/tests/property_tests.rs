//! Property-based tests for magazyn-core.
//!
//! These tests verify invariants hold for arbitrary inputs using proptest.

use magazyn_core::{parse_decimal, Item, Warehouse};
use proptest::prelude::*;
use rust_decimal::Decimal;

// ============================================================================
// Arbitrary generators
// ============================================================================

fn arb_decimal() -> impl Strategy<Value = Decimal> {
    // Reasonable magnitudes at a handful of scales
    (-1_000_000i64..1_000_000i64, 0u32..4u32).prop_map(|(n, scale)| Decimal::new(n, scale))
}

fn arb_stock() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000i64, 0u32..4u32).prop_map(|(n, scale)| Decimal::new(n, scale))
}

fn arb_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Milk".to_string()),
        Just("Brown Sugar".to_string()),
        Just("Flour".to_string()),
        Just("Coffee".to_string()),
    ]
}

proptest! {
    #[test]
    fn decimal_text_round_trips_exactly(value in arb_decimal()) {
        let parsed = parse_decimal(&value.to_string()).unwrap();
        prop_assert_eq!(parsed, value);
    }

    #[test]
    fn sell_conserves_total_quantity(
        name in arb_name(),
        stock in arb_stock(),
        requested in arb_stock(),
        price in arb_decimal(),
    ) {
        let mut store = Warehouse::new();
        store.add(Item::new(name.clone(), stock, "kg", price));

        match store.sell(&name, requested) {
            Ok(receipt) => {
                prop_assert!(requested <= stock);
                prop_assert_eq!(receipt.quantity, requested);
                prop_assert_eq!(store.find(&name).unwrap().quantity, stock - requested);
                prop_assert_eq!(store.sold_items()[0].quantity, requested);
                // Nothing is created or destroyed by a sale
                prop_assert_eq!(
                    store.find(&name).unwrap().quantity + store.sold_items()[0].quantity,
                    stock
                );
            }
            Err(_) => {
                prop_assert!(requested > stock);
                prop_assert_eq!(store.find(&name).unwrap().quantity, stock);
                prop_assert!(store.sold_items().is_empty());
            }
        }
    }

    #[test]
    fn repeated_sales_aggregate_one_ledger_entry(
        name in arb_name(),
        first in 0i64..1000,
        second in 0i64..1000,
    ) {
        let first = Decimal::new(first, 1);
        let second = Decimal::new(second, 1);
        let mut store = Warehouse::new();
        store.add(Item::new(name.clone(), first + second, "kg", Decimal::new(250, 2)));

        store.sell(&name, first).unwrap();
        store.sell(&name, second).unwrap();

        prop_assert_eq!(store.sold_items().len(), 1);
        prop_assert_eq!(store.sold_items()[0].quantity, first + second);
        prop_assert_eq!(store.find(&name).unwrap().quantity, Decimal::ZERO);
    }

    #[test]
    fn add_never_duplicates_a_name(
        name in arb_name(),
        quantity in arb_stock(),
        update in arb_stock(),
    ) {
        let mut store = Warehouse::new();
        store.add(Item::new(name.clone(), quantity, "kg", Decimal::ONE));
        store.add(Item::new(name.to_uppercase(), update, "kg", Decimal::TWO));

        prop_assert_eq!(store.items().len(), 1);
        prop_assert_eq!(store.find(&name).unwrap().quantity, update);
    }

    #[test]
    fn revenue_identity_holds(
        stock in arb_stock(),
        price in arb_decimal(),
    ) {
        let mut store = Warehouse::new();
        store.add(Item::new("Milk", stock, "L", price));

        prop_assert_eq!(store.revenue(), store.income() - store.costs());
    }
}

//! Fixed-width table rendering for stock listings.

use crate::item::Item;

/// Column labels, in display order.
pub const COLUMNS: [&str; 4] = ["Name", "Quantity", "Unit", "Unit Price"];

// Display widths for Name, Quantity, Unit, Unit Price.
const WIDTHS: [usize; 4] = [10, 8, 6, 10];

/// Header row of column labels followed by a dash separator row.
#[must_use]
pub fn format_header() -> String {
    let labels: Vec<String> = COLUMNS
        .iter()
        .zip(WIDTHS)
        .map(|(label, width)| format!("{label:<width$}"))
        .collect();
    let dashes: Vec<String> = WIDTHS.iter().map(|width| "-".repeat(*width)).collect();
    format!("{}\n{}", labels.join("\t"), dashes.join("\t"))
}

/// One table row: name and unit left-aligned, numbers right-aligned.
///
/// Cells longer than their column width are not truncated; they widen the
/// row, the same as the width specifier in a format string.
#[must_use]
pub fn format_row(item: &Item) -> String {
    let cells = [
        format!("{:<width$}", item.name, width = WIDTHS[0]),
        format!("{:>width$}", item.quantity.to_string(), width = WIDTHS[1]),
        format!("{:<width$}", item.unit, width = WIDTHS[2]),
        format!("{:>width$}", item.unit_price.to_string(), width = WIDTHS[3]),
    ];
    cells.join("\t")
}

/// The full listing for a collection: header plus one row per item.
#[must_use]
pub fn render_table(items: &[Item]) -> String {
    let mut out = format_header();
    for item in items {
        out.push('\n');
        out.push_str(&format_row(item));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_header_layout() {
        let header = format_header();
        let mut lines = header.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Name      \tQuantity\tUnit  \tUnit Price"
        );
        assert_eq!(
            lines.next().unwrap(),
            "----------\t--------\t------\t----------"
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_row_alignment() {
        let item = Item::new("Milk", dec!(120), "L", dec!(2.30));
        assert_eq!(format_row(&item), "Milk      \t     120\tL     \t      2.30");
    }

    #[test]
    fn test_long_names_widen_the_row() {
        let item = Item::new("Brown Sugar Cubes", dec!(5), "kg", dec!(3.00));
        assert!(format_row(&item).starts_with("Brown Sugar Cubes\t"));
    }

    #[test]
    fn test_render_table() {
        let items = vec![
            Item::new("Milk", dec!(120), "L", dec!(2.30)),
            Item::new("Sugar", dec!(1000), "kg", dec!(3.00)),
        ];
        let table = render_table(&items);
        assert_eq!(table.lines().count(), 4);
        assert!(table.lines().nth(2).unwrap().starts_with("Milk"));
        assert!(table.lines().nth(3).unwrap().starts_with("Sugar"));
    }
}

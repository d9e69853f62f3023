//! Handlers for the interactive commands.
//!
//! Expected failures (unknown item, not enough stock, missing file) are
//! printed as soft single-line messages and the loop keeps running; only
//! unusable arguments surface as an `Err` to the dispatcher.

use anyhow::{bail, Result};
use magazyn_core::{quantize, AddOutcome, Item, SellError};
use std::path::Path;

use crate::parser::CommandLine;
use crate::shell::{Outcome, Shell};

// Most commands take no arguments at all; anything extra is a user error.
fn expect_no_args(line: &CommandLine) -> Result<()> {
    if !line.args.is_empty() || !line.kwargs.is_empty() {
        bail!("'{}' takes no arguments", line.name);
    }
    Ok(())
}

/// `help`: list the registered commands.
pub fn help(shell: &mut Shell, line: &CommandLine) -> Result<Outcome> {
    expect_no_args(line)?;
    println!("Available commands:");
    for command in shell.commands() {
        println!(" - {:<14}{}", command.name, command.summary);
    }
    println!("Type 'exit' to quit the program.");
    Ok(Outcome::Continue)
}

/// `show`: print the stock table.
pub fn show(shell: &mut Shell, line: &CommandLine) -> Result<Outcome> {
    expect_no_args(line)?;
    println!("{}", magazyn_core::render_table(shell.store.items()));
    Ok(Outcome::Continue)
}

/// `add`: interactively add a new item or update an existing one.
///
/// For an existing name the quantity and price prompts default to the
/// current values (blank keeps them); the unit is never overwritten.
pub fn add(shell: &mut Shell, line: &CommandLine) -> Result<Outcome> {
    expect_no_args(line)?;
    println!("Adding to warehouse...");
    let Some(name) = shell.prompt_nonempty("Item name: ") else {
        return Ok(Outcome::Continue);
    };

    let item = if let Some(existing) = shell.store.find(&name).cloned() {
        println!(
            "{} is already stocked: {} {} at {} PLN. Press Enter to keep a current value.",
            existing.name, existing.quantity, existing.unit, existing.unit_price
        );
        let Some(quantity) = shell.prompt_decimal("Item quantity: ", Some(existing.quantity))
        else {
            return Ok(Outcome::Continue);
        };
        let Some(unit_price) =
            shell.prompt_decimal("Item price in PLN: ", Some(existing.unit_price))
        else {
            return Ok(Outcome::Continue);
        };
        Item::new(existing.name, quantity, existing.unit, unit_price)
    } else {
        let Some(quantity) = shell.prompt_decimal("Item quantity: ", None) else {
            return Ok(Outcome::Continue);
        };
        let Some(unit) = shell.prompt_nonempty("Item unit of measure (L, kg, pcs, etc.): ") else {
            return Ok(Outcome::Continue);
        };
        let Some(unit_price) = shell.prompt_decimal("Item price in PLN: ", None) else {
            return Ok(Outcome::Continue);
        };
        Item::new(name, quantity, unit, unit_price)
    };

    let name = item.name.clone();
    match shell.store.add(item) {
        AddOutcome::Added => println!("Added {name} to the warehouse."),
        AddOutcome::Updated => println!("Updated {name}."),
    }
    Ok(Outcome::Continue)
}

/// `sell`: interactively sell a quantity of a named item.
pub fn sell(shell: &mut Shell, line: &CommandLine) -> Result<Outcome> {
    expect_no_args(line)?;
    let Some(name) = shell.prompt_nonempty("Item name: ") else {
        return Ok(Outcome::Continue);
    };
    let Some(quantity) = shell.prompt_decimal("Quantity to sell: ", None) else {
        return Ok(Outcome::Continue);
    };

    match shell.store.sell(&name, quantity) {
        Ok(receipt) => println!(
            "Successfully sold {} {} of {}",
            receipt.quantity, receipt.unit, receipt.name
        ),
        Err(SellError::NotFound { name }) => {
            println!("{name} not found in warehouse! Nothing sold.");
        }
        Err(SellError::InsufficientStock { name, .. }) => {
            println!("Not enough {name} in stock! Nothing sold.");
        }
    }
    Ok(Outcome::Continue)
}

/// `show_revenue`: print income, costs and revenue, quantized to two
/// fractional digits for display only.
pub fn show_revenue(shell: &mut Shell, line: &CommandLine) -> Result<Outcome> {
    expect_no_args(line)?;
    println!("Revenue breakdown (PLN):");
    println!("Income: {}", quantize(shell.store.income(), 2));
    println!("Costs: {}", quantize(shell.store.costs(), 2));
    println!("{}", "-".repeat(10));
    println!("Revenue: {} PLN", quantize(shell.store.revenue(), 2));
    Ok(Outcome::Continue)
}

/// `save`: export both collections to the configured paths.
pub fn save(shell: &mut Shell, line: &CommandLine) -> Result<Outcome> {
    expect_no_args(line)?;
    export(shell, &shell.warehouse_path, shell.store.items());
    export(shell, &shell.sales_path, shell.store.sold_items());
    Ok(Outcome::Continue)
}

// Best-effort export; failures are reported and never fatal, and a prior
// on-disk file is only replaced by a write that the loader accepts.
fn export(shell: &Shell, path: &Path, items: &[Item]) {
    let Some(loader) = shell.loaders.detect(path) else {
        println!("No loader available for {}.", path.display());
        return;
    };
    match loader.write(path, items) {
        Ok(()) => println!("Successfully exported data to {}", path.display()),
        Err(err) => println!("Error: {err}"),
    }
}

/// `load`: import collections from files given as keyword arguments,
/// replacing the in-memory collection on success only.
pub fn load(shell: &mut Shell, line: &CommandLine) -> Result<Outcome> {
    if !line.args.is_empty() {
        bail!("'load' takes keyword arguments only");
    }
    for key in line.kwargs.keys() {
        if key != "items" && key != "sales" {
            bail!("unknown argument '{key}', expected items=PATH or sales=PATH");
        }
    }
    if line.kwargs.is_empty() {
        println!("Usage: load items=PATH sales=PATH (either or both)");
        return Ok(Outcome::Continue);
    }

    if let Some(path) = line.kwargs.get("items") {
        if let Some(items) = import(shell, Path::new(path)) {
            println!("Loaded {} items from {path}", items.len());
            shell.store.replace_items(items);
        }
    }
    if let Some(path) = line.kwargs.get("sales") {
        if let Some(sold) = import(shell, Path::new(path)) {
            println!("Loaded {} sales entries from {path}", sold.len());
            shell.store.replace_sold(sold);
        }
    }
    Ok(Outcome::Continue)
}

// Read a collection; on failure report it and return None so the
// in-memory collection stays untouched.
fn import(shell: &Shell, path: &Path) -> Option<Vec<Item>> {
    let loader = shell.loaders.detect(path)?;
    match loader.read(path) {
        Ok(items) => Some(items),
        Err(err) if err.is_not_found() => {
            println!("File not found: {}. Nothing loaded.", path.display());
            None
        }
        Err(err) => {
            println!("Error: {err}");
            None
        }
    }
}

/// `exit` / `quit`: leave the dispatch loop.
pub fn exit(_shell: &mut Shell, line: &CommandLine) -> Result<Outcome> {
    expect_no_args(line)?;
    Ok(Outcome::Exit)
}

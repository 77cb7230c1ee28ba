//! Subcommand implementations.
//!
//! Every command that changes stock loads the file, applies the change and
//! saves it back. Rejected operations are already reported by the store; here
//! they only turn into a failing exit status.

use std::process::ExitCode;

use anyhow::Context;
use stockroom_core::Quantity;
use stockroom_events::EventSink;
use stockroom_inventory::InventoryStore;

use crate::cli::Commands;
use crate::config::Config;

pub fn run(command: Commands, config: &Config) -> anyhow::Result<ExitCode> {
    match command {
        Commands::Demo => Ok(demo(config)),
        Commands::Add { item, qty } => Ok(add(config, &item, &qty)),
        Commands::Remove { item, qty } => Ok(remove(config, &item, &qty)),
        Commands::Get { item } => Ok(get(config, &item)),
        Commands::Low { threshold } => low(config, threshold.as_deref()),
        Commands::Report => Ok(report(config)),
    }
}

/// Scripted walkthrough: valid and rejected adds, removes, queries, then a
/// save/load round trip through the configured file.
pub fn demo(config: &Config) -> ExitCode {
    let mut store = InventoryStore::new();
    let mut activity = Vec::new();

    let _ = add_raw(&mut store, "apple", "10", Some(&mut activity));
    let _ = add_raw(&mut store, "banana", "-2", Some(&mut activity));
    let _ = add_raw(&mut store, "123", "ten", Some(&mut activity));
    let _ = store.remove("apple", 3);
    let _ = store.remove("orange", 1);

    tracing::info!("Apple stock: {}", store.quantity("apple"));
    tracing::info!(
        "Low items: {:?}",
        store.low_stock_items(config.low_stock_threshold)
    );
    for line in &activity {
        tracing::info!("Activity: {line}");
    }

    let _ = store.save(&config.file);
    let _ = store.load(&config.file);
    store.report();

    println!("\nInventory operations completed successfully.\n");
    ExitCode::SUCCESS
}

fn add(config: &Config, item: &str, qty: &str) -> ExitCode {
    let Some(mut store) = open(config) else {
        return ExitCode::FAILURE;
    };
    if add_raw(&mut store, item, qty, None).is_none() {
        return ExitCode::FAILURE;
    }
    status(store.save(&config.file).is_ok())
}

fn remove(config: &Config, item: &str, qty: &str) -> ExitCode {
    let Some(mut store) = open(config) else {
        return ExitCode::FAILURE;
    };
    let Some(qty) = parse_quantity(&store, item, qty) else {
        return ExitCode::FAILURE;
    };
    if store.remove(item, qty).is_err() {
        return ExitCode::FAILURE;
    }
    status(store.save(&config.file).is_ok())
}

fn get(config: &Config, item: &str) -> ExitCode {
    let Some(store) = open(config) else {
        return ExitCode::FAILURE;
    };
    println!("{}", store.quantity(item));
    ExitCode::SUCCESS
}

fn low(config: &Config, threshold: Option<&str>) -> anyhow::Result<ExitCode> {
    let threshold = match threshold {
        Some(raw) => raw
            .parse::<Quantity>()
            .with_context(|| format!("invalid --threshold {raw:?}"))?,
        None => config.low_stock_threshold,
    };

    let Some(store) = open(config) else {
        return Ok(ExitCode::FAILURE);
    };
    for item in store.low_stock_items(threshold) {
        println!("{item}");
    }
    Ok(ExitCode::SUCCESS)
}

fn report(config: &Config) -> ExitCode {
    let Some(store) = open(config) else {
        return ExitCode::FAILURE;
    };
    store.report();
    ExitCode::SUCCESS
}

/// Load the configured file. A missing file gives an empty store; a file that
/// can't be read or parsed gives `None` so it is never overwritten.
fn open(config: &Config) -> Option<InventoryStore> {
    let mut store = InventoryStore::new();
    store.load(&config.file).ok()?;
    Some(store)
}

/// Parse a quantity typed by the user, reporting failures the way the store
/// reports its own rejections.
fn parse_quantity<S: EventSink>(store: &InventoryStore<S>, item: &str, raw: &str) -> Option<Quantity> {
    match raw.parse::<Quantity>() {
        Ok(qty) => Some(qty),
        Err(err) => {
            store
                .sink()
                .warning(&format!("Invalid quantity for {item}: {err}. Ignored."));
            None
        }
    }
}

fn add_raw<S: EventSink>(
    store: &mut InventoryStore<S>,
    item: &str,
    raw_qty: &str,
    log: Option<&mut Vec<String>>,
) -> Option<Quantity> {
    let qty = parse_quantity(store, item, raw_qty)?;
    store.add(item, qty, log).ok()
}

fn status(ok: bool) -> ExitCode {
    if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

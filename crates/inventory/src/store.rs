use std::path::Path;

use chrono::Utc;
use indexmap::IndexMap;

use stockroom_core::{Aggregate, DomainError, DomainResult, ItemName, Quantity};
use stockroom_events::{EventSink, TracingSink, execute};

use crate::event::{
    AddStock, InventoryEvent, ItemDepleted, RemoveStock, StockAdded, StockCommand, StockRemoved,
};
use crate::persistence::{self, PersistError, Snapshot};

/// Threshold used by callers that don't pick their own.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// Outcome of a successful removal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Removal {
    /// Stock is left; carries the new quantity.
    Remaining(Quantity),
    /// Quantity reached zero or below and the entry was dropped.
    Depleted,
}

/// Outcome of a load that didn't fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file was read; the store now holds `items` entries.
    Loaded { items: usize },
    /// No file at the path; the store was left as it was.
    Missing,
}

/// In-memory inventory: item name → quantity.
///
/// Invariant: every entry has a quantity > 0. Enumeration follows first
/// insertion; an item that is depleted and re-added moves to the end.
///
/// Every operation reports to the sink `S`. Rejected operations are reported
/// *and* returned as errors; the store is unchanged when they fail.
#[derive(Debug)]
pub struct InventoryStore<S = TracingSink> {
    stock: IndexMap<ItemName, Quantity>,
    sink: S,
}

impl InventoryStore<TracingSink> {
    /// Empty store reporting through `tracing`.
    pub fn new() -> Self {
        Self::with_sink(TracingSink)
    }
}

impl Default for InventoryStore<TracingSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> InventoryStore<S>
where
    S: EventSink,
{
    pub fn with_sink(sink: S) -> Self {
        Self {
            stock: IndexMap::new(),
            sink,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Add `qty` of `item`, creating the entry if needed. Returns the new total.
    ///
    /// When `log` is given, a timestamped line is appended to it.
    pub fn add(
        &mut self,
        item: &str,
        qty: impl Into<Quantity>,
        mut log: Option<&mut Vec<String>>,
    ) -> DomainResult<Quantity> {
        let qty = qty.into();
        let name = match ItemName::parse(item) {
            Ok(name) => name,
            Err(err) => {
                self.sink
                    .warning("Invalid item name. Must be a non-empty string.");
                return Err(err);
            }
        };

        let command = StockCommand::AddStock(AddStock {
            item: name,
            amount: qty,
            occurred_at: Utc::now(),
        });
        let events = match execute(self, &command) {
            Ok(events) => events,
            Err(err) => {
                self.sink
                    .warning(&format!("Quantity must be positive for {item}. Ignored."));
                return Err(err);
            }
        };

        for event in &events {
            if let (InventoryEvent::StockAdded(added), Some(log)) = (event, log.as_mut()) {
                log.push(added.activity_line());
            }
            self.sink.publish(event);
        }

        Ok(self.quantity(item))
    }

    /// Remove `qty` of `item`. The entry is dropped once its quantity reaches zero.
    pub fn remove(&mut self, item: &str, qty: impl Into<Quantity>) -> DomainResult<Removal> {
        let qty = qty.into();
        let Some(name) = self.stock.get_key_value(item).map(|(name, _)| name.clone()) else {
            self.sink.error(&format!("Item not found: '{item}'"));
            return Err(DomainError::not_found(item));
        };

        let command = StockCommand::RemoveStock(RemoveStock {
            item: name,
            amount: qty,
            occurred_at: Utc::now(),
        });
        let events = match execute(self, &command) {
            Ok(events) => events,
            Err(err) => {
                self.sink
                    .warning(&format!("Invalid quantity for {item}: {qty}. Ignored."));
                return Err(err);
            }
        };

        for event in &events {
            self.sink.publish(event);
        }

        Ok(match self.stock.get(item) {
            Some(remaining) => Removal::Remaining(*remaining),
            None => Removal::Depleted,
        })
    }

    /// Current quantity of `item`, zero when absent.
    pub fn quantity(&self, item: &str) -> Quantity {
        self.stock.get(item).copied().unwrap_or(Quantity::ZERO)
    }

    pub fn contains(&self, item: &str) -> bool {
        self.stock.contains_key(item)
    }

    pub fn len(&self) -> usize {
        self.stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    /// Entries in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (&ItemName, Quantity)> + '_ {
        self.stock.iter().map(|(name, qty)| (name, *qty))
    }

    /// Names whose quantity is strictly below `threshold`, in enumeration order.
    pub fn low_stock_items(&self, threshold: impl Into<Quantity>) -> Vec<&str> {
        let threshold = threshold.into();
        self.iter()
            .filter(|(_, qty)| *qty < threshold)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Emit one line per item, in enumeration order.
    pub fn report(&self) {
        self.sink.info("Items Report:");
        for (name, qty) in self.iter() {
            self.sink.info(&format!("{name} -> {qty}"));
        }
    }

    /// Copy of the mapping in enumeration order.
    pub fn snapshot(&self) -> Snapshot {
        self.iter()
            .map(|(name, qty)| (name.to_string(), qty))
            .collect()
    }

    /// Replace the whole mapping with the contents of the file at `path`.
    ///
    /// A missing file leaves the store as it was. A file that can't be read or
    /// parsed leaves the store as it was and is returned as an error.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<LoadOutcome, PersistError> {
        let path = path.as_ref();
        let snapshot = match persistence::read_snapshot(path) {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => {
                self.sink.warning(&format!(
                    "File {} not found. Starting with empty inventory.",
                    path.display()
                ));
                return Ok(LoadOutcome::Missing);
            }
            Err(err) => {
                match &err {
                    PersistError::Malformed { source, .. } => self.sink.error(&format!(
                        "Invalid JSON format in {}: {source}",
                        path.display()
                    )),
                    other => self.sink.error(&format!(
                        "Error loading data from {}: {other}",
                        path.display()
                    )),
                }
                return Err(err);
            }
        };

        self.replace_with(snapshot, path);
        self.sink
            .info(&format!("Data loaded successfully from {}", path.display()));
        Ok(LoadOutcome::Loaded { items: self.len() })
    }

    /// Write the whole mapping to `path` as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PersistError> {
        let path = path.as_ref();
        match persistence::write_snapshot(path, &self.snapshot()) {
            Ok(()) => {
                self.sink
                    .info(&format!("Data saved successfully to {}", path.display()));
                Ok(())
            }
            Err(err) => {
                let cause = match &err {
                    PersistError::Io { source, .. } => source.to_string(),
                    PersistError::Malformed { source, .. }
                    | PersistError::Encode { source, .. } => source.to_string(),
                };
                self.sink.error(&format!(
                    "Error saving data to {}: {cause}",
                    path.display()
                ));
                Err(err)
            }
        }
    }

    /// Duplicate keys were already collapsed by the parser (last value wins),
    /// so each name is validated against the value the file actually holds.
    fn replace_with(&mut self, snapshot: Snapshot, path: &Path) {
        self.stock.clear();

        for (raw_name, qty) in snapshot {
            let entry = ItemName::parse(raw_name.as_str())
                .and_then(|name| qty.positive().map(|qty| (name, qty)));
            match entry {
                Ok((name, qty)) => {
                    self.stock.insert(name, qty);
                }
                Err(err) => self.sink.warning(&format!(
                    "Skipping invalid entry '{raw_name}' in {}: {err}",
                    path.display()
                )),
            }
        }
    }

    fn handle_add(&self, cmd: &AddStock) -> DomainResult<Vec<InventoryEvent>> {
        let amount = cmd.amount.positive()?;
        let total = self.quantity(cmd.item.as_str()) + amount;

        Ok(vec![InventoryEvent::StockAdded(StockAdded {
            item: cmd.item.clone(),
            amount,
            total,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_remove(&self, cmd: &RemoveStock) -> DomainResult<Vec<InventoryEvent>> {
        let Some(current) = self.stock.get(&cmd.item).copied() else {
            return Err(DomainError::not_found(cmd.item.as_str()));
        };
        let amount = cmd.amount.positive()?;

        let remaining = current - amount;
        if !remaining.is_positive() {
            return Ok(vec![InventoryEvent::ItemDepleted(ItemDepleted {
                item: cmd.item.clone(),
                amount,
                occurred_at: cmd.occurred_at,
            })]);
        }

        Ok(vec![InventoryEvent::StockRemoved(StockRemoved {
            item: cmd.item.clone(),
            amount,
            remaining,
            occurred_at: cmd.occurred_at,
        })])
    }
}

impl<S> Aggregate for InventoryStore<S>
where
    S: EventSink,
{
    type Command = StockCommand;
    type Event = InventoryEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            InventoryEvent::StockAdded(e) => {
                self.stock.insert(e.item.clone(), e.total);
            }
            InventoryEvent::StockRemoved(e) => {
                self.stock.insert(e.item.clone(), e.remaining);
            }
            InventoryEvent::ItemDepleted(e) => {
                self.stock.shift_remove(&e.item);
            }
        }
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            StockCommand::AddStock(cmd) => self.handle_add(cmd),
            StockCommand::RemoveStock(cmd) => self.handle_remove(cmd),
        }
    }
}

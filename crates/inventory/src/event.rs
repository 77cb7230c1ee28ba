use chrono::{DateTime, Local, Utc};

use stockroom_core::{ItemName, Quantity};
use stockroom_events::{Event, Severity};

/// Command: AddStock.
#[derive(Debug, Clone, PartialEq)]
pub struct AddStock {
    pub item: ItemName,
    pub amount: Quantity,
    pub occurred_at: DateTime<Utc>,
}

/// Command: RemoveStock.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoveStock {
    pub item: ItemName,
    pub amount: Quantity,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StockCommand {
    AddStock(AddStock),
    RemoveStock(RemoveStock),
}

/// Event: StockAdded.
#[derive(Debug, Clone, PartialEq)]
pub struct StockAdded {
    pub item: ItemName,
    pub amount: Quantity,
    pub total: Quantity,
    pub occurred_at: DateTime<Utc>,
}

impl StockAdded {
    /// Entry appended to a caller-owned activity log, stamped in local time.
    pub fn activity_line(&self) -> String {
        format!(
            "{}: Added {} of {}",
            self.occurred_at
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S%.6f"),
            self.amount,
            self.item
        )
    }
}

/// Event: StockRemoved (some stock remains).
#[derive(Debug, Clone, PartialEq)]
pub struct StockRemoved {
    pub item: ItemName,
    pub amount: Quantity,
    pub remaining: Quantity,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemDepleted (the entry is gone).
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDepleted {
    pub item: ItemName,
    pub amount: Quantity,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InventoryEvent {
    StockAdded(StockAdded),
    StockRemoved(StockRemoved),
    ItemDepleted(ItemDepleted),
}

impl Event for InventoryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::StockAdded(_) => "inventory.stock.added",
            InventoryEvent::StockRemoved(_) => "inventory.stock.removed",
            InventoryEvent::ItemDepleted(_) => "inventory.item.depleted",
        }
    }

    fn severity(&self) -> Severity {
        Severity::Info
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            InventoryEvent::StockAdded(e) => e.occurred_at,
            InventoryEvent::StockRemoved(e) => e.occurred_at,
            InventoryEvent::ItemDepleted(e) => e.occurred_at,
        }
    }
}

impl core::fmt::Display for InventoryEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InventoryEvent::StockAdded(e) => {
                write!(f, "Added {} of {}. Total: {}", e.amount, e.item, e.total)
            }
            InventoryEvent::StockRemoved(e) => {
                write!(f, "Removed {} of {}. Remaining: {}", e.amount, e.item, e.remaining)
            }
            InventoryEvent::ItemDepleted(e) => {
                write!(f, "{} removed completely (quantity <= 0).", e.item)
            }
        }
    }
}

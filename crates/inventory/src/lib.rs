//! Inventory domain module.
//!
//! An [`InventoryStore`] maps item names to positive quantities. Stock changes
//! are decided as events (pure), applied in place, and reported through an
//! [`EventSink`](stockroom_events::EventSink). The whole mapping can be saved
//! to and loaded from a flat JSON object file.

pub mod event;
pub mod persistence;
pub mod store;

pub use event::{
    AddStock, InventoryEvent, ItemDepleted, RemoveStock, StockAdded, StockCommand, StockRemoved,
};
pub use persistence::{DEFAULT_INVENTORY_FILE, PersistError, Snapshot};
pub use store::{DEFAULT_LOW_STOCK_THRESHOLD, InventoryStore, LoadOutcome, Removal};

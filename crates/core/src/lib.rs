//! `stockroom-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no logging).

pub mod aggregate;
pub mod error;
pub mod item;
pub mod quantity;
pub mod value_object;

pub use aggregate::Aggregate;
pub use error::{DomainError, DomainResult};
pub use item::ItemName;
pub use quantity::Quantity;
pub use value_object::ValueObject;

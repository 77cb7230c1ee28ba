//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity** - they are defined entirely by their
//! attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one:
///
/// ```
/// use stockroom_core::{Quantity, ValueObject};
///
/// fn assert_value_object<T: ValueObject>(_: &T) {}
///
/// let q = Quantity::from(7);
/// assert_value_object(&q);
/// assert_eq!(q + Quantity::from(3), Quantity::from(10));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

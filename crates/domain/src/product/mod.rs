//! Product entity and related types.

mod aggregate;
mod events;
mod value_objects;

pub use aggregate::{Product, ProductBuilder};
pub use events::{FieldValue, ProductChange, ProductField, ProductUpdated};
pub use value_objects::{Price, Stock};

//! Domain layer for the storefront.
//!
//! This crate provides:
//! - Validated value objects (`Price`, `Stock`, `Email`, `Password`)
//! - Domain events (`ProductUpdated`, `UserRegistered`) with a stable wire shape
//! - `Product` and `User` entities that buffer the events their mutations raise
//!
//! Nothing here performs I/O. Callers construct value objects (validation
//! fails fast), mutate entities, then drain pending events with
//! [`Entity::pull_events`] and hand them to whatever dispatches them.

pub mod aggregate;
pub mod error;
pub mod product;
pub mod user;

pub use aggregate::{DomainEvent, Entity};
pub use common::{ProductId, UserId};
pub use error::{ArithmeticError, DomainError, ValidationError};
pub use product::{
    FieldValue, Price, Product, ProductBuilder, ProductChange, ProductField, ProductUpdated, Stock,
};
pub use user::{Email, Password, User, UserBuilder, UserRegistered};

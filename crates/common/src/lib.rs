//! Types shared by the storefront domain crates.

pub mod timestamp;
pub mod types;

pub use types::{ProductId, UserId};

//! User entity and related types.

mod aggregate;
mod events;
mod value_objects;

pub use aggregate::{User, UserBuilder};
pub use events::UserRegistered;
pub use value_objects::{Email, Password};

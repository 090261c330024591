//! User entity implementation.

use chrono::{DateTime, Utc};
use common::UserId;

use crate::aggregate::{Entity, EventBuffer};
use crate::error::DomainError;

use super::{Email, Password, UserRegistered};

/// User entity.
#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    name: String,
    email: Email,
    /// Plaintext; hash before persisting.
    password: Password,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    events: EventBuffer<UserRegistered>,
}

impl User {
    /// Creates a new user builder.
    pub fn builder() -> UserBuilder {
        UserBuilder::default()
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Signals that the user registered.
    ///
    /// Only records a [`UserRegistered`] event; no other state changes.
    /// Use cases call it once, right after building a new user.
    pub fn register(&mut self) {
        let event = UserRegistered::new(self.id, self.email.clone());
        self.events.record(Self::entity_type(), event);
    }
}

impl Entity for User {
    type Event = UserRegistered;

    fn entity_type() -> &'static str {
        "User"
    }

    fn pull_events(&mut self) -> Vec<UserRegistered> {
        self.events.drain()
    }

    fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }
}

/// Builder for [`User`].
#[derive(Debug)]
pub struct UserBuilder {
    id: Option<UserId>,
    name: Option<String>,
    email: Option<Email>,
    password: Option<Password>,
    is_active: bool,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl Default for UserBuilder {
    fn default() -> Self {
        Self {
            id: None,
            name: None,
            email: None,
            password: None,
            is_active: true,
            created_at: None,
            updated_at: None,
        }
    }
}

impl UserBuilder {
    pub fn id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email(mut self, email: Email) -> Self {
        self.email = Some(email);
        self
    }

    pub fn password(mut self, password: Password) -> Self {
        self.password = Some(password);
        self
    }

    /// Sets the active flag. Defaults to `true`.
    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    /// Builds the user, failing with [`DomainError::MissingField`] if anything is unset.
    pub fn build(self) -> Result<User, DomainError> {
        fn required<T>(value: Option<T>, field: &'static str) -> Result<T, DomainError> {
            value.ok_or(DomainError::MissingField {
                entity: "User",
                field,
            })
        }

        Ok(User {
            id: required(self.id, "id")?,
            name: required(self.name, "name")?,
            email: required(self.email, "email")?,
            password: required(self.password, "password")?,
            is_active: self.is_active,
            created_at: required(self.created_at, "created_at")?,
            updated_at: required(self.updated_at, "updated_at")?,
            events: EventBuffer::default(),
        })
    }
}

//! User domain events.

use chrono::{DateTime, SubsecRound, Utc};
use common::UserId;
use serde::{Deserialize, Serialize};

use crate::aggregate::DomainEvent;

use super::Email;

/// A user completed registration.
///
/// Wire shape: `{"userId": 1, "email": "a@b.com", "occurredOn": "2024-01-01 12:00:00"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRegistered {
    user_id: UserId,
    email: Email,
    #[serde(with = "common::timestamp::occurred_on")]
    occurred_on: DateTime<Utc>,
}

impl UserRegistered {
    /// Creates the event, stamping it with the current time.
    pub fn new(user_id: UserId, email: Email) -> Self {
        Self::at(user_id, email, Utc::now())
    }

    /// Creates the event with an explicit occurrence time, truncated to whole seconds.
    pub fn at(user_id: UserId, email: Email, occurred_on: DateTime<Utc>) -> Self {
        Self {
            user_id,
            email,
            occurred_on: occurred_on.trunc_subsecs(0),
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn email(&self) -> &str {
        self.email.value()
    }
}

impl DomainEvent for UserRegistered {
    fn event_type(&self) -> &'static str {
        "UserRegistered"
    }

    fn occurred_on(&self) -> DateTime<Utc> {
        self.occurred_on
    }
}

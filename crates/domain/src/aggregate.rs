//! Core entity and domain event traits.

use chrono::{DateTime, Utc};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::error::DomainError;

/// Trait for domain events.
///
/// Domain events represent facts that have happened in the domain.
/// They are immutable and should be named in past tense.
pub trait DomainEvent: Serialize + DeserializeOwned + Send + Sync + Clone {
    /// Returns the event type name.
    fn event_type(&self) -> &'static str;

    /// Returns when the fact occurred.
    ///
    /// Captured once when the event is built; repeated calls return the same instant.
    fn occurred_on(&self) -> DateTime<Utc>;

    /// Serializes the event into its wire mapping of field name to value.
    fn to_map(&self) -> Result<Map<String, Value>, DomainError> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(DomainError::InvalidEventPayload {
                reason: format!("{} serialized to a non-object: {other}", self.event_type()),
            }),
        }
    }
}

/// Trait for entities that raise domain events.
///
/// Mutating operations append events to a buffer owned by the entity.
/// Callers drain it with [`Entity::pull_events`] and dispatch the events
/// themselves; the buffer is never exposed directly.
///
/// Cloning an entity copies its state but not its pending events.
///
/// Entities are not synchronized. Sharing one instance across threads
/// requires wrapping it in a lock so appends and drains do not interleave.
pub trait Entity {
    /// The type of events this entity raises.
    type Event: DomainEvent;

    /// Returns the entity type name.
    fn entity_type() -> &'static str;

    /// Returns all pending events in the order they were raised and clears the buffer.
    ///
    /// A second call with no mutation in between returns an empty list.
    fn pull_events(&mut self) -> Vec<Self::Event>;

    /// Returns true if events are waiting to be pulled.
    fn has_pending_events(&self) -> bool;
}

/// Ordered buffer of events raised by one entity instance.
///
/// Cloning yields an empty buffer: pending events belong to the instance
/// that raised them and are delivered by exactly one pull.
#[derive(Debug)]
pub(crate) struct EventBuffer<E> {
    pending: Vec<E>,
}

impl<E> Clone for EventBuffer<E> {
    fn clone(&self) -> Self {
        Self::default()
    }
}

impl<E> Default for EventBuffer<E> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

impl<E: DomainEvent> EventBuffer<E> {
    /// Appends an event raised by an entity of the given type.
    pub(crate) fn record(&mut self, entity_type: &'static str, event: E) {
        let event_type = event.event_type();
        tracing::debug!(entity_type, event_type, "domain event recorded");
        metrics::counter!("domain_events_recorded_total", "event_type" => event_type).increment(1);
        self.pending.push(event);
    }

    /// Takes every pending event, leaving the buffer empty.
    pub(crate) fn drain(&mut self) -> Vec<E> {
        let events = std::mem::take(&mut self.pending);
        if !events.is_empty() {
            tracing::debug!(count = events.len(), "domain events pulled");
        }
        events
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

//! Product domain events.

use chrono::{DateTime, SubsecRound, Utc};
use common::ProductId;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};

use crate::aggregate::DomainEvent;
use crate::error::DomainError;

use super::{Price, Stock};

/// Product attribute that an update touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductField {
    Price,
    Stock,
}

impl ProductField {
    /// Returns the field name as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductField::Price => "price",
            ProductField::Stock => "stock",
        }
    }
}

impl std::fmt::Display for ProductField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// New value carried by a product update, as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Decimal(f64),
}

impl FieldValue {
    /// Returns the value as a float regardless of its wire representation.
    pub fn as_f64(&self) -> f64 {
        match self {
            FieldValue::Integer(v) => *v as f64,
            FieldValue::Decimal(v) => *v,
        }
    }
}

/// A change applied to a product, keyed by the field it touched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProductChange {
    Price(Price),
    Stock(Stock),
}

impl ProductChange {
    pub fn field(&self) -> ProductField {
        match self {
            ProductChange::Price(_) => ProductField::Price,
            ProductChange::Stock(_) => ProductField::Stock,
        }
    }

    pub fn value(&self) -> FieldValue {
        match self {
            ProductChange::Price(price) => FieldValue::Decimal(price.value()),
            ProductChange::Stock(stock) => FieldValue::Integer(stock.value()),
        }
    }
}

/// A product's price or stock was changed.
///
/// Wire shape: `{"id": 1, "field": "price", "value": 15.0, "occurredOn": "2024-01-01 12:00:00"}`.
/// `id` is `null` when the product had not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdated {
    id: Option<ProductId>,
    change: ProductChange,
    occurred_on: DateTime<Utc>,
}

impl ProductUpdated {
    /// Creates the event, stamping it with the current time.
    pub fn new(id: Option<ProductId>, change: ProductChange) -> Self {
        Self::at(id, change, Utc::now())
    }

    /// Creates the event with an explicit occurrence time, truncated to whole seconds.
    pub fn at(id: Option<ProductId>, change: ProductChange, occurred_on: DateTime<Utc>) -> Self {
        Self {
            id,
            change,
            occurred_on: occurred_on.trunc_subsecs(0),
        }
    }

    /// Creates an event for a new price.
    pub fn price_changed(id: Option<ProductId>, price: Price) -> Self {
        Self::new(id, ProductChange::Price(price))
    }

    /// Creates an event for a new stock level.
    pub fn stock_changed(id: Option<ProductId>, stock: Stock) -> Self {
        Self::new(id, ProductChange::Stock(stock))
    }

    pub fn id(&self) -> Option<ProductId> {
        self.id
    }

    pub fn change(&self) -> ProductChange {
        self.change
    }

    pub fn field(&self) -> ProductField {
        self.change.field()
    }

    pub fn value(&self) -> FieldValue {
        self.change.value()
    }
}

impl DomainEvent for ProductUpdated {
    fn event_type(&self) -> &'static str {
        "ProductUpdated"
    }

    fn occurred_on(&self) -> DateTime<Utc> {
        self.occurred_on
    }
}

#[derive(Serialize, Deserialize)]
struct Payload {
    id: Option<ProductId>,
    field: ProductField,
    value: FieldValue,
    #[serde(rename = "occurredOn", with = "common::timestamp::occurred_on")]
    occurred_on: DateTime<Utc>,
}

impl Payload {
    fn into_event(self) -> Result<ProductUpdated, DomainError> {
        let change = match (self.field, self.value) {
            (ProductField::Price, value) => ProductChange::Price(Price::new(value.as_f64())?),
            (ProductField::Stock, FieldValue::Integer(units)) => {
                ProductChange::Stock(Stock::new(units)?)
            }
            (ProductField::Stock, FieldValue::Decimal(units)) => {
                return Err(DomainError::InvalidEventPayload {
                    reason: format!("stock value must be an integer, got {units}"),
                });
            }
        };
        Ok(ProductUpdated::at(self.id, change, self.occurred_on))
    }
}

impl Serialize for ProductUpdated {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Payload {
            id: self.id,
            field: self.field(),
            value: self.value(),
            occurred_on: self.occurred_on,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ProductUpdated {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Payload::deserialize(deserializer)?
            .into_event()
            .map_err(D::Error::custom)
    }
}

//! Product entity implementation.

use chrono::{DateTime, Utc};
use common::{ProductId, UserId};

use crate::aggregate::{Entity, EventBuffer};
use crate::error::DomainError;

use super::{Price, ProductUpdated, Stock};

/// Product entity.
///
/// Built by a factory (a repository hydrating a row, or a use case creating
/// a new product) with every attribute supplied up front. Price and stock
/// changes raise [`ProductUpdated`] events that stay buffered until pulled.
#[derive(Debug, Clone)]
pub struct Product {
    /// Storage identifier; `None` until persisted.
    id: Option<ProductId>,
    name: String,
    description: String,
    price: Price,
    stock: Stock,
    /// Image path or URL.
    image: String,
    /// User who owns the listing.
    user_id: UserId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    events: EventBuffer<ProductUpdated>,
}

impl Product {
    /// Creates a new product builder.
    pub fn builder() -> ProductBuilder {
        ProductBuilder::default()
    }
}

impl Entity for Product {
    type Event = ProductUpdated;

    fn entity_type() -> &'static str {
        "Product"
    }

    fn pull_events(&mut self) -> Vec<ProductUpdated> {
        self.events.drain()
    }

    fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }
}

// Query methods
impl Product {
    pub fn id(&self) -> Option<ProductId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn stock(&self) -> Stock {
        self.stock
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

// Domain methods (buffer events)
impl Product {
    /// Replaces the price and records a `price` update.
    pub fn update_price(&mut self, new_price: Price) {
        self.price = new_price;
        self.events
            .record(Self::entity_type(), ProductUpdated::price_changed(self.id, new_price));
    }

    /// Replaces the stock level and records a `stock` update.
    pub fn update_stock(&mut self, new_stock: Stock) {
        self.stock = new_stock;
        self.events
            .record(Self::entity_type(), ProductUpdated::stock_changed(self.id, new_stock));
    }
}

/// Builder for [`Product`].
///
/// Both timestamps are required; the builder never reads the clock.
#[derive(Debug, Default)]
pub struct ProductBuilder {
    id: Option<ProductId>,
    name: Option<String>,
    description: Option<String>,
    price: Option<Price>,
    stock: Option<Stock>,
    image: Option<String>,
    user_id: Option<UserId>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl ProductBuilder {
    /// Sets the storage ID. Leave unset for products that are not persisted yet.
    pub fn id(mut self, id: ProductId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn price(mut self, price: Price) -> Self {
        self.price = Some(price);
        self
    }

    pub fn stock(mut self, stock: Stock) -> Self {
        self.stock = Some(stock);
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn user_id(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
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

    /// Builds the product.
    ///
    /// Fails with [`DomainError::MissingField`] naming the first unset attribute.
    pub fn build(self) -> Result<Product, DomainError> {
        fn required<T>(value: Option<T>, field: &'static str) -> Result<T, DomainError> {
            value.ok_or(DomainError::MissingField {
                entity: "Product",
                field,
            })
        }

        Ok(Product {
            id: self.id,
            name: required(self.name, "name")?,
            description: required(self.description, "description")?,
            price: required(self.price, "price")?,
            stock: required(self.stock, "stock")?,
            image: required(self.image, "image")?,
            user_id: required(self.user_id, "user_id")?,
            created_at: required(self.created_at, "created_at")?,
            updated_at: required(self.updated_at, "updated_at")?,
            events: EventBuffer::default(),
        })
    }
}

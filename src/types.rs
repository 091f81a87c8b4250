//! Core types for the subscription manager.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a subscription (assigned by the store).
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub String);

impl SubscriptionId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        SubscriptionId(Uuid::new_v4().to_string())
    }

    pub fn new(id: impl Into<String>) -> Self {
        SubscriptionId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SubscriptionId({})", self.0)
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque customer account identifier.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub String);

impl CustomerId {
    pub fn new(id: impl Into<String>) -> Self {
        CustomerId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CustomerId({})", self.0)
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque catalog product identifier.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Asin(pub String);

impl Asin {
    pub fn new(asin: impl Into<String>) -> Self {
        Asin(asin.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Asin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Asin({})", self.0)
    }
}

impl fmt::Display for Asin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A standing order: a customer receives a product at a given frequency.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    /// Unique identifier (assigned by the store).
    pub id: SubscriptionId,

    /// Subscribing customer.
    pub customer_id: CustomerId,

    /// Subscribed product.
    pub asin: Asin,

    /// Delivery interval.
    pub frequency: u32,
}

/// Input for creating a new subscription (before an id is assigned).
#[derive(Clone, Debug)]
pub struct SubscriptionInput {
    pub customer_id: CustomerId,
    pub asin: Asin,
    pub frequency: u32,
}

impl SubscriptionInput {
    pub fn new(customer_id: CustomerId, asin: Asin, frequency: u32) -> Self {
        Self {
            customer_id,
            asin,
            frequency,
        }
    }
}

/// A known customer account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
}

/// A catalog product entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub asin: Asin,
    pub title: String,
    /// Whether the product is eligible for Subscribe and Save.
    pub subscribable: bool,
}

//! Error types for subscription operations.

use crate::types::{Asin, CustomerId, SubscriptionId};
use thiserror::Error;

/// Main error type for subscription operations.
#[derive(Debug, Error)]
pub enum SubscriptionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Subscription already exists for customer {customer_id}, ASIN {asin}; use update instead")]
    SubscriptionExists { customer_id: CustomerId, asin: Asin },

    #[error("Subscription ID is required for update")]
    MissingId,

    #[error("No subscription found for ID: {0}")]
    SubscriptionNotFound(SubscriptionId),

    #[error("Unknown customer: {0}")]
    UnknownCustomer(CustomerId),

    #[error("Unknown ASIN: {0}")]
    UnknownAsin(Asin),

    #[error("Product is not subscribable: {0}")]
    ProductNotSubscribable(Asin),

    #[error("Invalid subscription record: {0}")]
    InvalidRecord(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<serde_json::Error> for SubscriptionError {
    fn from(e: serde_json::Error) -> Self {
        SubscriptionError::Deserialization(e.to_string())
    }
}

/// Result type for subscription operations.
pub type Result<T> = std::result::Result<T, SubscriptionError>;

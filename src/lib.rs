//! # Subscribe and Save
//!
//! A small subscription manager backed by a flat CSV file, fronted by a
//! service layer that validates customers and products via injected
//! lookup collaborators.
//!
//! ## Core Concepts
//!
//! - **Subscriptions**: One record per line in a comma-delimited file
//! - **Store**: Full-file scans for reads, append or rewrite for writes
//! - **Service**: Customer/product validation before anything is stored
//! - **Collaborators**: Identity and catalog lookups behind traits
//!
//! ## Example
//!
//! ```ignore
//! use subscribe_and_save::{
//!     Asin, CustomerId, FileIdentityService, FileProductCatalog,
//!     SubscriptionFileStorage, SubscriptionService,
//! };
//!
//! let service = SubscriptionService::new(
//!     FileIdentityService::new("data/customers.txt"),
//!     FileProductCatalog::new("data/catalog.json"),
//!     SubscriptionFileStorage::new("data/subscriptions.csv"),
//! );
//!
//! let subscription = service.subscribe(
//!     CustomerId::new("amzn1.account.AEZR3A02756837HDND93HDN93112"),
//!     Asin::new("B00ILBUEVK"),
//!     1,
//! )?;
//!
//! let found = service.get_subscription(&subscription.id)?;
//! ```

pub mod catalog;
pub mod codec;
pub mod error;
pub mod identity;
pub mod service;
pub mod storage;
pub mod types;

// Re-exports
pub use catalog::{FileProductCatalog, ProductCatalog};
pub use error::{Result, SubscriptionError};
pub use identity::{FileIdentityService, IdentityService};
pub use service::SubscriptionService;
pub use storage::SubscriptionFileStorage;
pub use types::*;

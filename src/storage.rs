//! File-backed subscription store.
//!
//! One encoded record per line, no header, no index. Every operation is
//! a fresh full scan of the backing file; writes either append a single
//! record (create) or rewrite the whole file (update). There is no
//! locking: concurrent writers against the same file can race.

use crate::codec;
use crate::error::{Result, SubscriptionError};
use crate::types::{Asin, CustomerId, Subscription, SubscriptionId, SubscriptionInput};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Subscription data store backed by a flat text file.
pub struct SubscriptionFileStorage {
    /// Path to the subscriptions file.
    path: PathBuf,
}

impl SubscriptionFileStorage {
    /// Create a storage handle for the given subscriptions file.
    ///
    /// The file itself is not touched until an operation runs; it must
    /// already exist and be readable by then.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    // --- Write Operations ---

    /// Create a new subscription.
    ///
    /// Fails with [`SubscriptionError::SubscriptionExists`] if a record
    /// for the same (customer, ASIN) pair is already stored. Otherwise
    /// assigns a fresh id and appends the encoded record to the file.
    pub fn create(&self, input: SubscriptionInput) -> Result<Subscription> {
        if let Some(existing) = self.get_by_customer_and_asin(&input.customer_id, &input.asin)? {
            return Err(SubscriptionError::SubscriptionExists {
                customer_id: existing.customer_id,
                asin: existing.asin,
            });
        }

        let subscription = Subscription {
            id: SubscriptionId::generate(),
            customer_id: input.customer_id,
            asin: input.asin,
            frequency: input.frequency,
        };

        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        file.write_all(codec::encode(&subscription).as_bytes())?;

        debug!(id = %subscription.id, "created subscription");
        Ok(subscription)
    }

    /// Update an existing subscription.
    ///
    /// The record with the matching id is replaced wholesale by the
    /// incoming subscription (not merged with the stored fields), and
    /// the entire file is rewritten. Fails with
    /// [`SubscriptionError::MissingId`] if the id is empty and with
    /// [`SubscriptionError::SubscriptionNotFound`] if no record carries
    /// that id.
    pub fn update(&self, subscription: Subscription) -> Result<Subscription> {
        if subscription.id.is_empty() {
            return Err(SubscriptionError::MissingId);
        }

        let existing = self.load_all()?;
        if !existing.iter().any(|s| s.id == subscription.id) {
            return Err(SubscriptionError::SubscriptionNotFound(subscription.id));
        }

        let records: Vec<Subscription> = existing
            .into_iter()
            .map(|s| {
                if s.id == subscription.id {
                    subscription.clone()
                } else {
                    s
                }
            })
            .collect();
        self.write_all(&records)?;

        debug!(id = %subscription.id, "updated subscription");
        Ok(subscription)
    }

    // --- Read Operations ---

    /// Get a subscription by id.
    ///
    /// Returns the first matching record as an owned copy, or `None` if
    /// no record carries the id.
    pub fn get_by_id(&self, id: &SubscriptionId) -> Result<Option<Subscription>> {
        Ok(self.load_all()?.into_iter().find(|s| &s.id == id))
    }

    /// Duplicate probe for `create`.
    fn get_by_customer_and_asin(
        &self,
        customer_id: &CustomerId,
        asin: &Asin,
    ) -> Result<Option<Subscription>> {
        Ok(self
            .load_all()?
            .into_iter()
            .find(|s| &s.customer_id == customer_id && &s.asin == asin))
    }

    // --- File Access ---

    /// Read and decode every record in the file.
    ///
    /// A single undecodable line fails the whole read; there is no
    /// skip-bad-record recovery.
    fn load_all(&self) -> Result<Vec<Subscription>> {
        let contents = fs::read_to_string(&self.path)?;
        contents.lines().map(codec::decode).collect()
    }

    /// Rewrite the whole file from the given records (truncate + overwrite).
    fn write_all(&self, subscriptions: &[Subscription]) -> Result<()> {
        let mut records = String::new();
        for subscription in subscriptions {
            records.push_str(&codec::encode(subscription));
        }
        fs::write(&self.path, records)?;
        Ok(())
    }
}

//! Validation layer in front of the subscription store.

use crate::catalog::ProductCatalog;
use crate::error::{Result, SubscriptionError};
use crate::identity::IdentityService;
use crate::storage::SubscriptionFileStorage;
use crate::types::{Asin, CustomerId, Subscription, SubscriptionId, SubscriptionInput};
use tracing::debug;

/// Subscribe and Save service.
///
/// Validates that the customer exists and that the product exists and is
/// subscribable before any record is written. Validation failures never
/// touch the backing file. The lookup collaborators are injected via the
/// [`IdentityService`] and [`ProductCatalog`] traits.
pub struct SubscriptionService<I, C> {
    identity: I,
    catalog: C,
    storage: SubscriptionFileStorage,
}

impl<I, C> SubscriptionService<I, C>
where
    I: IdentityService,
    C: ProductCatalog,
{
    pub fn new(identity: I, catalog: C, storage: SubscriptionFileStorage) -> Self {
        Self {
            identity,
            catalog,
            storage,
        }
    }

    /// Subscribe a customer to a product at the given frequency.
    ///
    /// Fails with [`SubscriptionError::UnknownCustomer`] or
    /// [`SubscriptionError::UnknownAsin`] if either lookup comes back
    /// empty, and with [`SubscriptionError::ProductNotSubscribable`] if
    /// the product is not eligible. A duplicate (customer, ASIN) pair
    /// propagates the store's [`SubscriptionError::SubscriptionExists`]
    /// untranslated.
    pub fn subscribe(
        &self,
        customer_id: CustomerId,
        asin: Asin,
        frequency: u32,
    ) -> Result<Subscription> {
        if self.identity.find_customer_by_id(&customer_id)?.is_none() {
            debug!(customer = %customer_id, "rejecting subscribe: unknown customer");
            return Err(SubscriptionError::UnknownCustomer(customer_id));
        }

        let product = match self.catalog.find_product_by_asin(&asin)? {
            Some(product) => product,
            None => {
                debug!(asin = %asin, "rejecting subscribe: unknown ASIN");
                return Err(SubscriptionError::UnknownAsin(asin));
            }
        };
        if !product.subscribable {
            debug!(asin = %asin, "rejecting subscribe: product not subscribable");
            return Err(SubscriptionError::ProductNotSubscribable(asin));
        }

        self.storage
            .create(SubscriptionInput::new(customer_id, asin, frequency))
    }

    /// Get a subscription by id. Passthrough to the store.
    pub fn get_subscription(&self, id: &SubscriptionId) -> Result<Option<Subscription>> {
        self.storage.get_by_id(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Customer, Product};
    use std::fs;
    use tempfile::TempDir;

    /// In-memory identity double: knows a fixed set of customer IDs.
    struct StaticIdentity(Vec<CustomerId>);

    impl IdentityService for StaticIdentity {
        fn find_customer_by_id(&self, customer_id: &CustomerId) -> Result<Option<Customer>> {
            Ok(self.0.iter().find(|id| *id == customer_id).map(|id| Customer {
                id: id.clone(),
            }))
        }
    }

    /// In-memory catalog double: a fixed set of products.
    struct StaticCatalog(Vec<Product>);

    impl ProductCatalog for StaticCatalog {
        fn find_product_by_asin(&self, asin: &Asin) -> Result<Option<Product>> {
            Ok(self.0.iter().find(|p| &p.asin == asin).cloned())
        }
    }

    const CUSTOMER: &str = "amzn1.account.AEZI3A027560538W420H09ACTDP2";

    fn service(dir: &TempDir) -> SubscriptionService<StaticIdentity, StaticCatalog> {
        let path = dir.path().join("subscriptions.csv");
        fs::write(&path, "").unwrap();

        let identity = StaticIdentity(vec![CustomerId::new(CUSTOMER)]);
        let catalog = StaticCatalog(vec![
            Product {
                asin: Asin::new("B00006IEJB"),
                title: "Crayola 64ct Crayons".to_string(),
                subscribable: true,
            },
            Product {
                asin: Asin::new("B07R5QD598"),
                title: "Utopia Bedding Comforter".to_string(),
                subscribable: false,
            },
        ]);
        SubscriptionService::new(identity, catalog, SubscriptionFileStorage::new(path))
    }

    #[test]
    fn test_subscribe_valid_customer_and_product() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);

        let subscription = service
            .subscribe(CustomerId::new(CUSTOMER), Asin::new("B00006IEJB"), 2)
            .unwrap();

        assert!(!subscription.id.is_empty());
        assert_eq!(subscription.customer_id, CustomerId::new(CUSTOMER));
        assert_eq!(subscription.asin, Asin::new("B00006IEJB"));
        assert_eq!(subscription.frequency, 2);
    }

    #[test]
    fn test_subscribe_unknown_customer() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);

        let result = service.subscribe(CustomerId::new("12345678"), Asin::new("B00006IEJB"), 1);
        assert!(matches!(result, Err(SubscriptionError::UnknownCustomer(_))));
    }

    #[test]
    fn test_subscribe_unknown_asin_message_mentions_asin() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);

        let err = service
            .subscribe(CustomerId::new(CUSTOMER), Asin::new("12345678"), 1)
            .unwrap_err();
        assert!(err.to_string().contains("ASIN"), "unhelpful message: {err}");
    }

    #[test]
    fn test_subscribe_unsubscribable_product() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);

        let result = service.subscribe(CustomerId::new(CUSTOMER), Asin::new("B07R5QD598"), 1);
        assert!(matches!(
            result,
            Err(SubscriptionError::ProductNotSubscribable(_))
        ));
    }

    #[test]
    fn test_duplicate_pair_propagates_from_store() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);

        service
            .subscribe(CustomerId::new(CUSTOMER), Asin::new("B00006IEJB"), 2)
            .unwrap();
        let result = service.subscribe(CustomerId::new(CUSTOMER), Asin::new("B00006IEJB"), 3);

        assert!(matches!(
            result,
            Err(SubscriptionError::SubscriptionExists { .. })
        ));
    }

    #[test]
    fn test_get_subscription_unknown_id_is_none() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);

        let result = service
            .get_subscription(&SubscriptionId::new("not a valid subscription ID"))
            .unwrap();
        assert!(result.is_none());
    }
}

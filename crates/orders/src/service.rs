//! Caller-facing operations.
//!
//! `FoodService` is what a front end (CLI, HTTP handler, tool router) talks
//! to. It times each call, counts outcomes per operation and logs failures;
//! the actual rules live in [`FoodCatalog`] and [`OrderLifecycle`].

use crate::catalog::FoodCatalog;
use crate::error::Result;
use crate::lifecycle::OrderLifecycle;
use crate::outcome::{Cancellation, CommentUpdate, FoodMatches, Outcome, StatusReport};
use crate::store::RecordStore;
use foodshare_core::config::SearchConfig;
use foodshare_telemetry::{metrics, Timer};
use std::sync::Arc;

/// Settings for [`FoodService`].
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Tolerance used when a search does not specify one.
    pub default_max_distance: i64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            default_max_distance: 1,
        }
    }
}

impl From<&SearchConfig> for ServiceConfig {
    fn from(config: &SearchConfig) -> Self {
        Self {
            default_max_distance: config.default_max_distance,
        }
    }
}

/// Food search and order operations over one shared store.
#[derive(Clone)]
pub struct FoodService {
    catalog: FoodCatalog,
    lifecycle: OrderLifecycle,
    config: ServiceConfig,
}

impl FoodService {
    pub fn new(store: Arc<dyn RecordStore>, config: ServiceConfig) -> Self {
        Self {
            catalog: FoodCatalog::new(Arc::clone(&store)),
            lifecycle: OrderLifecycle::new(store),
            config,
        }
    }

    /// Fuzzy search by food and/or restaurant name.
    ///
    /// `max_distance` defaults to the configured tolerance.
    pub fn search_food(
        &self,
        food_name: Option<&str>,
        restaurant_name: Option<&str>,
        max_distance: Option<i64>,
    ) -> Result<Outcome<FoodMatches>> {
        let max_distance = max_distance.unwrap_or(self.config.default_max_distance);
        track("search_food", || self.catalog.search(food_name, restaurant_name, max_distance))
    }

    /// Cancel an order still in preparation.
    pub fn cancel_order(&self, order_id: i64, phone_number: &str) -> Result<Outcome<Cancellation>> {
        track("cancel_order", || self.lifecycle.cancel(order_id, phone_number))
    }

    /// Overwrite the comment on an order.
    pub fn comment_order(&self, order_id: i64, person_name: &str, comment: &str) -> Result<Outcome<CommentUpdate>> {
        track("comment_order", || self.lifecycle.comment(order_id, person_name, comment))
    }

    /// Look up an order's status.
    pub fn check_order_status(&self, order_id: i64) -> Result<Outcome<StatusReport>> {
        track("check_order_status", || self.lifecycle.check_status(order_id))
    }
}

fn track<T>(operation: &'static str, f: impl FnOnce() -> Result<Outcome<T>>) -> Result<Outcome<T>> {
    let _span = tracing::debug_span!("operation", name = operation).entered();
    let _timer = Timer::start(format!("orders.{}.duration_ms", operation));

    let result = f();
    match &result {
        Ok(outcome) => {
            metrics().increment(&format!("orders.{}.{}", operation, outcome.kind()));
            tracing::debug!(outcome = outcome.kind(), "Operation finished");
        }
        Err(e) => {
            metrics().increment(&format!("orders.{}.storage_failure", operation));
            tracing::error!(error = %e, "Operation failed");
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Food, Order, OrderStatus};
    use crate::store::{MemoryStore, StoreError, Transition};

    fn service() -> FoodService {
        let store = MemoryStore::new(
            vec![Food {
                id: 1,
                food_name: "Pad Thai".to_string(),
                food_category: "Noodles".to_string(),
                restaurant_name: "Thai Palace".to_string(),
                price: 12.5,
            }],
            vec![Order {
                id: 10,
                person_phone_number: "555-0100".to_string(),
                status: OrderStatus::Preparation,
                comment: None,
            }],
        )
        .unwrap();
        FoodService::new(Arc::new(store), ServiceConfig::default())
    }

    /// A store whose every call fails.
    struct BrokenStore;

    impl RecordStore for BrokenStore {
        fn list_foods(&self) -> std::result::Result<Vec<Food>, StoreError> {
            Err(StoreError::LockPoisoned)
        }

        fn order(&self, _: i64) -> std::result::Result<Option<Order>, StoreError> {
            Err(StoreError::LockPoisoned)
        }

        fn set_order_status(&self, _: i64, _: OrderStatus) -> std::result::Result<bool, StoreError> {
            Err(StoreError::LockPoisoned)
        }

        fn set_order_comment(&self, _: i64, _: &str) -> std::result::Result<bool, StoreError> {
            Err(StoreError::LockPoisoned)
        }

        fn transition_order_status(
            &self,
            _: i64,
            _: Option<&str>,
            _: &OrderStatus,
            _: OrderStatus,
        ) -> std::result::Result<Transition, StoreError> {
            Err(StoreError::LockPoisoned)
        }
    }

    #[test]
    fn test_search_uses_default_distance() {
        let service = service();
        let outcome = service.search_food(Some("pad thia"), None, None).unwrap();
        assert_eq!(outcome.success().unwrap().len(), 1);

        let strict = FoodService::new(
            Arc::new(MemoryStore::default()),
            ServiceConfig {
                default_max_distance: -1,
            },
        );
        assert!(matches!(strict.search_food(Some("x"), None, None).unwrap(), Outcome::InvalidInput(_)));
    }

    #[test]
    fn test_operations_count_outcomes() {
        let service = service();
        let before = metrics().counter("orders.check_order_status.not_found");
        service.check_order_status(999).unwrap();
        assert!(metrics().counter("orders.check_order_status.not_found") > before);
    }

    #[test]
    fn test_full_flow() {
        let service = service();
        assert_eq!(
            service.check_order_status(10).unwrap().to_string(),
            "Order ID 10 is currently in 'preparation' status."
        );
        assert!(service.comment_order(10, "Ada", "no peanuts").unwrap().is_success());
        assert!(service.cancel_order(10, "555-0100").unwrap().is_success());
        assert_eq!(
            service.check_order_status(10).unwrap().to_string(),
            "Order ID 10 is currently in 'canceled' status."
        );
    }

    #[test]
    fn test_storage_failures_propagate() {
        let service = FoodService::new(Arc::new(BrokenStore), ServiceConfig::default());
        assert!(service.search_food(Some("pad thai"), None, Some(1)).is_err());
        assert!(service.cancel_order(1, "555-0100").is_err());
        assert!(service.comment_order(1, "Ada", "hi").is_err());
        assert!(service.check_order_status(1).is_err());
    }

    #[test]
    fn test_invalid_input_never_reaches_store() {
        let service = FoodService::new(Arc::new(BrokenStore), ServiceConfig::default());
        assert!(matches!(
            service.search_food(Some("pad thai"), None, Some(-3)).unwrap(),
            Outcome::InvalidInput(_)
        ));
        assert!(matches!(service.cancel_order(1, "").unwrap(), Outcome::InvalidInput(_)));
        assert!(matches!(service.comment_order(1, " ", "hi").unwrap(), Outcome::InvalidInput(_)));
    }
}

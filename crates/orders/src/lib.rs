//! Food search and order lifecycle services for FoodShare.
//!
//! - [`store`]: the record store contract with in-memory and JSON file backends
//! - [`FoodCatalog`]: fuzzy food/restaurant search over stored foods
//! - [`OrderLifecycle`]: guarded cancellation, comments and status lookup
//! - [`FoodService`]: the four caller-facing operations in one place
//!
//! # Example
//!
//! ```rust
//! use foodshare_orders::model::{Food, Order, OrderStatus};
//! use foodshare_orders::store::MemoryStore;
//! use foodshare_orders::{FoodService, ServiceConfig};
//! use std::sync::Arc;
//!
//! let store = MemoryStore::new(
//!     vec![Food {
//!         id: 1,
//!         food_name: "Pad Thai".into(),
//!         food_category: "Noodles".into(),
//!         restaurant_name: "Thai Palace".into(),
//!         price: 12.5,
//!     }],
//!     vec![Order {
//!         id: 7,
//!         person_phone_number: "555-0100".into(),
//!         status: OrderStatus::Preparation,
//!         comment: None,
//!     }],
//! )
//! .unwrap();
//! let service = FoodService::new(Arc::new(store), ServiceConfig::default());
//!
//! let hits = service.search_food(Some("pad tai"), None, None).unwrap();
//! assert_eq!(hits.success().unwrap().len(), 1);
//!
//! let canceled = service.cancel_order(7, "555-0100").unwrap();
//! assert_eq!(canceled.to_string(), "Order ID 7 from 555-0100 has been successfully canceled.");
//! ```

pub mod catalog;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod outcome;
pub mod service;
pub mod store;

pub use catalog::FoodCatalog;
pub use error::{OrderError, Result};
pub use lifecycle::OrderLifecycle;
pub use outcome::Outcome;
pub use service::{FoodService, ServiceConfig};

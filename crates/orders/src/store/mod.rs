//! Record store for foods and orders.
//!
//! The [`RecordStore`] trait is the only way the search and lifecycle code
//! reaches data. Every call acquires and releases its own lock guard, so no
//! operation can leak a held store across an early return.

use crate::model::{Food, Order, OrderStatus};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;

pub mod file;
pub mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Errors raised by a store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be read or written.
    #[error("I/O error on {path}: {source}", path = .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The backing data could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// The data violates a store invariant.
    #[error("Corrupted store: {0}")]
    Corrupted(String),
    /// A writer panicked while holding the store lock.
    #[error("Store lock poisoned")]
    LockPoisoned,
}

/// Result of an atomic conditional status update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The order was in the expected state and now holds the new one.
    Applied,
    /// No order matched the id (and owner, when given).
    Missing,
    /// The order exists but was in another state; nothing was written.
    Rejected(OrderStatus),
}

/// Access contract for food and order records.
pub trait RecordStore: Send + Sync {
    /// Every food record, in store order.
    fn list_foods(&self) -> Result<Vec<Food>, StoreError>;

    /// Point read of one order.
    fn order(&self, order_id: i64) -> Result<Option<Order>, StoreError>;

    /// Overwrite an order's status. Returns `false` when the id is unknown.
    fn set_order_status(&self, order_id: i64, status: OrderStatus) -> Result<bool, StoreError>;

    /// Overwrite an order's comment. Returns `false` when the id is unknown.
    fn set_order_comment(&self, order_id: i64, comment: &str) -> Result<bool, StoreError>;

    /// Move an order from `from` to `to` in one step, optionally requiring
    /// `owner_phone` to match. The check and the write happen under the
    /// same lock, so concurrent callers cannot both observe `from`.
    fn transition_order_status(
        &self,
        order_id: i64,
        owner_phone: Option<&str>,
        from: &OrderStatus,
        to: OrderStatus,
    ) -> Result<Transition, StoreError>;

    /// Status of an order, or `None` when the id is unknown.
    fn order_status(&self, order_id: i64) -> Result<Option<OrderStatus>, StoreError> {
        Ok(self.order(order_id)?.map(|order| order.status))
    }

    /// Status of an order only if it belongs to `phone_number`.
    fn order_status_for_owner(&self, order_id: i64, phone_number: &str) -> Result<Option<OrderStatus>, StoreError> {
        Ok(self
            .order(order_id)?
            .filter(|order| order.person_phone_number == phone_number)
            .map(|order| order.status))
    }

    /// Whether an order with this id exists.
    fn order_exists(&self, order_id: i64) -> Result<bool, StoreError> {
        Ok(self.order(order_id)?.is_some())
    }
}

/// The full contents of a store, also its on-disk JSON layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tables {
    #[serde(default)]
    pub foods: Vec<Food>,
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl Tables {
    /// Build tables, rejecting duplicate order ids.
    pub fn new(foods: Vec<Food>, orders: Vec<Order>) -> Result<Self, StoreError> {
        let tables = Self { foods, orders };
        tables.check()?;
        Ok(tables)
    }

    pub(crate) fn check(&self) -> Result<(), StoreError> {
        let mut seen = HashSet::with_capacity(self.orders.len());
        match self.orders.iter().find(|order| !seen.insert(order.id)) {
            Some(order) => Err(StoreError::Corrupted(format!("duplicate order id {}", order.id))),
            None => Ok(()),
        }
    }

    fn order(&self, order_id: i64) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == order_id)
    }

    fn order_mut(&mut self, order_id: i64) -> Option<&mut Order> {
        self.orders.iter_mut().find(|order| order.id == order_id)
    }

    fn set_status(&mut self, order_id: i64, status: OrderStatus) -> bool {
        self.order_mut(order_id).map(|order| order.status = status).is_some()
    }

    fn set_comment(&mut self, order_id: i64, comment: &str) -> bool {
        self.order_mut(order_id)
            .map(|order| order.comment = Some(comment.to_string()))
            .is_some()
    }

    fn transition(&mut self, order_id: i64, owner_phone: Option<&str>, from: &OrderStatus, to: OrderStatus) -> Transition {
        let order = self
            .order_mut(order_id)
            .filter(|order| owner_phone.is_none_or(|phone| order.person_phone_number == phone));

        match order {
            None => Transition::Missing,
            Some(order) if &order.status == from => {
                order.status = to;
                Transition::Applied
            }
            Some(order) => Transition::Rejected(order.status.clone()),
        }
    }
}

/// Tables behind one in-process lock, used by [`MemoryStore`].
#[derive(Debug, Default)]
pub(crate) struct SharedTables {
    inner: RwLock<Tables>,
}

impl SharedTables {
    pub(crate) fn new(tables: Tables) -> Self {
        Self {
            inner: RwLock::new(tables),
        }
    }

    pub(crate) fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, StoreError> {
        self.inner.read().map_err(|_| StoreError::LockPoisoned)
    }

    pub(crate) fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, StoreError> {
        self.inner.write().map_err(|_| StoreError::LockPoisoned)
    }

    pub(crate) fn list_foods(&self) -> Result<Vec<Food>, StoreError> {
        Ok(self.read()?.foods.clone())
    }

    pub(crate) fn order(&self, order_id: i64) -> Result<Option<Order>, StoreError> {
        Ok(self.read()?.order(order_id).cloned())
    }
}

//! In-memory store backend.
//!
//! Holds everything behind one `RwLock`; used for tests, demos and callers
//! that load records from elsewhere.

use super::{RecordStore, SharedTables, StoreError, Tables, Transition};
use crate::model::{Food, Order, OrderStatus};

/// In-memory record store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: SharedTables,
}

impl MemoryStore {
    /// Create a store from food and order records.
    pub fn new(foods: Vec<Food>, orders: Vec<Order>) -> Result<Self, StoreError> {
        Ok(Self::from_tables(Tables::new(foods, orders)?))
    }

    /// Create a store from already validated tables.
    pub fn from_tables(tables: Tables) -> Self {
        Self {
            tables: SharedTables::new(tables),
        }
    }

    /// Copy of the current contents.
    pub fn snapshot(&self) -> Result<Tables, StoreError> {
        Ok(self.tables.read()?.clone())
    }
}

impl RecordStore for MemoryStore {
    fn list_foods(&self) -> Result<Vec<Food>, StoreError> {
        self.tables.list_foods()
    }

    fn order(&self, order_id: i64) -> Result<Option<Order>, StoreError> {
        self.tables.order(order_id)
    }

    fn set_order_status(&self, order_id: i64, status: OrderStatus) -> Result<bool, StoreError> {
        Ok(self.tables.write()?.set_status(order_id, status))
    }

    fn set_order_comment(&self, order_id: i64, comment: &str) -> Result<bool, StoreError> {
        Ok(self.tables.write()?.set_comment(order_id, comment))
    }

    fn transition_order_status(
        &self,
        order_id: i64,
        owner_phone: Option<&str>,
        from: &OrderStatus,
        to: OrderStatus,
    ) -> Result<Transition, StoreError> {
        Ok(self.tables.write()?.transition(order_id, owner_phone, from, to))
    }
}

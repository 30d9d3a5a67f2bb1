//! Records held by the store and the derived search result.

use foodshare_search::MenuEntry;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A menu item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub id: i64,
    pub food_name: String,
    pub food_category: String,
    pub restaurant_name: String,
    pub price: f64,
}

impl MenuEntry for Food {
    fn food_name(&self) -> &str {
        &self.food_name
    }

    fn restaurant_name(&self) -> &str {
        &self.restaurant_name
    }
}

/// Lifecycle state of an order.
///
/// Only `preparation -> canceled` is ever written by this crate. Any other
/// status set by the ordering pipeline (`in_transit`, `delivered`, ...) is
/// carried through verbatim as [`OrderStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Preparation,
    Canceled,
    Other(String),
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Preparation => "preparation",
            OrderStatus::Canceled => "canceled",
            OrderStatus::Other(status) => status,
        }
    }
}

impl From<String> for OrderStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "preparation" => OrderStatus::Preparation,
            "canceled" => OrderStatus::Canceled,
            _ => OrderStatus::Other(value),
        }
    }
}

impl From<&str> for OrderStatus {
    fn from(value: &str) -> Self {
        OrderStatus::from(value.to_string())
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Other(status) => status,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A customer order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub person_phone_number: String,
    pub status: OrderStatus,
    #[serde(default)]
    pub comment: Option<String>,
}

/// One food search hit, built per call and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "id")]
    pub record_id: i64,
    pub food_name: String,
    pub food_category: String,
    pub restaurant_name: String,
    pub price: f64,
    pub edit_distance: u32,
}

impl MatchResult {
    pub fn new(food: &Food, edit_distance: u32) -> Self {
        Self {
            record_id: food.id,
            food_name: food.food_name.clone(),
            food_category: food.food_category.clone(),
            restaurant_name: food.restaurant_name.clone(),
            price: food.price,
            edit_distance,
        }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} ({}) at {} - {:.2} [distance {}]",
            self.record_id,
            self.food_name,
            self.food_category,
            self.restaurant_name,
            self.price,
            self.edit_distance
        )
    }
}

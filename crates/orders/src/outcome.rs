//! Typed results of the caller-facing operations.
//!
//! Not-found and wrong-state answers are ordinary outcomes, not errors.
//! Rendering to a sentence happens only through `Display`, at the edge.

use crate::model::{MatchResult, OrderStatus};
use serde::Serialize;
use std::fmt;

/// Result of a food or order operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", content = "data", rename_all = "snake_case")]
pub enum Outcome<T> {
    /// The operation did what was asked.
    Success(T),
    /// The referenced order does not exist (for this owner).
    NotFound(NotFound),
    /// The order exists but its status forbids the operation.
    InvalidState(InvalidState),
    /// Arguments were rejected before any storage access.
    InvalidInput(String),
}

impl<T> Outcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Success payload, if any.
    pub fn success(&self) -> Option<&T> {
        match self {
            Outcome::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Stable snake_case label, used for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Outcome::Success(_) => "success",
            Outcome::NotFound(_) => "not_found",
            Outcome::InvalidState(_) => "invalid_state",
            Outcome::InvalidInput(_) => "invalid_input",
        }
    }
}

impl<T: fmt::Display> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(value) => fmt::Display::fmt(value, f),
            Outcome::NotFound(not_found) => fmt::Display::fmt(not_found, f),
            Outcome::InvalidState(invalid) => fmt::Display::fmt(invalid, f),
            Outcome::InvalidInput(message) => write!(f, "Invalid input: {}", message),
        }
    }
}

/// Writes "Order ID 7" or "Order ID 7 from 555-0100".
fn write_order_ref(f: &mut fmt::Formatter<'_>, order_id: i64, phone_number: Option<&str>) -> fmt::Result {
    write!(f, "Order ID {}", order_id)?;
    if let Some(phone) = phone_number {
        write!(f, " from {}", phone)?;
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotFound {
    pub order_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_order_ref(f, self.order_id, self.phone_number.as_deref())?;
        f.write_str(" does not exist.")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvalidState {
    pub order_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Past participle of the refused action, e.g. "canceled".
    pub action: &'static str,
    pub current: OrderStatus,
}

impl fmt::Display for InvalidState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_order_ref(f, self.order_id, self.phone_number.as_deref())?;
        write!(
            f,
            " cannot be {} as it is in '{}' status.",
            self.action, self.current
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cancellation {
    pub order_id: i64,
    pub phone_number: String,
}

impl fmt::Display for Cancellation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_order_ref(f, self.order_id, Some(&self.phone_number))?;
        f.write_str(" has been successfully canceled.")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentUpdate {
    pub order_id: i64,
    pub person_name: String,
}

impl fmt::Display for CommentUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Comment for Order ID {} from {} has been updated.",
            self.order_id, self.person_name
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub order_id: i64,
    pub status: OrderStatus,
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order ID {} is currently in '{}' status.",
            self.order_id, self.status
        )
    }
}

/// Food search hits, closest first.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct FoodMatches(pub Vec<MatchResult>);

impl FoodMatches {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MatchResult> {
        self.0.iter()
    }
}

impl fmt::Display for FoodMatches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("No matching foods found.");
        }
        for (i, hit) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", hit)?;
        }
        Ok(())
    }
}

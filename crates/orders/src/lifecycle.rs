//! Order lifecycle: cancellation, comments and status lookup.
//!
//! The only transition performed here is `preparation -> canceled`, and it
//! is applied by the store as one conditional update keyed on id, owner and
//! current status. Of any number of concurrent cancels for one order, at
//! most one succeeds; the rest see `canceled` and get `InvalidState`.

use crate::error::Result;
use crate::model::OrderStatus;
use crate::outcome::{Cancellation, CommentUpdate, InvalidState, NotFound, Outcome, StatusReport};
use crate::store::{RecordStore, Transition};
use foodshare_core::validation::Validator;
use foodshare_telemetry::Event;
use serde_json::json;
use std::sync::Arc;

/// Guards order mutations and answers status queries.
#[derive(Clone)]
pub struct OrderLifecycle {
    store: Arc<dyn RecordStore>,
}

impl OrderLifecycle {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Cancel an order owned by `phone_number` if it is still in preparation.
    ///
    /// Outcomes:
    /// - `Success` when the order moved to `canceled`
    /// - `NotFound` when no order has this id *and* phone number
    /// - `InvalidState` naming the current status otherwise; nothing is written
    /// - `InvalidInput` for a blank phone number
    pub fn cancel(&self, order_id: i64, phone_number: &str) -> Result<Outcome<Cancellation>> {
        let validation = Validator::new().required("phone_number", phone_number).validate();
        if !validation.is_valid() {
            return Ok(Outcome::InvalidInput(validation.message()));
        }

        let transition = self.store.transition_order_status(
            order_id,
            Some(phone_number),
            &OrderStatus::Preparation,
            OrderStatus::Canceled,
        )?;

        let outcome = match transition {
            Transition::Applied => {
                Event::new("order.canceled", json!({ "order_id": order_id })).log();
                Outcome::Success(Cancellation {
                    order_id,
                    phone_number: phone_number.to_string(),
                })
            }
            Transition::Missing => Outcome::NotFound(NotFound {
                order_id,
                phone_number: Some(phone_number.to_string()),
            }),
            Transition::Rejected(current) => {
                tracing::info!(order_id, status = %current, "Cancellation refused");
                Outcome::InvalidState(InvalidState {
                    order_id,
                    phone_number: Some(phone_number.to_string()),
                    action: "canceled",
                    current,
                })
            }
        };

        Ok(outcome)
    }

    /// Replace the comment on an order, whatever its status.
    ///
    /// Outcomes: `Success` echoing `person_name`, `NotFound` (nothing
    /// written), or `InvalidInput` for a blank person name. The comment text
    /// itself is not validated.
    pub fn comment(&self, order_id: i64, person_name: &str, comment: &str) -> Result<Outcome<CommentUpdate>> {
        let validation = Validator::new().required("person_name", person_name).validate();
        if !validation.is_valid() {
            return Ok(Outcome::InvalidInput(validation.message()));
        }

        if !self.store.set_order_comment(order_id, comment)? {
            return Ok(Outcome::NotFound(NotFound {
                order_id,
                phone_number: None,
            }));
        }

        Event::new(
            "order.commented",
            json!({ "order_id": order_id, "person_name": person_name, "length": comment.chars().count() }),
        )
        .log();

        Ok(Outcome::Success(CommentUpdate {
            order_id,
            person_name: person_name.to_string(),
        }))
    }

    /// Current status of an order: `Success` with the stored status, or `NotFound`.
    pub fn check_status(&self, order_id: i64) -> Result<Outcome<StatusReport>> {
        let outcome = match self.store.order_status(order_id)? {
            Some(status) => Outcome::Success(StatusReport { order_id, status }),
            None => Outcome::NotFound(NotFound {
                order_id,
                phone_number: None,
            }),
        };
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Order;
    use crate::store::MemoryStore;

    fn order(id: i64, phone: &str, status: &str, comment: Option<&str>) -> Order {
        Order {
            id,
            person_phone_number: phone.to_string(),
            status: OrderStatus::from(status),
            comment: comment.map(str::to_string),
        }
    }

    fn setup() -> (Arc<MemoryStore>, OrderLifecycle) {
        let store = Arc::new(
            MemoryStore::new(
                vec![],
                vec![
                    order(1, "555-0100", "preparation", None),
                    order(2, "555-0101", "in_transit", Some("leave at door")),
                    order(3, "555-0102", "delivered", None),
                ],
            )
            .unwrap(),
        );
        let lifecycle = OrderLifecycle::new(store.clone());
        (store, lifecycle)
    }

    #[test]
    fn test_cancel_then_cancel_again() {
        let (store, lifecycle) = setup();

        let first = lifecycle.cancel(1, "555-0100").unwrap();
        assert!(first.is_success());
        assert_eq!(store.order_status(1).unwrap(), Some(OrderStatus::Canceled));

        let second = lifecycle.cancel(1, "555-0100").unwrap();
        match second {
            Outcome::InvalidState(state) => assert_eq!(state.current, OrderStatus::Canceled),
            other => panic!("expected InvalidState, got {:?}", other),
        }
    }

    #[test]
    fn test_cancel_wrong_phone_is_not_found() {
        let (store, lifecycle) = setup();

        // Ownership is checked before status, even for a non-cancelable order
        for id in [1, 3] {
            let outcome = lifecycle.cancel(id, "555-9999").unwrap();
            assert_eq!(
                outcome,
                Outcome::NotFound(NotFound {
                    order_id: id,
                    phone_number: Some("555-9999".to_string()),
                })
            );
        }
        assert_eq!(store.order_status(1).unwrap(), Some(OrderStatus::Preparation));
    }

    #[test]
    fn test_cancel_rejected_outside_preparation() {
        let (store, lifecycle) = setup();

        let outcome = lifecycle.cancel(3, "555-0102").unwrap();
        assert_eq!(
            outcome.to_string(),
            "Order ID 3 from 555-0102 cannot be canceled as it is in 'delivered' status."
        );
        assert_eq!(store.order_status(3).unwrap(), Some(OrderStatus::from("delivered")));
    }

    #[test]
    fn test_cancel_unknown_order() {
        let (_, lifecycle) = setup();
        let outcome = lifecycle.cancel(42, "555-0100").unwrap();
        assert_eq!(outcome.to_string(), "Order ID 42 from 555-0100 does not exist.");
    }

    #[test]
    fn test_cancel_blank_phone_is_invalid_input() {
        let (store, lifecycle) = setup();
        let outcome = lifecycle.cancel(1, "  ").unwrap();
        assert!(matches!(outcome, Outcome::InvalidInput(_)));
        assert_eq!(store.order_status(1).unwrap(), Some(OrderStatus::Preparation));
    }

    #[test]
    fn test_concurrent_cancels_single_winner() {
        const ATTEMPTS: usize = 16;
        let (store, lifecycle) = setup();

        let outcomes: Vec<Outcome<Cancellation>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..ATTEMPTS)
                .map(|_| scope.spawn(|| lifecycle.cancel(1, "555-0100").unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let successes = outcomes.iter().filter(|o| o.is_success()).count();
        let rejections = outcomes
            .iter()
            .filter(|o| matches!(o, Outcome::InvalidState(s) if s.current == OrderStatus::Canceled))
            .count();

        assert_eq!(successes, 1);
        assert_eq!(rejections, ATTEMPTS - 1);
        assert_eq!(store.order_status(1).unwrap(), Some(OrderStatus::Canceled));
    }

    #[test]
    fn test_comment_overwrites_previous() {
        let (store, lifecycle) = setup();

        let outcome = lifecycle.comment(2, "Ada", "ring the bell").unwrap();
        assert_eq!(outcome.to_string(), "Comment for Order ID 2 from Ada has been updated.");

        let order = store.order(2).unwrap().unwrap();
        assert_eq!(order.comment.as_deref(), Some("ring the bell"));
        // Status is untouched by comments
        assert_eq!(order.status, OrderStatus::from("in_transit"));
    }

    #[test]
    fn test_comment_on_any_status() {
        let (store, lifecycle) = setup();
        assert!(lifecycle.comment(3, "Bo", "").unwrap().is_success());
        assert_eq!(store.order(3).unwrap().unwrap().comment.as_deref(), Some(""));
    }

    #[test]
    fn test_comment_unknown_order_writes_nothing() {
        let (store, lifecycle) = setup();
        let before = store.snapshot().unwrap();

        let outcome = lifecycle.comment(42, "Ada", "hello").unwrap();
        assert_eq!(outcome.to_string(), "Order ID 42 does not exist.");
        assert_eq!(store.snapshot().unwrap(), before);
    }

    #[test]
    fn test_comment_blank_person_is_invalid_input() {
        let (_, lifecycle) = setup();
        let outcome = lifecycle.comment(2, "", "hello").unwrap();
        assert!(matches!(outcome, Outcome::InvalidInput(message) if message.contains("person_name")));
    }

    #[test]
    fn test_check_status() {
        let (_, lifecycle) = setup();

        let outcome = lifecycle.check_status(2).unwrap();
        assert_eq!(outcome.success().unwrap().status.as_str(), "in_transit");

        let missing = lifecycle.check_status(42).unwrap();
        assert!(matches!(missing, Outcome::NotFound(_)));
    }
}

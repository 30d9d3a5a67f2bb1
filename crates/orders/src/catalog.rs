//! Fuzzy food search over the record store.

use crate::error::Result;
use crate::model::MatchResult;
use crate::outcome::{FoodMatches, Outcome};
use crate::store::RecordStore;
use foodshare_core::validation::Validator;
use foodshare_search::{search, FoodQuery, SearchError, WeightProfile};
use std::sync::Arc;

/// Searches every stored food by food and/or restaurant name.
#[derive(Clone)]
pub struct FoodCatalog {
    store: Arc<dyn RecordStore>,
    profiles: Vec<WeightProfile>,
}

impl FoodCatalog {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            profiles: WeightProfile::ALL.to_vec(),
        }
    }

    /// Compare names under `profiles` only (all three by default).
    pub fn with_profiles(mut self, profiles: &[WeightProfile]) -> Self {
        if !profiles.is_empty() {
            self.profiles = profiles.to_vec();
        }
        self
    }

    /// Foods within `max_distance` of the query, closest first.
    ///
    /// A negative `max_distance` is answered with `InvalidInput` before the
    /// store is read. Read-only.
    pub fn search(
        &self,
        food_name: Option<&str>,
        restaurant_name: Option<&str>,
        max_distance: i64,
    ) -> Result<Outcome<FoodMatches>> {
        let validation = Validator::new().at_least("max_distance", max_distance, 0).validate();
        if !validation.is_valid() {
            return Ok(Outcome::InvalidInput(validation.message()));
        }

        let query = match FoodQuery::new(food_name, restaurant_name, max_distance) {
            Ok(query) => query.with_profiles(&self.profiles),
            Err(SearchError::InvalidQuery(message)) => return Ok(Outcome::InvalidInput(message)),
        };

        if query.is_empty() {
            tracing::debug!("Food search without food or restaurant name");
            return Ok(Outcome::Success(FoodMatches::default()));
        }

        let foods = self.store.list_foods()?;
        let matches: Vec<MatchResult> = search(&query, &foods)
            .into_iter()
            .map(|hit| MatchResult::new(hit.item, hit.edit_distance))
            .collect();

        tracing::debug!(
            food = ?query.food_name(),
            restaurant = ?query.restaurant_name(),
            max_distance = query.max_distance(),
            scanned = foods.len(),
            matched = matches.len(),
            "Food search completed"
        );

        Ok(Outcome::Success(FoodMatches(matches)))
    }
}

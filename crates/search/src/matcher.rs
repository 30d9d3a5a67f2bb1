//! Fuzzy matching of food and restaurant queries against menu entries.

use crate::distance::{best_distance, WeightProfile};
use crate::error::{Result, SearchError};
use serde::{Deserialize, Serialize};

/// Anything that can be matched by food name and restaurant name.
pub trait MenuEntry {
    /// Name of the dish
    fn food_name(&self) -> &str;
    /// Name of the restaurant serving it
    fn restaurant_name(&self) -> &str;
}

/// Search result with its edit distance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult<T> {
    /// The matched item
    pub item: T,
    /// Edit distance to the query (lower is better)
    pub edit_distance: u32,
}

/// A validated food and/or restaurant query.
///
/// Empty strings count as absent, so `FoodQuery::new(Some(""), None, 1)`
/// matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodQuery {
    food_name: Option<String>,
    restaurant_name: Option<String>,
    max_distance: u32,
    profiles: Vec<WeightProfile>,
}

impl FoodQuery {
    /// Build a query, rejecting a negative or oversized `max_distance`.
    pub fn new(food_name: Option<&str>, restaurant_name: Option<&str>, max_distance: i64) -> Result<Self> {
        if max_distance < 0 {
            return Err(SearchError::InvalidQuery(format!(
                "max_distance must be non-negative, got {}",
                max_distance
            )));
        }
        let max_distance = u32::try_from(max_distance).map_err(|_| {
            SearchError::InvalidQuery(format!("max_distance {} is too large", max_distance))
        })?;

        Ok(Self {
            food_name: present(food_name),
            restaurant_name: present(restaurant_name),
            max_distance,
            profiles: WeightProfile::ALL.to_vec(),
        })
    }

    /// Restrict the cost models used for comparison. An empty slice keeps
    /// the current set.
    pub fn with_profiles(mut self, profiles: &[WeightProfile]) -> Self {
        if !profiles.is_empty() {
            self.profiles = profiles.to_vec();
        }
        self
    }

    /// Food name constraint, if any
    pub fn food_name(&self) -> Option<&str> {
        self.food_name.as_deref()
    }

    /// Restaurant name constraint, if any
    pub fn restaurant_name(&self) -> Option<&str> {
        self.restaurant_name.as_deref()
    }

    /// Largest accepted edit distance
    pub fn max_distance(&self) -> u32 {
        self.max_distance
    }

    /// True when neither name was given; such a query matches nothing.
    pub fn is_empty(&self) -> bool {
        self.food_name.is_none() && self.restaurant_name.is_none()
    }

    /// Reported distance for `entry`, or `None` when it does not match.
    ///
    /// With both names given, each must be within `max_distance` and the
    /// smaller of the two distances is reported.
    pub fn score<T: MenuEntry + ?Sized>(&self, entry: &T) -> Option<u32> {
        let food = self
            .food_name
            .as_deref()
            .map(|q| best_distance(q, entry.food_name(), &self.profiles));
        let restaurant = self
            .restaurant_name
            .as_deref()
            .map(|q| best_distance(q, entry.restaurant_name(), &self.profiles));

        let within = |d: Option<u32>| d.filter(|&d| d <= self.max_distance);

        match (food, restaurant) {
            (Some(food), Some(restaurant)) => {
                let food = within(food)?;
                let restaurant = within(restaurant)?;
                Some(food.min(restaurant))
            }
            (Some(food), None) => within(food),
            (None, Some(restaurant)) => within(restaurant),
            (None, None) => None,
        }
    }
}

fn present(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_owned)
}

/// Match every entry against `query`, closest first.
///
/// Entries with equal distance keep their input order.
///
/// # Example
/// ```
/// use foodshare_search::{search, FoodQuery, MenuEntry};
///
/// struct Dish(&'static str, &'static str);
///
/// impl MenuEntry for Dish {
///     fn food_name(&self) -> &str { self.0 }
///     fn restaurant_name(&self) -> &str { self.1 }
/// }
///
/// let menu = [Dish("Pad Thai", "Thai Palace"), Dish("Sushi Roll", "Tokyo Bar")];
/// let query = FoodQuery::new(Some("pad tai"), None, 1).unwrap();
///
/// let results = search(&query, &menu);
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].item.0, "Pad Thai");
/// ```
pub fn search<'a, T>(query: &FoodQuery, entries: &'a [T]) -> Vec<SearchResult<&'a T>>
where
    T: MenuEntry + Sync,
{
    if query.is_empty() {
        return Vec::new();
    }

    let score = |item: &'a T| {
        query
            .score(item)
            .map(|edit_distance| SearchResult { item, edit_distance })
    };

    #[cfg(feature = "parallel")]
    let mut results: Vec<SearchResult<&'a T>> = {
        use rayon::prelude::*;
        entries.par_iter().filter_map(score).collect()
    };

    #[cfg(not(feature = "parallel"))]
    let mut results: Vec<SearchResult<&'a T>> = entries.iter().filter_map(score).collect();

    // Stable: ties keep store order
    results.sort_by_key(|r| r.edit_distance);
    results
}

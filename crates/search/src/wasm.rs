//! WASM bindings for menu search.

use wasm_bindgen::prelude::*;

/// Weighted edit distance between two strings (case-insensitive).
#[wasm_bindgen]
pub fn edit_distance(a: &str, b: &str, insert: u32, delete: u32, substitute: u32) -> u32 {
    crate::weighted_distance(a, b, crate::Weights::new(insert, delete, substitute))
}

/// Smallest distance from `query` to `candidate` over every cost model.
#[wasm_bindgen]
pub fn fuzzy_distance(query: &str, candidate: &str) -> u32 {
    crate::best_distance(query, candidate, &crate::WeightProfile::ALL).unwrap_or(u32::MAX)
}

/// Search menu items and return matches as JSON.
///
/// # Arguments
/// * `items_json` - JSON array of items with `id`, `food_name` and `restaurant_name`
/// * `food_name` - Food query (empty string for none)
/// * `restaurant_name` - Restaurant query (empty string for none)
/// * `max_distance` - Accepted edit distance
///
/// # Returns
/// JSON array of `{id, edit_distance}` sorted by distance, or `[]` on bad input
#[wasm_bindgen]
pub fn search_menu(items_json: &str, food_name: &str, restaurant_name: &str, max_distance: i32) -> String {
    use serde::{Deserialize, Serialize};

    #[derive(Deserialize)]
    struct Item {
        id: i64,
        food_name: String,
        restaurant_name: String,
    }

    impl crate::MenuEntry for Item {
        fn food_name(&self) -> &str {
            &self.food_name
        }

        fn restaurant_name(&self) -> &str {
            &self.restaurant_name
        }
    }

    #[derive(Serialize)]
    struct Match {
        id: i64,
        edit_distance: u32,
    }

    let items: Vec<Item> = match serde_json::from_str(items_json) {
        Ok(items) => items,
        Err(_) => return "[]".to_string(),
    };

    let query = match crate::FoodQuery::new(Some(food_name), Some(restaurant_name), i64::from(max_distance)) {
        Ok(query) => query,
        Err(_) => return "[]".to_string(),
    };

    let matches: Vec<Match> = crate::search(&query, &items)
        .into_iter()
        .map(|r| Match {
            id: r.item.id,
            edit_distance: r.edit_distance,
        })
        .collect();

    serde_json::to_string(&matches).unwrap_or_else(|_| "[]".to_string())
}

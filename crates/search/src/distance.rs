//! Weighted edit distance.
//!
//! Distances are computed over `char`s after Unicode lowercasing, so
//! `"Pad Thai"` and `"pad thai"` are identical. Insertion means adding a
//! character of the candidate to the query, deletion means dropping a
//! character of the query.

use serde::{Deserialize, Serialize};

/// Per-operation costs for [`weighted_distance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Weights {
    /// Cost of inserting a character
    pub insert: u32,
    /// Cost of deleting a character
    pub delete: u32,
    /// Cost of substituting one character for another
    pub substitute: u32,
}

impl Weights {
    /// Classic Levenshtein costs.
    pub const UNIT: Weights = Weights::new(1, 1, 1);

    /// Create a cost triple in `(insert, delete, substitute)` order.
    pub const fn new(insert: u32, delete: u32, substitute: u32) -> Self {
        Self {
            insert,
            delete,
            substitute,
        }
    }
}

/// The fixed set of cost models a query is compared under.
///
/// Each profile forgives one way users mistype a name; the matcher keeps
/// the cheapest of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeightProfile {
    /// Free insertions: the query may skip characters of the name.
    QuerySubsequence,
    /// Free deletions: the query may carry extra characters.
    QueryNoise,
    /// Plain Levenshtein.
    Standard,
}

impl WeightProfile {
    /// Every profile, in evaluation order.
    pub const ALL: [WeightProfile; 3] = [
        WeightProfile::QuerySubsequence,
        WeightProfile::QueryNoise,
        WeightProfile::Standard,
    ];

    /// Cost triple for this profile.
    pub const fn weights(self) -> Weights {
        match self {
            WeightProfile::QuerySubsequence => Weights::new(0, 1, 1),
            WeightProfile::QueryNoise => Weights::new(1, 0, 1),
            WeightProfile::Standard => Weights::UNIT,
        }
    }

    /// Stable label used in logs and JSON.
    pub const fn label(self) -> &'static str {
        match self {
            WeightProfile::QuerySubsequence => "query-is-subsequence",
            WeightProfile::QueryNoise => "query-has-noise",
            WeightProfile::Standard => "standard",
        }
    }
}

impl std::fmt::Display for WeightProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Case-insensitive weighted edit distance transforming `a` into `b`.
///
/// Costs saturate at `u32::MAX` instead of overflowing.
///
/// # Example
/// ```
/// use foodshare_search::{weighted_distance, Weights};
///
/// assert_eq!(weighted_distance("Pad Tai", "pad thai", Weights::UNIT), 1);
/// assert_eq!(weighted_distance("pad tai", "pad thai", Weights::new(0, 1, 1)), 0);
/// ```
pub fn weighted_distance(a: &str, b: &str, weights: Weights) -> u32 {
    let a = fold(a);
    let b = fold(b);
    distance_chars(&a, &b, weights)
}

/// Minimum distance from `query` to `candidate` over `profiles`.
///
/// Both strings are case-folded once. Returns `None` when `profiles` is empty.
pub fn best_distance(query: &str, candidate: &str, profiles: &[WeightProfile]) -> Option<u32> {
    let query = fold(query);
    let candidate = fold(candidate);
    profiles
        .iter()
        .map(|profile| distance_chars(&query, &candidate, profile.weights()))
        .min()
}

fn fold(s: &str) -> Vec<char> {
    s.to_lowercase().chars().collect()
}

fn distance_chars(a: &[char], b: &[char], weights: Weights) -> u32 {
    let n = b.len();

    // Two rows: prev[j] is the cost of turning a[..i-1] into b[..j]
    let mut prev: Vec<u32> = (0..=n as u32).map(|j| j.saturating_mul(weights.insert)).collect();
    let mut curr = vec![0; n + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = (i as u32).saturating_add(1).saturating_mul(weights.delete);
        for (j, &cb) in b.iter().enumerate() {
            let substitution = if ca == cb { 0 } else { weights.substitute };
            curr[j + 1] = prev[j + 1]
                .saturating_add(weights.delete)
                .min(curr[j].saturating_add(weights.insert))
                .min(prev[j].saturating_add(substitution));
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_string() {
        assert_eq!(weighted_distance("sushi", "sushi", Weights::UNIT), 0);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(weighted_distance("PAD THAI", "pad thai", Weights::UNIT), 0);
        assert_eq!(weighted_distance("Crème Brûlée", "CRÈME BRÛLÉE", Weights::UNIT), 0);
    }

    #[test]
    fn test_unit_single_edits() {
        assert_eq!(weighted_distance("burger", "burgor", Weights::UNIT), 1);
        assert_eq!(weighted_distance("burgr", "burger", Weights::UNIT), 1);
        assert_eq!(weighted_distance("burgers", "burger", Weights::UNIT), 1);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(weighted_distance("", "", Weights::UNIT), 0);
        assert_eq!(weighted_distance("", "taco", Weights::new(2, 1, 1)), 8);
        assert_eq!(weighted_distance("taco", "", Weights::new(1, 3, 1)), 12);
        assert_eq!(weighted_distance("", "taco", WeightProfile::QuerySubsequence.weights()), 0);
    }

    #[test]
    fn test_free_insertions_accept_subsequence() {
        let w = WeightProfile::QuerySubsequence.weights();
        assert_eq!(weighted_distance("pizza", "pizza margherita", w), 0);
        assert_eq!(weighted_distance("pzz", "pizza", w), 0);
        // Deletions still cost
        assert_eq!(weighted_distance("pizzas", "pizza", w), 1);
    }

    #[test]
    fn test_free_deletions_accept_noise() {
        let w = WeightProfile::QueryNoise.weights();
        assert_eq!(weighted_distance("spicy ramen bowl", "ramen", w), 0);
        assert_eq!(weighted_distance("ramn", "ramen", w), 1);
    }

    #[test]
    fn test_substitution_cheaper_than_delete_insert() {
        // Substituting costs 1 even when insert+delete would cost 2
        assert_eq!(weighted_distance("cat", "cut", Weights::UNIT), 1);
        // Expensive substitution falls back to delete + insert
        assert_eq!(weighted_distance("cat", "cut", Weights::new(1, 1, 5)), 2);
    }

    #[test]
    fn test_huge_weights_saturate() {
        assert_eq!(weighted_distance("ab", "", Weights::new(1, u32::MAX, 1)), u32::MAX);
        assert_eq!(weighted_distance("", "abc", Weights::new(u32::MAX, 1, 1)), u32::MAX);
        assert_eq!(weighted_distance("abc", "xyz", Weights::new(1, 1, u32::MAX)), 6);
        assert_eq!(weighted_distance("same", "SAME", Weights::new(u32::MAX, u32::MAX, u32::MAX)), 0);
    }

    #[test]
    fn test_best_distance_takes_minimum() {
        assert_eq!(best_distance("pad tai", "Pad Thai", &WeightProfile::ALL), Some(0));
        assert_eq!(best_distance("pad tai", "Pad Thai", &[WeightProfile::Standard]), Some(1));
        assert_eq!(best_distance("sushi", "Pad Thai", &WeightProfile::ALL), Some(3));
        assert_eq!(best_distance("sushi", "Pad Thai", &[]), None);
    }

    #[test]
    fn test_profile_labels() {
        let labels: Vec<_> = WeightProfile::ALL.iter().map(|p| p.to_string()).collect();
        assert_eq!(labels, ["query-is-subsequence", "query-has-noise", "standard"]);
    }
}

//! Result-set merging and the nearby-search fallback rule.

use std::collections::HashSet;

use crate::models::Place;

/// Text search results below this count trigger the nearby-search fallback.
pub const MIN_TEXT_RESULTS: usize = 5;

/// Whether the primary result set is thin enough to consult nearby search.
pub fn needs_nearby_fallback(primary: &[Place]) -> bool {
    primary.len() < MIN_TEXT_RESULTS
}

/// Append the entries of `secondary` not already present in `primary`.
///
/// Primary entries keep their order and content; appended entries keep the
/// secondary order. The output never holds two entries with the same
/// `place_id`.
pub fn merge_unique(primary: Vec<Place>, secondary: Vec<Place>) -> Vec<Place> {
    let mut seen: HashSet<String> = primary.iter().map(|p| p.place_id.clone()).collect();
    let mut merged = primary;

    for place in secondary {
        if seen.insert(place.place_id.clone()) {
            merged.push(place);
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(id: &str) -> Place {
        Place {
            place_id: id.to_string(),
            name: format!("Place {}", id),
            formatted_address: None,
            vicinity: None,
            rating: None,
            user_ratings_total: 0,
            price_level: None,
            types: Vec::new(),
        }
    }

    fn ids(places: &[Place]) -> Vec<&str> {
        places.iter().map(|p| p.place_id.as_str()).collect()
    }

    #[test]
    fn test_merge_skips_duplicate_ids() {
        let primary = vec![place("a"), place("b")];
        let secondary = vec![place("b"), place("c")];
        let merged = merge_unique(primary, secondary);
        assert_eq!(ids(&merged), ["a", "b", "c"]);
    }

    #[test]
    fn test_merge_preserves_primary_entries() {
        let mut first = place("a");
        first.name = "Text result name".to_string();
        let primary = vec![first.clone(), place("b")];

        let mut dupe = place("a");
        dupe.name = "Nearby result name".to_string();
        let merged = merge_unique(primary, vec![dupe]);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0], first);
    }

    #[test]
    fn test_merge_appends_secondary_in_order() {
        let primary = vec![place("a")];
        let secondary = vec![place("c"), place("b")];
        let merged = merge_unique(primary, secondary);
        assert_eq!(ids(&merged), ["a", "c", "b"]);
    }

    #[test]
    fn test_merge_drops_repeats_within_secondary() {
        let primary = vec![place("a")];
        let secondary = vec![place("b"), place("b")];
        let merged = merge_unique(primary, secondary);
        assert_eq!(ids(&merged), ["a", "b"]);
    }

    #[test]
    fn test_merge_with_empty_sets() {
        assert!(merge_unique(Vec::new(), Vec::new()).is_empty());
        let merged = merge_unique(Vec::new(), vec![place("a")]);
        assert_eq!(ids(&merged), ["a"]);
    }

    #[test]
    fn test_fallback_threshold_is_five() {
        let four: Vec<Place> = (0..4).map(|i| place(&i.to_string())).collect();
        assert!(needs_nearby_fallback(&four));

        let five: Vec<Place> = (0..5).map(|i| place(&i.to_string())).collect();
        assert!(!needs_nearby_fallback(&five));
    }
}

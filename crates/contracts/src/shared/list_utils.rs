//! Search and sort helpers shared by every list on the dashboard

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Records that can be matched against a free-text query
pub trait Searchable {
    /// Text the query is matched against (the display name)
    fn search_text(&self) -> &str;

    /// Case-insensitive substring match. Every record matches an empty query.
    fn matches_filter(&self, filter: &str) -> bool {
        self.search_text()
            .to_lowercase()
            .contains(&filter.to_lowercase())
    }
}

/// Records that can be ordered by a typed key
pub trait Sortable<K> {
    fn compare_by(&self, other: &Self, key: K) -> Ordering;
}

/// Returns the matching records in their original order
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    if filter.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}

/// Stable sort: records with equal keys keep their relative order
pub fn sort_list<T: Sortable<K>, K: Copy>(items: &mut [T], key: K) {
    items.sort_by(|a, b| a.compare_by(b, key));
}

/// Primary collation key: lowercase with accents stripped ("Élan" -> "elan")
fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Name comparison the way a UI collation does it: base letters first,
/// then accents and case, then the raw text
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

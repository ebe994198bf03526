//! Shared test utilities for perfkit tests.

use std::collections::BTreeMap;

/// Window-by-window reference search.
///
/// Builds a folded `String` for every candidate window and compares it with
/// the folded query. Slow and allocation-heavy, but obviously correct.
#[allow(dead_code)]
pub fn reference_find(text: &str, query: &str) -> BTreeMap<usize, String> {
    let chars: Vec<char> = text.chars().collect();
    let folded_query: String = query.chars().map(perfkit::search::fold_char).collect();
    let width = query.chars().count();

    let mut found = BTreeMap::new();
    if width == 0 || width > chars.len() {
        return found;
    }
    for start in 0..=chars.len() - width {
        let window: String = chars[start..start + width].iter().collect();
        let folded: String = window.chars().map(perfkit::search::fold_char).collect();
        if folded == folded_query {
            found.insert(start, window);
        }
    }
    found
}

/// Folds a whole string with the library's per-char case fold.
#[allow(dead_code)]
pub fn fold(s: &str) -> String {
    s.chars().map(perfkit::search::fold_char).collect()
}

/// F(0)..=F(`max_index`) computed with `u128` addition.
#[allow(dead_code)]
pub fn fibonacci_table(max_index: usize) -> Vec<u128> {
    let mut table = vec![0_u128, 1];
    while table.len() <= max_index {
        let n = table.len();
        table.push(table[n - 1] + table[n - 2]);
    }
    table.truncate(max_index + 1);
    table
}

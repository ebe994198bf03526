//! Substring Search Examples
//!
//! Run with: `cargo run --example substring_search`

use std::collections::BTreeMap;

use perfkit::search::{count_occurrences, find_occurrences, find_occurrences_into, Search};

fn main() {
    let text = "Straße, STRASSE, strasse. Ärger über ÄRGER.";

    println!("Text: {text:?}");
    println!();

    for query in ["strasse", "ärger", "ss", ""] {
        let found = find_occurrences(text, query);
        println!("{query:?}: {} match(es)", found.len());
        for (offset, matched) in &found {
            println!("   char {offset:>2}: {matched:?}");
        }
    }
    println!();

    // Configured searches
    let strict = Search::new().case_insensitive(false);
    println!("case-sensitive \"ÄRGER\": {:?}", strict.find(text, "ÄRGER"));

    let disjoint = Search::new().overlapping(false);
    println!(
        "overlapping vs disjoint \"aa\" in \"aaaaa\": {} vs {}",
        count_occurrences("aaaaa", "aa"),
        disjoint.count("aaaaa", "aa")
    );

    // Reusing one output map across searches
    let mut output = BTreeMap::new();
    for query in ["s", "r"] {
        let n = find_occurrences_into(text, query, &mut output);
        println!("{query:?}: {n} match(es), first at {:?}", output.keys().next());
    }
}

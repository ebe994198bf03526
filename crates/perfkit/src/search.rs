//! Case-insensitive substring location.
//!
//! Finds every start offset at which a query occurs in a text, ignoring
//! case, and returns the text at each match in its original casing.
//!
//! # Offsets
//!
//! Offsets and lengths are counted in `char`s (Unicode scalar values), not
//! bytes. Case folding maps each `char` to exactly one `char` (see
//! [`fold_char`]), so a window in the folded text and the same window in the
//! original text always cover the same characters.
//!
//! # Matching Rules
//!
//! - Overlapping occurrences are all reported: `"aaa"` / `"aa"` yields
//!   offsets 0 and 1.
//! - An empty query matches nothing.
//! - A query longer than the text matches nothing.
//!
//! # Example
//!
//! ```
//! use perfkit::search::find_occurrences;
//!
//! let found = find_occurrences("FooBar foobar", "BAR");
//! assert_eq!(found.len(), 2);
//! assert_eq!(found[&3], "Bar");
//! assert_eq!(found[&10], "bar");
//! ```

use std::collections::BTreeMap;

use tracing::trace;

/// Folds a character to the single-character lowercase form used for matching.
///
/// Characters whose lowercase mapping expands to several characters (for
/// example `'İ'`, which lowercases to `"i\u{307}"`) are kept as-is so that
/// folding never changes the character count.
///
/// ```
/// use perfkit::search::fold_char;
///
/// assert_eq!(fold_char('A'), 'a');
/// assert_eq!(fold_char('Ä'), 'ä');
/// assert_eq!(fold_char('7'), '7');
/// assert_eq!(fold_char('İ'), 'İ');
/// ```
#[inline]
#[must_use]
pub fn fold_char(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => c,
    }
}

/// Substring search configuration.
///
/// The default configuration is case-insensitive with overlapping matches,
/// which is what [`find_occurrences`] uses.
///
/// # Example
///
/// ```
/// use perfkit::search::Search;
///
/// // Use defaults (case-insensitive, overlapping)
/// let all = Search::default().find("aaaa", "AA");
/// assert_eq!(all.keys().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
///
/// // Or customize with fluent API
/// let disjoint = Search::new()
///     .overlapping(false)
///     .case_insensitive(false)
///     .find("aaaa", "aa");
/// assert_eq!(disjoint.keys().copied().collect::<Vec<_>>(), vec![0, 2]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Search {
    case_insensitive: bool,
    overlapping: bool,
}

impl Default for Search {
    /// Case-insensitive, overlapping.
    fn default() -> Self {
        Self {
            case_insensitive: true,
            overlapping: true,
        }
    }
}

impl Search {
    /// Creates the default search configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether matching ignores case.
    ///
    /// Default: true
    #[must_use]
    pub const fn case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    /// Sets whether the scan reports overlapping matches.
    ///
    /// When `false`, the scan resumes after the end of each match.
    ///
    /// Default: true
    #[must_use]
    pub const fn overlapping(mut self, overlapping: bool) -> Self {
        self.overlapping = overlapping;
        self
    }

    /// Returns whether matching ignores case.
    #[must_use]
    pub const fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Returns whether overlapping matches are reported.
    #[must_use]
    pub const fn is_overlapping(&self) -> bool {
        self.overlapping
    }

    /// Finds all matches of `query` in `text`, keyed by `char` offset.
    #[must_use]
    pub fn find(&self, text: &str, query: &str) -> BTreeMap<usize, String> {
        let mut output = BTreeMap::new();
        self.find_into(text, query, &mut output);
        output
    }

    /// Clears `output` and fills it with all matches of `query` in `text`.
    ///
    /// Returns the number of matches.
    pub fn find_into(
        &self,
        text: &str,
        query: &str,
        output: &mut BTreeMap<usize, String>,
    ) -> usize {
        output.clear();

        let needle = self.fold_query(query);
        if needle.is_empty() {
            return 0;
        }

        // Byte offset of every char, plus the end of the text.
        let mut boundaries = Vec::with_capacity(text.len() + 1);
        let mut haystack = Vec::with_capacity(text.len());
        for (byte, c) in text.char_indices() {
            boundaries.push(byte);
            haystack.push(self.fold(c));
        }
        boundaries.push(text.len());

        let width = needle.len();
        self.scan(&haystack, &needle, |start| {
            let matched = &text[boundaries[start]..boundaries[start + width]];
            output.insert(start, matched.to_owned());
        });

        trace!(
            text_chars = haystack.len(),
            query_chars = width,
            matches = output.len(),
            "substring search finished"
        );
        output.len()
    }

    /// Counts matches of `query` in `text` without collecting matched text.
    #[must_use]
    pub fn count(&self, text: &str, query: &str) -> usize {
        let needle = self.fold_query(query);
        if needle.is_empty() {
            return 0;
        }
        let haystack: Vec<char> = text.chars().map(|c| self.fold(c)).collect();

        let mut count = 0;
        self.scan(&haystack, &needle, |_| count += 1);
        count
    }

    #[inline]
    fn fold(&self, c: char) -> char {
        if self.case_insensitive {
            fold_char(c)
        } else {
            c
        }
    }

    fn fold_query(&self, query: &str) -> Vec<char> {
        query.chars().map(|c| self.fold(c)).collect()
    }

    /// Calls `on_match` with every start offset where `needle` occurs.
    fn scan(&self, haystack: &[char], needle: &[char], mut on_match: impl FnMut(usize)) {
        let width = needle.len();
        if width == 0 || width > haystack.len() {
            return;
        }

        let last_start = haystack.len() - width;
        let mut start = 0;
        while start <= last_start {
            if haystack[start..start + width] == *needle {
                on_match(start);
                start += if self.overlapping { 1 } else { width };
            } else {
                start += 1;
            }
        }
    }
}

/// Finds every case-insensitive occurrence of `query` in `text`.
///
/// Returns a map from `char` offset to the matched text in its original
/// casing. Overlapping occurrences are all included. An empty query, or one
/// longer than the text, yields an empty map.
///
/// # Example
///
/// ```
/// use perfkit::search::find_occurrences;
///
/// let found = find_occurrences("Hello World", "lo");
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[&3], "lo");
///
/// assert!(find_occurrences("ABC", "xyz").is_empty());
/// assert!(find_occurrences("ABC", "").is_empty());
/// ```
#[must_use]
pub fn find_occurrences(text: &str, query: &str) -> BTreeMap<usize, String> {
    Search::default().find(text, query)
}

/// Like [`find_occurrences`], but fills a caller-owned map.
///
/// `output` is cleared first. Returns the number of matches.
pub fn find_occurrences_into(
    text: &str,
    query: &str,
    output: &mut BTreeMap<usize, String>,
) -> usize {
    Search::default().find_into(text, query, output)
}

/// Counts case-insensitive, overlapping occurrences of `query` in `text`.
#[must_use]
pub fn count_occurrences(text: &str, query: &str) -> usize {
    Search::default().count(text, query)
}

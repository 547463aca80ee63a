// Multi-key search index: tries, first-char buckets, abjad map

use hashbrown::{HashMap, HashSet};
use regex::Regex;
use tracing::warn;

use lugat_core::visenc;
use lugat_core::{Root, RootSet};

use crate::trie::Trie;

/// Error type for query evaluation.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// A caller-supplied pattern failed to compile.
    #[error("invalid search pattern: {0}")]
    BadPattern(#[from] regex::Error),
}

/// Which textual representation of a root a query addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    Latin,
    Visenc,
    Unicode,
}

/// Split an index key of the form `<spelling>#<position>` back into its
/// parts. The position suffix keeps trie keys unique across duplicate
/// spellings and lets exact search reuse the prefix machinery.
fn split_key(key: &str) -> Option<(&str, usize)> {
    let (spelling, position) = key.rsplit_once('#')?;
    position.parse().ok().map(|p| (spelling, p))
}

/// The per-field structures: a prefix trie over `<spelling>#<position>`
/// keys, and the same keys bucketed by first character for linear regex
/// scans.
#[derive(Debug)]
struct FieldIndex {
    trie: Trie,
    buckets: HashMap<char, Vec<String>>,
}

impl FieldIndex {
    fn build<'a>(roots: &'a RootSet, key_of: impl Fn(&'a Root) -> &'a str) -> Self {
        let mut trie = Trie::new();
        let mut buckets: HashMap<char, Vec<String>> = HashMap::new();

        for (position, root) in roots.iter().enumerate() {
            let spelling = key_of(root);
            let key = format!("{spelling}#{position}");
            trie.insert(key.as_bytes(), position);
            if let Some(first) = spelling.chars().next() {
                buckets.entry(first).or_default().push(key);
            }
        }

        FieldIndex { trie, buckets }
    }

    /// Match `re` against the spelling part of every bucketed key.
    ///
    /// Keys that have lost their position suffix are logged and skipped;
    /// they indicate an index-construction bug, never a caller error.
    fn scan(&self, re: &Regex) -> Vec<usize> {
        let mut positions = Vec::new();
        for bucket in self.buckets.values() {
            for key in bucket {
                match split_key(key) {
                    Some((spelling, position)) => {
                        if re.is_match(spelling) {
                            positions.push(position);
                        }
                    }
                    None => warn!(key = %key, "skipping malformed index key"),
                }
            }
        }
        positions
    }
}

/// The in-memory search index over a [`RootSet`].
///
/// Built once from a loaded dataset; immutable afterwards, so any number of
/// concurrent readers may query it without locking. A reload is expressed by
/// building a fresh `Index` and swapping the shared handle, never by
/// mutating a live one.
#[derive(Debug)]
pub struct Index {
    roots: RootSet,
    latin: FieldIndex,
    visenc: FieldIndex,
    unicode: FieldIndex,
    abjad: HashMap<i32, Vec<usize>>,
}

impl Index {
    /// Build every index structure in one pass over the root set.
    pub fn build(roots: RootSet) -> Self {
        let latin = FieldIndex::build(&roots, |r| r.turkish_latin.as_str());
        let visenc = FieldIndex::build(&roots, |r| r.ottoman.visenc.as_str());
        let unicode = FieldIndex::build(&roots, |r| r.ottoman.unicode.as_str());

        let mut abjad: HashMap<i32, Vec<usize>> = HashMap::new();
        for (position, root) in roots.iter().enumerate() {
            abjad.entry(root.ottoman.abjad).or_default().push(position);
        }

        Index {
            roots,
            latin,
            visenc,
            unicode,
            abjad,
        }
    }

    /// The root set this index was built from.
    pub fn roots(&self) -> &RootSet {
        &self.roots
    }

    fn field(&self, field: SearchField) -> &FieldIndex {
        match field {
            SearchField::Latin => &self.latin,
            SearchField::Visenc => &self.visenc,
            SearchField::Unicode => &self.unicode,
        }
    }

    /// De-duplicate, order and bound a list of candidate positions.
    ///
    /// Candidates are first brought into dataset order so the outcome does
    /// not depend on hash iteration. Duplicate spellings collapse onto their
    /// first occurrence, shorter Latin forms sort first (a rough basic-word-
    /// first heuristic), and only then is the list cut to `max_results`.
    fn finalize(&self, mut positions: Vec<usize>, max_results: usize) -> Vec<&Root> {
        positions.sort_unstable();
        positions.dedup();

        let mut seen = HashSet::new();
        let mut results = Vec::with_capacity(positions.len());
        for position in positions {
            let Some(root) = self.roots.roots.get(position) else {
                warn!(position, "index entry points past the root set");
                continue;
            };
            if seen.insert((root.turkish_latin.as_str(), root.ottoman.unicode.as_str())) {
                results.push(root);
            }
        }

        results.sort_by_key(|r| r.turkish_latin.chars().count());
        results.truncate(max_results);
        results
    }

    /// All roots whose field value starts with `prefix`.
    pub fn prefix_search(
        &self,
        field: SearchField,
        prefix: &str,
        max_results: usize,
    ) -> Vec<&Root> {
        let positions = self.field(field).trie.collect_prefix(prefix.as_bytes());
        self.finalize(positions, max_results)
    }

    /// All roots whose field value equals `value` exactly, via the
    /// `value + "#"` key convention.
    pub fn exact_search(&self, field: SearchField, value: &str, max_results: usize) -> Vec<&Root> {
        self.prefix_search(field, &format!("{value}#"), max_results)
    }

    /// All roots whose field value contains the characters of `word` as a
    /// subsequence. For the visenc field the unit is the visenc token, so
    /// `bu1` matches as one atom rather than three letters.
    pub fn fuzzy_search(
        &self,
        field: SearchField,
        word: &str,
        max_results: usize,
    ) -> Result<Vec<&Root>, SearchError> {
        let mut pattern = String::from(".*");
        match field {
            SearchField::Visenc => {
                for token in visenc::tokenize(word, true) {
                    pattern.push_str(&regex::escape(token));
                    pattern.push_str(".*");
                }
            }
            SearchField::Latin | SearchField::Unicode => {
                for ch in word.chars() {
                    pattern.push_str(&regex::escape(ch.encode_utf8(&mut [0; 4])));
                    pattern.push_str(".*");
                }
            }
        }
        self.regex_search(field, &pattern, max_results)
    }

    /// All roots whose field value matches a caller-supplied regex. A
    /// pattern that fails to compile is the caller's error, not a panic.
    pub fn regex_search(
        &self,
        field: SearchField,
        pattern: &str,
        max_results: usize,
    ) -> Result<Vec<&Root>, SearchError> {
        let re = Regex::new(pattern)?;
        let positions = self.field(field).scan(&re);
        Ok(self.finalize(positions, max_results))
    }

    /// All roots whose abjad value equals `value`. A value no root carries
    /// yields an empty list.
    pub fn abjad_search(&self, value: i32, max_results: usize) -> Vec<&Root> {
        let positions = self.abjad.get(&value).cloned().unwrap_or_default();
        self.finalize(positions, max_results)
    }

    /// Dispatch a query by its content: Arabic script searches the Unicode
    /// field, digits mean an abjad value (or a visenc spelling when the
    /// whole word is not a number), anything else is Turkish Latin.
    pub fn auto_search(&self, word: &str, max_results: usize) -> Result<Vec<&Root>, SearchError> {
        if visenc::contains_arabic(word) {
            self.fuzzy_search(SearchField::Unicode, word, max_results)
        } else if visenc::contains_ascii_digit(word) {
            match word.parse::<i32>() {
                Ok(value) => Ok(self.abjad_search(value, max_results)),
                Err(_) => self.fuzzy_search(SearchField::Visenc, word, max_results),
            }
        } else {
            self.fuzzy_search(SearchField::Latin, word, max_results)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lugat_core::PartOfSpeech;

    fn root(latin: &str, visenc: &str) -> Root {
        Root::new(latin, visenc, PartOfSpeech::Noun).unwrap()
    }

    fn sample_index() -> Index {
        Index::build(RootSet::new(vec![
            root("emre", "emrh"),
            root("emir", "emyr"),
            root("em", "em"),
            root("esra", "esre"),
            root("meydan", "mydeb01"),
        ]))
    }

    #[test]
    fn split_key_parses_position() {
        assert_eq!(split_key("emre#12"), Some(("emre", 12)));
        assert_eq!(split_key("a#b#3"), Some(("a#b", 3)));
        assert_eq!(split_key("emre"), None);
        assert_eq!(split_key("emre#x"), None);
    }

    #[test]
    fn prefix_search_returns_subtree_sorted_by_length() {
        let index = sample_index();
        let results = index.prefix_search(SearchField::Latin, "em", 100);
        let latins: Vec<_> = results.iter().map(|r| r.turkish_latin.as_str()).collect();
        assert_eq!(latins, vec!["em", "emre", "emir"]);
    }

    #[test]
    fn exact_search_excludes_longer_words() {
        let index = sample_index();
        let results = index.exact_search(SearchField::Latin, "em", 100);
        let latins: Vec<_> = results.iter().map(|r| r.turkish_latin.as_str()).collect();
        assert_eq!(latins, vec!["em"]);
    }

    #[test]
    fn duplicate_spellings_collapse_to_one_result() {
        let index = Index::build(RootSet::new(vec![
            root("emre", "emrh"),
            root("emre", "emrh"),
        ]));
        let results = index.prefix_search(SearchField::Latin, "emre", 100);
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn results_are_length_ascending() {
        let index = Index::build(RootSet::new(vec![
            root("abcde", "d"),
            root("abc", "r"),
            root("abcd", "s"),
        ]));
        let results = index.prefix_search(SearchField::Latin, "abc", 100);
        let lengths: Vec<_> = results.iter().map(|r| r.turkish_latin.len()).collect();
        assert_eq!(lengths, vec![3, 4, 5]);
    }

    #[test]
    fn truncation_happens_after_sorting() {
        let index = Index::build(RootSet::new(vec![
            root("abcde", "d"),
            root("abc", "r"),
            root("abcd", "s"),
        ]));
        let results = index.prefix_search(SearchField::Latin, "abc", 1);
        assert_eq!(results.len(), 1);
        // The shortest match survives truncation, whatever the trie order.
        assert_eq!(results[0].turkish_latin, "abc");
    }

    #[test]
    fn fuzzy_search_matches_subsequences() {
        let index = sample_index();
        let results = index.fuzzy_search(SearchField::Latin, "mdn", 100).unwrap();
        let latins: Vec<_> = results.iter().map(|r| r.turkish_latin.as_str()).collect();
        assert_eq!(latins, vec!["meydan"]);
    }

    #[test]
    fn fuzzy_search_on_visenc_uses_tokens() {
        let index = Index::build(RootSet::new(vec![root("baba", "bu1ebu1e")]));
        let results = index
            .fuzzy_search(SearchField::Visenc, "bu1bu1", 100)
            .unwrap();
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn fuzzy_search_escapes_regex_metacharacters() {
        let index = sample_index();
        // Must not blow up or match everything.
        let results = index.fuzzy_search(SearchField::Latin, "e(r", 100).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn regex_search_rejects_bad_patterns() {
        let index = sample_index();
        let err = index.regex_search(SearchField::Latin, "em(", 100);
        assert!(matches!(err, Err(SearchError::BadPattern(_))));
    }

    #[test]
    fn regex_search_matches_spelling_not_key_suffix() {
        let index = sample_index();
        // Digits only occur in the #<position> suffix, which must be
        // invisible to the pattern.
        let results = index.regex_search(SearchField::Latin, r"\d", 100).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn abjad_search_finds_matching_values() {
        let index = sample_index();
        // emrh = 246
        let results = index.abjad_search(246, 100);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].turkish_latin, "emre");
    }

    #[test]
    fn abjad_search_miss_is_empty_not_error() {
        let index = sample_index();
        assert!(index.abjad_search(99_999, 100).is_empty());
    }

    #[test]
    fn auto_search_dispatches_arabic_to_unicode() {
        let index = sample_index();
        let results = index.auto_search("\u{0627}\u{0645}", 100).unwrap();
        assert!(!results.is_empty());
    }

    #[test]
    fn auto_search_dispatches_numbers_to_abjad() {
        let index = sample_index();
        let results = index.auto_search("246", 100).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].turkish_latin, "emre");
    }

    #[test]
    fn auto_search_dispatches_mixed_digits_to_visenc() {
        let index = sample_index();
        // Not parseable as a number, so treated as a visenc spelling.
        let results = index.auto_search("mydeb01", 100).unwrap();
        assert_eq!(results[0].turkish_latin, "meydan");
    }

    #[test]
    fn auto_search_dispatches_plain_latin() {
        let index = sample_index();
        let results = index.auto_search("esra", 100).unwrap();
        assert_eq!(results[0].turkish_latin, "esra");
    }
}

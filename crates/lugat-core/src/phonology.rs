// Latin-orthography phonology: vowel classes, harmony, hard consonants

use std::sync::LazyLock;

use regex::Regex;

/// Turkish vowels recognized in Latin orthography, circumflexed forms
/// included.
pub const VOWELS: &str = "aâeıiîoöuüû";

/// Consonants whose word-final occurrence blocks voicing of a following
/// suffix (fıstıkçı şahap).
pub const HARD_CONSONANTS: &str = "fstkçşhp";

static ENDS_WITH_VOWEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[aeıioöuüâûî]'?$").unwrap());

static HAS_SINGLE_VOWEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[^aâeıiîoöuüû]*[aâeıiîoöuüû][^aâeıiîoöuüû]*$").unwrap());

static LAST_CONSONANT_HARD: LazyLock<Regex> = LazyLock::new(|| Regex::new("[fstkçşhp]'?$").unwrap());

static LAST_VOWEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("([aâeıiîoöuüû])[^aâeıiîoöuüû]*$").unwrap());

static LAST_CONSONANT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("([^aâeıiîoöuüû])[aâeıiîoöuüû]*$").unwrap());

/// Vowel-harmony classification rules, tried in order; the first matching
/// pattern decides. The circumflex rules model Arabic and Persian loanwords
/// where `â`/`û` before `l` or `k` take front-vowel suffixes, so order is
/// semantics here, not style: the rules must stay a list, never a map.
static EFFECTIVE_LAST_VOWEL_RULES: LazyLock<Vec<(Regex, char)>> = LazyLock::new(|| {
    [
        ("a[^aeıioöuüâûî]*$", 'a'),
        ("â[lk][^aeıioöuüâûî]*$", 'i'),
        ("â[^lkaeıioöuüâûî]*$", 'a'),
        ("e[^aeıioöuüâûî]*$", 'e'),
        ("i[^aeıioöuüâûî]*$", 'i'),
        ("î[^aeıioöuüâûî]*$", 'i'),
        ("ı[^aeıioöuüâûî]*$", 'ı'),
        ("ö[^aeıioöuüâûî]*$", 'ö'),
        ("o[^aeıioöuüâûî]*$", 'o'),
        ("ü[^aeıioöuüâûî]*$", 'ü'),
        ("u[^aeıioöuüâûî]*$", 'u'),
        ("û[lk][^aeıioöuüâûî]*$", 'ü'),
        ("û[^lkaeıioöuüâûî]*$", 'u'),
    ]
    .iter()
    .map(|&(pattern, vowel)| (Regex::new(pattern).unwrap(), vowel))
    .collect()
});

/// Whether the word ends in a vowel (a trailing apostrophe is ignored).
pub fn ends_with_vowel(s: &str) -> bool {
    ENDS_WITH_VOWEL.is_match(s)
}

/// Whether the word contains exactly one vowel.
pub fn has_single_vowel(s: &str) -> bool {
    HAS_SINGLE_VOWEL.is_match(s)
}

/// Whether the final consonant is one of the hard consonants.
pub fn last_consonant_hard(s: &str) -> bool {
    LAST_CONSONANT_HARD.is_match(s)
}

/// The last vowel of the word, before any trailing consonant run.
pub fn last_vowel(s: &str) -> Option<char> {
    LAST_VOWEL
        .captures(s)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().chars().next())
}

/// The last non-vowel of the word, before any trailing vowel run.
pub fn last_consonant(s: &str) -> Option<char> {
    LAST_CONSONANT
        .captures(s)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().chars().next())
}

/// The vowel that governs suffix harmony for this word.
///
/// Usually the literal last vowel, but loanword special cases may substitute
/// a front vowel (kemâl takes -i, not -ı). Falls back to [`last_vowel`] when
/// no rule matches.
pub fn effective_last_vowel(s: &str) -> Option<char> {
    for (rule, vowel) in EFFECTIVE_LAST_VOWEL_RULES.iter() {
        if rule.is_match(s) {
            return Some(*vowel);
        }
    }
    last_vowel(s)
}

/// Whether the effective last vowel is a back vowel (a, ı, o, u).
pub fn last_vowel_hard(s: &str) -> bool {
    matches!(effective_last_vowel(s), Some('a' | 'ı' | 'o' | 'u'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ends_with_vowel_cases() {
        assert!(ends_with_vowel("emre"));
        assert!(ends_with_vowel("esra"));
        assert!(ends_with_vowel("sarâ"));
        assert!(!ends_with_vowel("meydan"));
        assert!(!ends_with_vowel("dev"));
    }

    #[test]
    fn ends_with_vowel_tolerates_apostrophe() {
        assert!(ends_with_vowel("kâbe'"));
    }

    #[test]
    fn single_vowel_cases() {
        assert!(has_single_vowel("gol"));
        assert!(has_single_vowel("at"));
        assert!(!has_single_vowel("cevat"));
        assert!(!has_single_vowel("prs"));
    }

    #[test]
    fn hard_consonant_cases() {
        assert!(last_consonant_hard("cevat"));
        assert!(last_consonant_hard("kitap"));
        assert!(!last_consonant_hard("bilinc"));
        assert!(!last_consonant_hard("emre"));
    }

    #[test]
    fn last_vowel_cases() {
        assert_eq!(last_vowel("meydan"), Some('a'));
        assert_eq!(last_vowel("emre"), Some('e'));
        assert_eq!(last_vowel("gün"), Some('ü'));
        assert_eq!(last_vowel("prs"), None);
    }

    #[test]
    fn last_consonant_cases() {
        assert_eq!(last_consonant("emre"), Some('r'));
        assert_eq!(last_consonant("meydan"), Some('n'));
        assert_eq!(last_consonant("aaa"), None);
    }

    #[test]
    fn effective_last_vowel_literal() {
        assert_eq!(effective_last_vowel("kitap"), Some('a'));
        assert_eq!(effective_last_vowel("gül"), Some('ü'));
        assert_eq!(effective_last_vowel("odun"), Some('u'));
    }

    #[test]
    fn effective_last_vowel_circumflex_before_l_or_k() {
        // â before l/k harmonizes front despite being a back vowel.
        assert_eq!(effective_last_vowel("kemâl"), Some('i'));
        assert_eq!(effective_last_vowel("idrâk"), Some('i'));
        // â before other consonants stays back.
        assert_eq!(effective_last_vowel("câm"), Some('a'));
    }

    #[test]
    fn effective_last_vowel_no_vowel_falls_back() {
        assert_eq!(effective_last_vowel("prs"), None);
    }

    #[test]
    fn vowel_hardness() {
        assert!(last_vowel_hard("kitap"));
        assert!(last_vowel_hard("odun"));
        assert!(!last_vowel_hard("kemâl"));
        assert!(!last_vowel_hard("emre"));
    }
}

// Root model: Ottoman spellings plus derived Latin phonology

use serde::{Deserialize, Serialize};

use crate::phonology;
use crate::visenc;

/// Error type for root and word construction.
#[derive(Debug, thiserror::Error)]
pub enum RootError {
    /// Neither spelling was given, so there is nothing to derive from.
    #[error("need either a visenc or a unicode spelling")]
    MissingSpelling,
}

/// Grammatical category of a root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartOfSpeech {
    Verb,
    Noun,
    ProperNoun,
    Other,
}

impl PartOfSpeech {
    /// Short tag used in CSV dumps and console output.
    pub fn tag(self) -> &'static str {
        match self {
            PartOfSpeech::Verb => "v",
            PartOfSpeech::Noun => "n",
            PartOfSpeech::ProperNoun => "p",
            PartOfSpeech::Other => "o",
        }
    }

    /// Parse the short tag back. Unknown tags map to `Other`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "v" => PartOfSpeech::Verb,
            "n" => PartOfSpeech::Noun,
            "p" => PartOfSpeech::ProperNoun,
            _ => PartOfSpeech::Other,
        }
    }
}

/// One Arabic-script spelling in its three parallel forms.
///
/// Invariants, established at construction and never revisited:
/// `unicode` is the NFKC decoding of `visenc`, and `abjad` is the token-value
/// sum of `search_key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OttomanWord {
    pub visenc: String,
    pub unicode: String,
    pub abjad: i32,
    pub search_key: String,
    pub dotless_search_key: String,
}

impl OttomanWord {
    /// Build a word from whichever spelling is available.
    ///
    /// When both are given the visenc spelling is authoritative and the
    /// unicode form is re-derived from it, keeping the invariant intact.
    pub fn new(visenc: &str, unicode: &str) -> Result<Self, RootError> {
        if visenc.is_empty() && unicode.is_empty() {
            return Err(RootError::MissingSpelling);
        }

        let visenc = if visenc.is_empty() {
            visenc::unicode_to_visenc(unicode)
        } else {
            visenc.to_string()
        };
        let unicode = visenc::visenc_to_unicode(&visenc);

        Ok(OttomanWord {
            abjad: visenc::visenc_abjad(&visenc),
            search_key: visenc::search_key(&visenc),
            dotless_search_key: visenc::dotless_search_key(&visenc),
            visenc,
            unicode,
        })
    }
}

/// One dictionary entry: a Latin transliteration, its Ottoman spelling, and
/// phonological attributes derived from the Latin form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Root {
    pub turkish_latin: String,
    pub ottoman: OttomanWord,
    pub part_of_speech: PartOfSpeech,

    // Derived phonology; empty string when the word has no vowel/consonant.
    pub last_vowel: String,
    pub last_consonant: String,
    pub effective_last_vowel: String,
    pub ends_with_vowel: bool,
    pub has_single_vowel: bool,
    pub last_vowel_hard: bool,
    pub last_consonant_hard: bool,

    // Consonant softening at morpheme boundaries (k>ğ, p>b, ç>c, t>d).
    pub effective_turkish_latin: String,
    pub effective_visenc: String,
    pub has_consonant_softening: bool,
}

/// Final-consonant softening pairs: a Latin suffix and a visenc suffix that
/// must both match, the Latin replacement, and an optional visenc tail
/// rewrite. Only the k/qaf pair changes the Ottoman spelling (qaf to ghain).
const SOFTENING_PAIRS: &[(char, &str, char, Option<&str>)] = &[
    ('k', "fo2", 'ğ', Some("ao1")),
    ('p', "bu1", 'b', None),
    ('ç', "xu1", 'c', None),
    ('t', "d", 'd', None),
];

/// Replace the final character of `s` with `replacement`.
fn replace_last_char(s: &str, replacement: char) -> String {
    let mut out: String = s.chars().collect();
    out.pop();
    out.push(replacement);
    out
}

impl Root {
    /// Build a fully-populated root from a Latin spelling, a visenc spelling
    /// and a part of speech. Pure: every field is final once this returns.
    pub fn new(latin: &str, visenc: &str, pos: PartOfSpeech) -> Result<Self, RootError> {
        let ottoman = OttomanWord::new(visenc, "")?;

        let mut effective_turkish_latin = latin.to_string();
        let mut effective_visenc = ottoman.visenc.clone();
        let mut has_consonant_softening = false;

        for &(latin_tail, visenc_tail, replacement, visenc_rewrite) in SOFTENING_PAIRS {
            if latin.ends_with(latin_tail) && ottoman.visenc.ends_with(visenc_tail) {
                effective_turkish_latin = replace_last_char(latin, replacement);
                if let Some(rewrite) = visenc_rewrite {
                    let stem = &ottoman.visenc[..ottoman.visenc.len() - visenc_tail.len()];
                    effective_visenc = format!("{stem}{rewrite}");
                }
                has_consonant_softening = true;
            }
        }

        Ok(Root {
            turkish_latin: latin.to_string(),
            part_of_speech: pos,
            last_vowel: phonology::last_vowel(latin).map(String::from).unwrap_or_default(),
            last_consonant: phonology::last_consonant(latin)
                .map(String::from)
                .unwrap_or_default(),
            effective_last_vowel: phonology::effective_last_vowel(latin)
                .map(String::from)
                .unwrap_or_default(),
            ends_with_vowel: phonology::ends_with_vowel(latin),
            has_single_vowel: phonology::has_single_vowel(latin),
            last_vowel_hard: phonology::last_vowel_hard(latin),
            last_consonant_hard: phonology::last_consonant_hard(latin),
            effective_turkish_latin,
            effective_visenc,
            has_consonant_softening,
            ottoman,
        })
    }
}

/// An ordered set of roots. The position of a root in `roots` is the stable
/// handle every index structure refers back to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootSet {
    pub roots: Vec<Root>,
}

impl RootSet {
    pub fn new(roots: Vec<Root>) -> Self {
        RootSet { roots }
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Root> {
        self.roots.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ottoman_word_requires_a_spelling() {
        assert!(matches!(
            OttomanWord::new("", ""),
            Err(RootError::MissingSpelling)
        ));
    }

    #[test]
    fn ottoman_word_from_visenc() {
        let ow = OttomanWord::new("emrh", "").unwrap();
        assert_eq!(ow.visenc, "emrh");
        assert_eq!(ow.unicode, "\u{0627}\u{0645}\u{0631}\u{0647}");
        assert_eq!(ow.abjad, 246);
        assert_eq!(ow.search_key, "emrh");
        assert_eq!(ow.dotless_search_key, "emrh");
    }

    #[test]
    fn ottoman_word_from_unicode() {
        let ow = OttomanWord::new("", "\u{0645}\u{0644}\u{06A9}").unwrap();
        assert_eq!(ow.visenc, "mlk");
        assert_eq!(ow.abjad, 90);
    }

    #[test]
    fn ottoman_word_search_keys_strip_marks() {
        let ow = OttomanWord::new("bu1eo5mr", "").unwrap();
        assert_eq!(ow.search_key, "bu1emr");
        assert_eq!(ow.dotless_search_key, "bemr");
        // Abjad follows the search key: beh 2 + alef 1 + meem 40 + reh 200.
        assert_eq!(ow.abjad, 243);
    }

    #[test]
    fn root_derives_phonology() {
        let root = Root::new("emre", "emrh", PartOfSpeech::ProperNoun).unwrap();
        assert_eq!(root.last_vowel, "e");
        assert_eq!(root.last_consonant, "r");
        assert_eq!(root.effective_last_vowel, "e");
        assert!(root.ends_with_vowel);
        assert!(!root.has_single_vowel);
        assert!(!root.last_vowel_hard);
        assert!(!root.last_consonant_hard);
    }

    #[test]
    fn root_without_softening_keeps_literal_spellings() {
        let root = Root::new("emre", "emrh", PartOfSpeech::ProperNoun).unwrap();
        assert!(!root.has_consonant_softening);
        assert_eq!(root.effective_turkish_latin, "emre");
        assert_eq!(root.effective_visenc, "emrh");
    }

    #[test]
    fn softening_k_to_soft_g_rewrites_visenc() {
        let root = Root::new("ocak", "ewxu1efo2", PartOfSpeech::Noun).unwrap();
        assert!(root.has_consonant_softening);
        assert_eq!(root.effective_turkish_latin, "ocağ");
        assert_eq!(root.effective_visenc, "ewxu1eao1");
    }

    #[test]
    fn softening_p_to_b() {
        let root = Root::new("kitap", "kbo2ebu1", PartOfSpeech::Noun).unwrap();
        assert!(root.has_consonant_softening);
        assert_eq!(root.effective_turkish_latin, "kitab");
        assert_eq!(root.effective_visenc, "kbo2ebu1");
    }

    #[test]
    fn softening_tch_to_c() {
        let root = Root::new("ağaç", "eao1exu1", PartOfSpeech::Noun).unwrap();
        assert!(root.has_consonant_softening);
        assert_eq!(root.effective_turkish_latin, "ağac");
    }

    #[test]
    fn softening_t_to_d() {
        let root = Root::new("kanat", "fo2bo1ed", PartOfSpeech::Noun).unwrap();
        assert!(root.has_consonant_softening);
        assert_eq!(root.effective_turkish_latin, "kanad");
    }

    #[test]
    fn softening_requires_both_suffixes() {
        // Latin ends in k but the Ottoman spelling ends in keheh, not qaf.
        let root = Root::new("erk", "erk", PartOfSpeech::Noun).unwrap();
        assert!(!root.has_consonant_softening);
        assert_eq!(root.effective_turkish_latin, "erk");
    }

    #[test]
    fn part_of_speech_tags_round_trip() {
        for pos in [
            PartOfSpeech::Verb,
            PartOfSpeech::Noun,
            PartOfSpeech::ProperNoun,
            PartOfSpeech::Other,
        ] {
            assert_eq!(PartOfSpeech::from_tag(pos.tag()), pos);
        }
    }
}

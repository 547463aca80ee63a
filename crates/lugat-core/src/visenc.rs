// Visenc codec: token tables, longest-match tokenizer, abjad values

use std::sync::LazyLock;

use hashbrown::HashMap;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Maximum length of a visenc token in ASCII characters.
pub const MAX_TOKEN_LEN: usize = 5;

// ---------------------------------------------------------------------------
// Token tables
// ---------------------------------------------------------------------------

/// Visenc token to Arabic-script string.
///
/// The encoding spells each Arabic letter with a Latin base letter plus
/// optional position/count digits (`bu1` = beh, one dot below; `so3` = seen
/// shape, three dots above). Several tokens are aliases for the same code
/// point; [`UNICODE_TO_VISENC_TABLE`] picks the canonical spelling for the
/// reverse direction.
const VISENC_TO_UNICODE_TABLE: &[(&str, &str)] = &[
    // Letters
    ("c", "\u{0621}"),   // hamza
    ("eo6", "\u{0622}"), // alef with madda
    ("e", "\u{0627}"),   // alef
    ("eo5", "\u{0623}"), // alef with hamza above
    ("eu5", "\u{0625}"), // alef with hamza below
    ("bu1", "\u{0628}"), // beh
    ("bu3", "\u{067E}"), // peh
    ("bo2", "\u{062A}"), // teh
    ("bo3", "\u{062B}"), // theh
    ("xu1", "\u{062C}"), // jeem
    ("xu3", "\u{0686}"), // tcheh
    ("x", "\u{062D}"),   // hah
    ("xo1", "\u{062E}"), // khah
    ("do1", "\u{0630}"), // thal
    ("d", "\u{062F}"),   // dal
    ("ro1", "\u{0632}"), // zain
    ("r", "\u{0631}"),   // reh
    ("ro3", "\u{0698}"), // jeh
    ("s", "\u{0633}"),   // seen
    ("so3", "\u{0634}"), // sheen
    ("z", "\u{0635}"),   // sad
    ("zo1", "\u{0636}"), // dad
    ("t", "\u{0637}"),   // tah
    ("to1", "\u{0638}"), // zah
    ("a", "\u{0639}"),   // ain
    ("ao1", "\u{063A}"), // ghain
    ("fo1", "\u{0641}"), // feh
    ("fo2", "\u{0642}"), // qaf
    ("lo5", "\u{0643}"), // kaf
    ("ko5", "\u{0643}"), // kaf
    ("k", "\u{06A9}"),   // keheh
    ("ko7", "\u{06AF}"), // gaf
    ("ko3", "\u{06AD}"), // ng
    ("l", "\u{0644}"),   // lam
    ("m", "\u{0645}"),   // meem
    ("bo1", "\u{0646}"), // noon
    ("w", "\u{0648}"),   // waw
    ("wo5", "\u{0624}"), // waw with hamza above
    ("h", "\u{0647}"),   // heh
    ("ho2", "\u{0629}"), // teh marbuta
    ("y", "\u{06CC}"),   // farsi yeh
    ("bu2", "\u{064A}"), // yeh
    ("yo5", "\u{0626}"), // yeh with hamza above
    ("bo5", "\u{0626}"), // yeh with hamza above
    ("bot", "\u{0679}"), // tteh
    // Digits
    ("n0", "\u{06F0}"),
    ("n1", "\u{06F1}"),
    ("n2", "\u{06F2}"),
    ("n3", "\u{06F3}"),
    ("n4", "\u{06F4}"),
    ("n5", "\u{06F5}"),
    ("n6", "\u{06F6}"),
    ("n7", "\u{06F7}"),
    ("n8", "\u{06F8}"),
    ("n9", "\u{06F9}"),
    // Format controls
    ("||", "\u{200C}"),    // zero width non-joiner
    ("<>", "\u{200C}"),    // zero width non-joiner
    ("&zwj;", "\u{200D}"), // zero width joiner
    ("><", "\u{200D}"),    // zero width joiner
    ("&lrm;", "\u{200E}"), // left-to-right mark
    ("&rlm;", "\u{200F}"), // right-to-left mark
    ("&ls;", "\u{2028}"),  // line separator
    ("&ps;", "\u{2028}"),  // line separator
    ("&lre;", "\u{202A}"), // left-to-right embedding
    ("&rle;", "\u{202B}"), // right-to-left embedding
    ("&pdf;", "\u{202C}"), // pop directional formatting
    ("&lro;", "\u{202D}"), // left-to-right override
    ("&rlo;", "\u{202D}"), // left-to-right override
    ("&bom;", "\u{FEFF}"), // byte order mark
    // Vocalization marks
    ("o4", "\u{064E}"),  // fatha
    ("u4", "\u{0650}"),  // kasra
    ("o9", "\u{064F}"),  // damma
    ("u44", "\u{064D}"), // kasratan
    ("o44", "\u{064B}"), // fathatan
    ("o99", "\u{064C}"), // dammatan
    ("o8", "\u{0651}"),  // shadda
    ("o0", "\u{0652}"),  // sukun
    ("o6", "\u{0653}"),  // maddah above
    ("o5", "\u{0654}"),  // hamza above
    ("u5", "\u{0655}"),  // hamza below
    (" ", " "),
];

/// Arabic-script code point to canonical visenc token.
///
/// A separate table rather than an inversion of the forward one: alias
/// tokens (`lo5`/`ko5`, `yo5`/`bo5`) and unified spellings (`ك` and `ک` both
/// encode as `k`, `ى` and `ی` both as `y`) make the reverse direction a
/// deliberate choice per code point.
const UNICODE_TO_VISENC_TABLE: &[(char, &str)] = &[
    ('\u{0621}', "c"),
    ('\u{0622}', "eo6"),
    ('\u{0627}', "e"),
    ('\u{0623}', "eo5"),
    ('\u{0625}', "eu5"),
    ('\u{0628}', "bu1"),
    ('\u{067E}', "bu3"),
    ('\u{062A}', "bo2"),
    ('\u{062B}', "bo3"),
    ('\u{062C}', "xu1"),
    ('\u{0686}', "xu3"),
    ('\u{062D}', "x"),
    ('\u{062E}', "xo1"),
    ('\u{062F}', "d"),
    ('\u{0630}', "do1"),
    ('\u{0631}', "r"),
    ('\u{0632}', "ro1"),
    ('\u{0698}', "ro3"),
    ('\u{0633}', "s"),
    ('\u{0634}', "so3"),
    ('\u{0635}', "z"),
    ('\u{0636}', "zo1"),
    ('\u{0637}', "t"),
    ('\u{0638}', "to1"),
    ('\u{0639}', "a"),
    ('\u{063A}', "ao1"),
    ('\u{0641}', "fo1"),
    ('\u{0642}', "fo2"),
    ('\u{0643}', "k"),
    ('\u{06A9}', "k"),
    ('\u{06AF}', "ko7"),
    ('\u{06AD}', "ko3"),
    ('\u{0644}', "l"),
    ('\u{0645}', "m"),
    ('\u{0646}', "bo1"),
    ('\u{0648}', "w"),
    ('\u{0624}', "wo5"),
    ('\u{0647}', "h"),
    ('\u{06D5}', "h"),
    ('\u{0629}', "ho2"),
    ('\u{06CC}', "y"),
    ('\u{0649}', "y"),
    ('\u{064A}', "bu2"),
    ('\u{0626}', "bo5"),
    ('\u{0679}', "bot"),
    ('\u{06F0}', "n0"),
    ('\u{06F1}', "n1"),
    ('\u{06F2}', "n2"),
    ('\u{06F3}', "n3"),
    ('\u{06F4}', "n4"),
    ('\u{06F5}', "n5"),
    ('\u{06F6}', "n6"),
    ('\u{06F7}', "n7"),
    ('\u{06F8}', "n8"),
    ('\u{06F9}', "n9"),
    ('\u{200C}', "||"),
    ('\u{200D}', "><"),
    ('\u{200E}', "&lrm;"),
    ('\u{200F}', "&rlm;"),
    ('\u{2028}', "&ls;"),
    ('\u{202A}', "&lre;"),
    ('\u{202B}', "&rle;"),
    ('\u{202C}', "&pdf;"),
    ('\u{202D}', "&lro;"),
    ('\u{FEFF}', "&bom;"),
    ('\u{064E}', "o4"),
    ('\u{0650}', "u4"),
    ('\u{064F}', "o9"),
    ('\u{064D}', "u44"),
    ('\u{064B}', "o44"),
    ('\u{064C}', "o99"),
    ('\u{0651}', "o8"),
    ('\u{0652}', "o0"),
    ('\u{0653}', "o6"),
    ('\u{0654}', "o5"),
    ('\u{0655}', "u5"),
    (' ', " "),
];

/// Abjad numeral value per visenc token. Consonant letters only; vocalization
/// marks and format controls are absent and therefore count as zero.
const VISENC_TO_ABJAD_TABLE: &[(&str, i32)] = &[
    ("e", 1),
    ("bu1", 2),
    ("bu3", 2),
    ("xu1", 3),
    ("xu3", 3),
    ("d", 4),
    ("h", 5),
    ("w", 6),
    ("ro1", 7),
    ("ro3", 7),
    ("x", 8),
    ("t", 9),
    ("y", 10),
    ("bu2", 10),
    ("k", 20),
    ("ko7", 20),
    ("l", 30),
    ("m", 40),
    ("bo1", 50),
    ("s", 60),
    ("a", 70),
    ("fo1", 80),
    ("z", 90),
    ("fo2", 100),
    ("r", 200),
    ("so3", 300),
    ("bo2", 400),
    ("bo3", 500),
    ("xo1", 600),
    ("do1", 700),
    ("zo1", 800),
    ("to1", 900),
    ("ao1", 1000),
];

static VISENC_TO_UNICODE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| VISENC_TO_UNICODE_TABLE.iter().copied().collect());

static UNICODE_TO_VISENC: LazyLock<HashMap<char, &'static str>> =
    LazyLock::new(|| UNICODE_TO_VISENC_TABLE.iter().copied().collect());

static VISENC_TO_ABJAD: LazyLock<HashMap<&'static str, i32>> =
    LazyLock::new(|| VISENC_TO_ABJAD_TABLE.iter().copied().collect());

/// Vocalization-mark spellings: a mark letter followed by shape digits.
/// Dot-count digits (1-3) are deliberately excluded so letter tokens like
/// `bu1` survive.
static VOCALIZATION: LazyLock<Regex> = LazyLock::new(|| Regex::new("[oui][0456789]+").unwrap());

/// Wider variant that also consumes dot-count digits, collapsing dotted
/// letter families (`bu1`, `bu2`, `bu3`) onto their base stroke.
static VOCALIZATION_AND_DOTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[oui][0123456789]+").unwrap());

// ---------------------------------------------------------------------------
// Tokenizer
// ---------------------------------------------------------------------------

/// Split a visenc string into tokens, longest match first.
///
/// At every position, candidate substrings of length [`MAX_TOKEN_LEN`] down
/// to 1 are tried against the token table and the longest hit is emitted.
/// A character that starts no token is emitted as a single-character token
/// when `include_invalid` is set, and skipped silently otherwise.
///
/// This scanner is the one shared primitive behind decoding, abjad
/// computation and search-key derivation.
pub fn tokenize(visenc: &str, include_invalid: bool) -> Vec<&str> {
    let len = visenc.len();
    let mut tokens = Vec::new();
    let mut start = 0;

    while start < len {
        let mut end = (start + MAX_TOKEN_LEN).min(len);
        let mut matched = false;

        while end > start {
            if visenc.is_char_boundary(end) && VISENC_TO_UNICODE.contains_key(&visenc[start..end])
            {
                tokens.push(&visenc[start..end]);
                start = end;
                matched = true;
                break;
            }
            end -= 1;
        }

        if !matched {
            let ch_len = visenc[start..]
                .chars()
                .next()
                .map(char::len_utf8)
                .unwrap_or(1);
            if include_invalid {
                tokens.push(&visenc[start..start + ch_len]);
            }
            start += ch_len;
        }
    }

    tokens
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

/// Decode a visenc string to NFKC-normalized Arabic-script text.
///
/// Unrecognized characters are kept as literal output so spaces and
/// punctuation survive a round trip.
pub fn visenc_to_unicode(visenc: &str) -> String {
    let mut out = String::with_capacity(visenc.len());
    for token in tokenize(visenc, true) {
        match VISENC_TO_UNICODE.get(token) {
            Some(mapped) => out.push_str(mapped),
            None => out.push_str(token),
        }
    }
    out.nfkc().collect()
}

/// Encode Arabic-script text as visenc.
///
/// Code points with no table entry are dropped. This is accepted lossiness
/// for characters outside the Ottoman repertoire, not an error.
pub fn unicode_to_visenc(unicode: &str) -> String {
    let mut out = String::with_capacity(unicode.len());
    for ch in unicode.chars() {
        if let Some(token) = UNICODE_TO_VISENC.get(&ch) {
            out.push_str(token);
        }
    }
    out
}

/// Abjad numeral value of a visenc string.
///
/// The string is stripped to its search key first, so vocalization marks
/// never contribute; tokens without an abjad value count as zero.
pub fn visenc_abjad(visenc: &str) -> i32 {
    let key = search_key(visenc);
    tokenize(&key, true)
        .iter()
        .map(|t| VISENC_TO_ABJAD.get(t).copied().unwrap_or(0))
        .sum()
}

/// Abjad numeral value of Arabic-script text.
pub fn unicode_abjad(unicode: &str) -> i32 {
    visenc_abjad(&unicode_to_visenc(unicode))
}

/// Strip vocalization-mark spellings (harakat, hamza, madda) from a visenc
/// string, producing the key used for diacritic-insensitive search.
pub fn search_key(visenc: &str) -> String {
    VOCALIZATION.replace_all(visenc, "").into_owned()
}

/// Strip vocalization marks and dot-count digits, collapsing each dotted
/// letter family onto its bare stroke (`bu1` and `bu3` both become `b`).
pub fn dotless_search_key(visenc: &str) -> String {
    VOCALIZATION_AND_DOTS.replace_all(visenc, "").into_owned()
}

// ---------------------------------------------------------------------------
// Script detection
// ---------------------------------------------------------------------------

/// Whether the string contains any code point in the Arabic block
/// (U+0600..U+06FF).
pub fn contains_arabic(s: &str) -> bool {
    s.chars().any(|c| ('\u{0600}'..='\u{06FF}').contains(&c))
}

/// Whether the string contains any ASCII digit.
pub fn contains_ascii_digit(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_digit())
}

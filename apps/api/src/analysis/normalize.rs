//! Text Normalizer — lowercases raw text and tokenizes it into a word set.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximal runs of word characters (letters, digits, underscore), Unicode-aware.
static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

/// A deduplicated set of lowercase word tokens.
/// `BTreeSet` iterates in ascending lexicographic order, so any
/// "first N" presentation over it is deterministic.
pub type WordSet = BTreeSet<String>;

/// Tokenizes text into a [`WordSet`]. Never fails; empty input yields an
/// empty set.
///
/// Punctuation and whitespace act purely as separators, so a hyphenated
/// skill like "machine-learning" becomes the two tokens "machine" and
/// "learning". That mirrors how ATS keyword screens treat the text and is
/// kept intentionally.
pub fn normalize(text: &str) -> WordSet {
    let lowered = text.to_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

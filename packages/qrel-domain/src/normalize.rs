use std::{collections::BTreeSet, sync::LazyLock};

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

// Word characters, whitespace, math operators and CJK sentence punctuation survive.
static NOISE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"[^\w\s$+\-*/^=()。，！？；]").expect("noise regex"));

/// Drops noise characters and collapses whitespace runs into single spaces.
pub fn normalize_stem(stem: &str) -> String {
	let stripped = NOISE.replace_all(stem, "");
	let mut out = String::with_capacity(stripped.len());

	for word in stripped.split_whitespace() {
		if !out.is_empty() {
			out.push(' ');
		}

		out.push_str(word);
	}

	out
}

/// Compatibility-folded, lower-cased copy of a raw stem.
///
/// Used by detectors that must still see symbols `normalize_stem` removes, such as `<` or `.`.
pub fn fold_stem(stem: &str) -> String {
	stem.nfkc().collect::<String>().to_lowercase()
}

pub fn tokenize_words(normalized: &str) -> BTreeSet<&str> {
	normalized.split_whitespace().collect()
}

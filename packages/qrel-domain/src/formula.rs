//! Inline formula extraction and comparison.
//!
//! Formulas are the raw contents of single `$...$` spans. No LaTeX parsing happens; two formulas
//! match when their normalized text is identical or within a relative edit distance of
//! [`MATCH_DISTANCE_RATIO`].

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::edit_distance::edit_distance;

pub const MATCH_DISTANCE_RATIO: f32 = 0.25;
/// Score when neither stem carries a formula.
pub const NO_FORMULA_SCORE: f32 = 0.5;
/// Score when exactly one stem carries formulas.
pub const ONE_SIDED_FORMULA_SCORE: f32 = 0.2;

static INLINE_SPAN: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"\$([^$]+)\$").expect("inline span regex"));
static TEXT_WRAPPER: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"\\(?:text|mathrm)\{([^{}]*)\}").expect("text wrapper regex")
});

pub fn extract_formulas(stem: &str) -> Vec<&str> {
	INLINE_SPAN
		.captures_iter(stem)
		.filter_map(|caps| caps.get(1))
		.map(|span| span.as_str())
		.filter(|span| !span.trim().is_empty())
		.collect()
}

pub fn normalize_formula(formula: &str) -> String {
	let compact: String = formula.chars().filter(|ch| !ch.is_whitespace()).collect();
	let unwrapped = TEXT_WRAPPER.replace_all(&compact, "$1");

	unwrapped.nfkc().collect::<String>().to_lowercase()
}

pub fn formulas_match(lhs: &str, rhs: &str) -> bool {
	if lhs == rhs {
		return true;
	}

	let longest = lhs.chars().count().max(rhs.chars().count());

	if longest == 0 {
		return true;
	}

	edit_distance(lhs, rhs) as f32 / longest as f32 <= MATCH_DISTANCE_RATIO
}

pub fn formula_similarity(lhs_stem: &str, rhs_stem: &str) -> f32 {
	let lhs: Vec<String> = extract_formulas(lhs_stem).into_iter().map(normalize_formula).collect();
	let rhs: Vec<String> = extract_formulas(rhs_stem).into_iter().map(normalize_formula).collect();

	match (lhs.is_empty(), rhs.is_empty()) {
		(true, true) => return NO_FORMULA_SCORE,
		(true, false) | (false, true) => return ONE_SIDED_FORMULA_SCORE,
		(false, false) => {},
	}

	let mut matched = 0_usize;

	for left in &lhs {
		for right in &rhs {
			if formulas_match(left, right) {
				matched += 1;
			}
		}
	}

	(matched as f32 / lhs.len().max(rhs.len()) as f32).clamp(0.0, 1.0)
}

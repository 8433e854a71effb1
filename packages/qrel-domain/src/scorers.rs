//! Per-dimension similarity scorers. Every scorer returns a value in `[0, 1]`.

use std::collections::BTreeSet;

use crate::{
	edit_distance::sequence_distance,
	features::{NumberProfile, Operator},
	item::QuestionType,
	keywords,
	normalize::tokenize_words,
};

/// Credit for a non-identical tag pair that shares a core keyword.
pub const SEMANTIC_TAG_CREDIT: f32 = 0.7;
pub const NUMBER_KIND_WEIGHT: f32 = 0.7;
pub const NUMBER_COUNT_WEIGHT: f32 = 0.3;

const DIFFICULTY_SPAN: f32 = 5.0;

/// `|A ∩ B| / |A ∪ B|`, with two empty sets counting as identical.
pub fn jaccard<T>(lhs: &BTreeSet<T>, rhs: &BTreeSet<T>) -> f32
where
	T: Ord,
{
	if lhs.is_empty() && rhs.is_empty() {
		return 1.0;
	}

	let shared = lhs.intersection(rhs).count();
	let union = lhs.union(rhs).count();

	shared as f32 / union as f32
}

pub fn tag_score(lhs: &[String], rhs: &[String]) -> f32 {
	let lhs = clean_tags(lhs);
	let rhs = clean_tags(rhs);
	let denominator = lhs.len().max(rhs.len());

	if lhs.is_empty() || rhs.is_empty() {
		return 0.0;
	}

	let exact = lhs.intersection(&rhs).count() as f32;
	let mut semantic = 0.0_f32;

	for left in &lhs {
		for right in &rhs {
			if left != right && keywords::share_keyword(left, right) {
				semantic += SEMANTIC_TAG_CREDIT;
			}
		}
	}

	((exact + semantic) / denominator as f32).min(1.0)
}

/// Word-level Jaccard over normalized stems.
pub fn text_score(lhs_normalized: &str, rhs_normalized: &str) -> f32 {
	if lhs_normalized.is_empty() || rhs_normalized.is_empty() {
		return 0.0;
	}
	if lhs_normalized == rhs_normalized {
		return 1.0;
	}

	jaccard(&tokenize_words(lhs_normalized), &tokenize_words(rhs_normalized))
}

pub fn structure_score(lhs: &BTreeSet<&'static str>, rhs: &BTreeSet<&'static str>) -> f32 {
	jaccard(lhs, rhs)
}

pub fn entity_score(lhs: &BTreeSet<String>, rhs: &BTreeSet<String>) -> f32 {
	if lhs.is_empty() || rhs.is_empty() {
		return 0.0;
	}

	jaccard(lhs, rhs)
}

pub fn operator_score(lhs: &[Operator], rhs: &[Operator]) -> f32 {
	let longest = lhs.len().max(rhs.len());

	if longest == 0 {
		return 1.0;
	}

	(1.0 - sequence_distance(lhs, rhs) as f32 / longest as f32).max(0.0)
}

pub fn number_score(lhs: &NumberProfile, rhs: &NumberProfile) -> f32 {
	let kinds = jaccard(&lhs.kinds, &rhs.kinds);
	let gap = lhs.count.abs_diff(rhs.count) as f32;
	let counts = 1.0 - gap / (1 + lhs.count.max(rhs.count)) as f32;

	NUMBER_KIND_WEIGHT * kinds + NUMBER_COUNT_WEIGHT * counts
}

/// Full credit when both categories are present and equal.
pub fn category_score(lhs: Option<&str>, rhs: Option<&str>) -> f32 {
	match (lhs, rhs) {
		(Some(left), Some(right)) if left == right => 1.0,
		_ => 0.0,
	}
}

pub fn difficulty_score(lhs: u8, rhs: u8) -> f32 {
	(1.0 - f32::from(lhs.abs_diff(rhs)) / DIFFICULTY_SPAN).max(0.0)
}

pub fn type_score(lhs: QuestionType, rhs: QuestionType) -> f32 {
	if lhs == rhs { 1.0 } else { 0.0 }
}

fn clean_tags(tags: &[String]) -> BTreeSet<&str> {
	tags.iter().map(|tag| tag.trim()).filter(|tag| !tag.is_empty()).collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::features::NumberKind;

	fn tags(values: &[&str]) -> Vec<String> {
		values.iter().map(|value| value.to_string()).collect()
	}

	fn set(values: &[&str]) -> BTreeSet<String> {
		values.iter().map(|value| value.to_string()).collect()
	}

	#[test]
	fn jaccard_conventions() {
		let empty: BTreeSet<String> = BTreeSet::new();

		assert_eq!(jaccard(&empty, &empty), 1.0);
		assert_eq!(jaccard(&empty, &set(&["x"])), 0.0);
		assert_eq!(jaccard(&set(&["x", "y"]), &set(&["y", "z"])), 1.0 / 3.0);
	}

	#[test]
	fn tag_score_blends_exact_and_keyword_credit() {
		assert_eq!(tag_score(&tags(&["导数"]), &tags(&["导数"])), 1.0);
		assert_eq!(tag_score(&tags(&["导数"]), &tags(&["导数应用"])), 0.7);
		assert_eq!(tag_score(&tags(&["导数", "极限"]), &tags(&["导数"])), 0.5);
		assert_eq!(tag_score(&tags(&["几何"]), &tags(&["概率"])), 0.0);
		assert_eq!(tag_score(&tags(&[]), &tags(&["概率"])), 0.0);
	}

	#[test]
	fn tag_score_is_capped() {
		let lhs = tags(&["函数性质", "函数图像"]);
		let rhs = tags(&["函数单调性", "函数零点"]);

		assert_eq!(tag_score(&lhs, &rhs), 1.0);
	}

	#[test]
	fn text_score_uses_word_jaccard() {
		assert_eq!(text_score("solve for x", "solve for x"), 1.0);
		assert_eq!(text_score("solve for x", "solve for y"), 0.5);
		assert_eq!(text_score("", "solve"), 0.0);
	}

	#[test]
	fn entity_score_requires_both_sides() {
		assert_eq!(entity_score(&set(&[]), &set(&["x"])), 0.0);
		assert_eq!(entity_score(&set(&[]), &set(&[])), 0.0);
		assert_eq!(entity_score(&set(&["x", "f"]), &set(&["x"])), 0.5);
	}

	#[test]
	fn operator_score_uses_sequence_distance() {
		assert_eq!(operator_score(&[], &[]), 1.0);
		assert_eq!(operator_score(&[Operator::Add], &[]), 0.0);
		assert_eq!(
			operator_score(&[Operator::Add, Operator::Eq], &[
				Operator::Add,
				Operator::Mul,
				Operator::Eq
			]),
			1.0 - 1.0 / 3.0
		);
	}

	#[test]
	fn number_score_blends_kinds_and_counts() {
		let lhs = NumberProfile { count: 2, kinds: [NumberKind::SmallInt].into_iter().collect() };
		let rhs = NumberProfile {
			count: 1,
			kinds: [NumberKind::SmallInt, NumberKind::Float].into_iter().collect(),
		};

		assert!((number_score(&lhs, &lhs) - 1.0).abs() < 1e-6);
		assert!((number_score(&lhs, &rhs) - (0.7 * 0.5 + 0.3 * (1.0 - 1.0 / 3.0))).abs() < 1e-6);
	}

	#[test]
	fn scalar_scorers() {
		assert_eq!(category_score(Some("高考"), Some("高考")), 1.0);
		assert_eq!(category_score(Some("高考"), Some("中考")), 0.0);
		assert_eq!(category_score(None, None), 0.0);
		assert_eq!(difficulty_score(3, 3), 1.0);
		assert!((difficulty_score(1, 5) - 0.2).abs() < 1e-6);
		assert_eq!(type_score(QuestionType::Fill, QuestionType::Fill), 1.0);
		assert_eq!(type_score(QuestionType::Fill, QuestionType::Choice), 0.0);
	}
}

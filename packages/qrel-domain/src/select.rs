use std::cmp::Ordering;

use crate::{item::Item, relevance::RelevanceBreakdown};

pub const HIGH_QUALITY_THRESHOLD: f32 = 0.6;
pub const MIN_QUALITY_THRESHOLD: f32 = 0.3;

#[derive(Clone, Debug, PartialEq)]
pub struct ScoredCandidate {
	pub item: Item,
	pub relevance: f32,
	pub breakdown: Option<RelevanceBreakdown>,
}

/// Descending order with NaN sorted last.
pub fn cmp_f32_desc(a: f32, b: f32) -> Ordering {
	match (a.is_nan(), b.is_nan()) {
		(true, true) => Ordering::Equal,
		(true, false) => Ordering::Greater,
		(false, true) => Ordering::Less,
		(false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
	}
}

/// Two-tier selection: high-quality candidates first, then mid-quality fill up to `limit`.
///
/// Rejected (`0`) and low-quality (`< MIN_QUALITY_THRESHOLD`) candidates are never returned, so
/// the result may hold fewer than `limit` entries.
pub fn select(scored: Vec<ScoredCandidate>, limit: usize) -> Vec<ScoredCandidate> {
	if limit == 0 {
		return Vec::new();
	}

	let mut ranked: Vec<ScoredCandidate> =
		scored.into_iter().filter(|candidate| candidate.relevance > 0.0).collect();

	ranked.sort_by(|lhs, rhs| cmp_f32_desc(lhs.relevance, rhs.relevance));

	let (high, rest): (Vec<_>, Vec<_>) = ranked
		.into_iter()
		.partition(|candidate| candidate.relevance >= HIGH_QUALITY_THRESHOLD);
	let mut out: Vec<ScoredCandidate> = high.into_iter().take(limit).collect();
	let remaining = limit - out.len();

	out.extend(
		rest.into_iter()
			.filter(|candidate| candidate.relevance >= MIN_QUALITY_THRESHOLD)
			.take(remaining),
	);

	out
}

#[cfg(test)]
mod tests {
	use time::OffsetDateTime;
	use uuid::Uuid;

	use super::*;
	use crate::item::QuestionType;

	fn scored(relevance: f32) -> ScoredCandidate {
		ScoredCandidate {
			item: Item {
				id: Uuid::new_v4(),
				tags: vec!["函数".to_string()],
				category: None,
				question_type: QuestionType::Choice,
				difficulty: 2,
				stem: String::new(),
				popularity: 0,
				created_at: OffsetDateTime::UNIX_EPOCH,
			},
			relevance,
			breakdown: None,
		}
	}

	fn relevances(selected: &[ScoredCandidate]) -> Vec<f32> {
		selected.iter().map(|candidate| candidate.relevance).collect()
	}

	#[test]
	fn fills_from_mid_tier_after_high_tier() {
		let input = vec![scored(0.5), scored(0.2), scored(0.9), scored(0.7)];

		assert_eq!(relevances(&select(input, 3)), vec![0.9, 0.7, 0.5]);
	}

	#[test]
	fn never_returns_low_quality() {
		let input = vec![scored(0.1), scored(0.9)];

		assert_eq!(relevances(&select(input, 3)), vec![0.9]);
	}

	#[test]
	fn high_tier_alone_can_fill_limit() {
		let input = vec![scored(0.61), scored(0.95), scored(0.6), scored(0.59)];

		assert_eq!(relevances(&select(input, 2)), vec![0.95, 0.61]);
	}

	#[test]
	fn drops_rejected_candidates_and_handles_empty_input() {
		assert!(select(vec![scored(0.0), scored(0.0)], 3).is_empty());
		assert!(select(Vec::new(), 3).is_empty());
		assert!(select(vec![scored(0.9)], 0).is_empty());
	}

	#[test]
	fn equal_scores_keep_input_order() {
		let input = vec![scored(0.4), scored(0.4)];
		let first = input[0].item.id;
		let selected = select(input, 3);

		assert_eq!(selected[0].item.id, first);
		assert_eq!(selected.len(), 2);
	}
}

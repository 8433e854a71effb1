use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{Error, RelatedService, Result, candidates};
use qrel_domain::{
	Item, QuestionType, RelevanceBreakdown, ScoredCandidate, gate,
	relevance::{self, PreparedItem},
	select,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedRequest {
	pub item_id: Uuid,
	pub limit: Option<u32>,
	#[serde(default)]
	pub exclude_current: bool,
	#[serde(default)]
	pub explain: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RelatedItem {
	pub id: Uuid,
	pub relevance: f32,
	pub tags: Vec<String>,
	pub category: Option<String>,
	pub question_type: QuestionType,
	pub difficulty: u8,
	pub stem: String,
	pub popularity: u64,
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub explain: Option<RelatedExplain>,
}

/// Per-dimension scores behind one returned relevance.
pub type RelatedExplain = RelevanceBreakdown;

#[derive(Debug, Clone, Serialize)]
pub struct RelatedResponse {
	pub items: Vec<RelatedItem>,
	pub average_relevance: f32,
	/// Size of the pool that was scored, after exclusion and capping.
	pub candidate_count: usize,
}

impl RelatedService {
	pub async fn related(&self, req: RelatedRequest) -> Result<RelatedResponse> {
		let limit = self.resolve_limit(req.limit)?;
		let Some(target) = self.repository.fetch_item(req.item_id).await? else {
			return Err(Error::NotFound {
				message: format!("Item {} does not exist.", req.item_id),
			});
		};
		let query = candidates::build_candidate_query(
			&target,
			self.cfg.retrieval.pool_cap as usize,
			req.exclude_current,
		);
		let fetched = self.repository.fetch_candidates(&query).await?;
		let pool = candidates::prepare_pool(fetched, &query);
		let candidate_count = pool.len();
		let parallel = candidate_count >= self.cfg.scoring.parallel_threshold as usize;
		let scored = score_pool(&target, pool, req.explain, parallel);
		let selected = select(scored, limit);
		let items: Vec<RelatedItem> = selected.into_iter().map(RelatedItem::from).collect();
		let average_relevance = average(&items);

		tracing::info!(
			item_id = %req.item_id,
			filter = ?query.filter,
			candidate_count,
			parallel,
			returned = items.len(),
			average_relevance,
			"Related questions ranked."
		);

		Ok(RelatedResponse { items, average_relevance, candidate_count })
	}

	fn resolve_limit(&self, limit: Option<u32>) -> Result<usize> {
		let max_limit = self.cfg.retrieval.max_limit;
		let limit = limit.unwrap_or(self.cfg.retrieval.default_limit);

		if limit == 0 {
			return Err(Error::InvalidRequest {
				message: "limit must be greater than zero.".to_string(),
			});
		}
		if limit > max_limit {
			return Err(Error::InvalidRequest {
				message: format!("limit must not exceed {max_limit}."),
			});
		}

		Ok(limit as usize)
	}
}

impl From<ScoredCandidate> for RelatedItem {
	fn from(candidate: ScoredCandidate) -> Self {
		let ScoredCandidate { item, relevance, breakdown } = candidate;

		Self {
			id: item.id,
			relevance,
			tags: item.tags,
			category: item.category,
			question_type: item.question_type,
			difficulty: item.difficulty,
			stem: item.stem,
			popularity: item.popularity,
			created_at: item.created_at,
			explain: breakdown,
		}
	}
}

fn score_pool(
	target: &Item,
	pool: Vec<Item>,
	explain: bool,
	parallel: bool,
) -> Vec<ScoredCandidate> {
	let prepared = PreparedItem::new(target);
	let score_one = |item: Item| {
		let breakdown = if gate::passes(target, &item) {
			relevance::score_prepared(&prepared, &PreparedItem::new(&item))
		} else {
			RelevanceBreakdown::rejected()
		};

		ScoredCandidate {
			relevance: breakdown.relevance,
			breakdown: explain.then_some(breakdown),
			item,
		}
	};

	if parallel {
		pool.into_par_iter().map(score_one).collect()
	} else {
		pool.into_iter().map(score_one).collect()
	}
}

fn average(items: &[RelatedItem]) -> f32 {
	if items.is_empty() {
		return 0.0;
	}

	items.iter().map(|item| item.relevance).sum::<f32>() / items.len() as f32
}

#[cfg(test)]
mod tests {
	use super::*;
	use qrel_testkit::{ids, sample_items};

	fn sample(id: Uuid) -> Item {
		sample_items().into_iter().find(|item| item.id == id).expect("Sample item must exist.")
	}

	#[test]
	fn parallel_and_sequential_scoring_agree() {
		let target = sample(ids::DERIVATIVE_MONOTONIC);
		let sequential = score_pool(&target, sample_items(), true, false);
		let parallel = score_pool(&target, sample_items(), true, true);

		assert_eq!(sequential, parallel);
	}

	#[test]
	fn breakdown_is_kept_only_when_explaining() {
		let target = sample(ids::DERIVATIVE_MONOTONIC);
		let scored = score_pool(&target, vec![sample(ids::DERIVATIVE_EXTREMUM)], false, false);

		assert!(scored[0].breakdown.is_none());
		assert!(scored[0].relevance > 0.0);
	}

	#[test]
	fn gated_candidates_score_zero() {
		let target = sample(ids::DERIVATIVE_MONOTONIC);
		let scored = score_pool(&target, vec![sample(ids::GEOMETRY_TRIANGLE)], true, false);

		assert_eq!(scored[0].relevance, 0.0);
		assert_eq!(scored[0].breakdown, Some(RelevanceBreakdown::rejected()));
	}

	#[test]
	fn average_of_empty_list_is_zero() {
		assert_eq!(average(&[]), 0.0);
	}
}

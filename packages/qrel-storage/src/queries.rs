use std::cmp::Ordering;

use uuid::Uuid;

use qrel_domain::Item;

/// Cheap tag filter applied before scoring.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CandidateFilter {
	/// Candidates with a tag containing any of these lower-case keywords.
	Keywords(Vec<String>),
	/// Candidates sharing at least one exact tag.
	ExactTags(Vec<String>),
	/// Any item; ordering alone decides the pool.
	Broad,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateQuery {
	pub filter: CandidateFilter,
	pub exclude_id: Option<Uuid>,
	pub limit: usize,
}
impl CandidateQuery {
	pub fn matches(&self, item: &Item) -> bool {
		if self.exclude_id == Some(item.id) {
			return false;
		}

		match &self.filter {
			CandidateFilter::Keywords(keywords) => item.tags.iter().any(|tag| {
				let lowered = tag.to_lowercase();

				keywords.iter().any(|keyword| lowered.contains(keyword.as_str()))
			}),
			CandidateFilter::ExactTags(tags) => {
				item.tags.iter().any(|tag| tags.iter().any(|wanted| wanted == tag.trim()))
			},
			CandidateFilter::Broad => true,
		}
	}
}

/// Pool order: most viewed first, then newest, then id for a stable tie-break.
pub fn cmp_pool_order(lhs: &Item, rhs: &Item) -> Ordering {
	rhs.popularity
		.cmp(&lhs.popularity)
		.then_with(|| rhs.created_at.cmp(&lhs.created_at))
		.then_with(|| lhs.id.cmp(&rhs.id))
}

#[cfg(test)]
mod tests {
	use super::*;
	use qrel_domain::QuestionType;

	fn item(tags: &[&str], popularity: u64) -> Item {
		Item {
			id: Uuid::new_v4(),
			tags: tags.iter().map(|tag| tag.to_string()).collect(),
			category: None,
			question_type: QuestionType::Fill,
			difficulty: 2,
			stem: "x".to_string(),
			popularity,
			created_at: time::OffsetDateTime::UNIX_EPOCH,
		}
	}

	#[test]
	fn keyword_filter_is_case_insensitive_substring() {
		let query = CandidateQuery {
			filter: CandidateFilter::Keywords(vec!["derivative".to_string()]),
			exclude_id: None,
			limit: 10,
		};

		assert!(query.matches(&item(&["Derivative Rules"], 0)));
		assert!(!query.matches(&item(&["Integral"], 0)));
	}

	#[test]
	fn exact_filter_and_exclusion() {
		let excluded = item(&["竞赛题"], 0);
		let query = CandidateQuery {
			filter: CandidateFilter::ExactTags(vec!["竞赛题".to_string()]),
			exclude_id: Some(excluded.id),
			limit: 10,
		};

		assert!(!query.matches(&excluded));
		assert!(query.matches(&item(&["竞赛题"], 0)));
		assert!(!query.matches(&item(&["竞赛"], 0)));
	}

	#[test]
	fn pool_order_prefers_popular_items() {
		let mut items = vec![item(&[], 1), item(&[], 9), item(&[], 5)];

		items.sort_by(cmp_pool_order);

		assert_eq!(items.iter().map(|item| item.popularity).collect::<Vec<_>>(), vec![9, 5, 1]);
	}
}

use std::collections::HashSet;

use qrel_domain::{Item, keywords};
use qrel_storage::queries::{CandidateFilter, CandidateQuery, cmp_pool_order};

/// Builds the pre-scoring pool query for `target`.
///
/// Tagged targets filter by the core keywords their tags contain, falling back to exact tag
/// matches when no keyword is present. Untagged targets get the broad popularity-ordered pool.
pub fn build_candidate_query(
	target: &Item,
	pool_cap: usize,
	exclude_current: bool,
) -> CandidateQuery {
	let tags: Vec<String> = target
		.tags
		.iter()
		.map(|tag| tag.trim())
		.filter(|tag| !tag.is_empty())
		.map(str::to_string)
		.collect();
	let filter = if tags.is_empty() {
		CandidateFilter::Broad
	} else {
		let mut found = Vec::new();

		for tag in &tags {
			for keyword in keywords::keywords_in(tag) {
				if !found.contains(&keyword) {
					found.push(keyword);
				}
			}
		}

		if found.is_empty() {
			CandidateFilter::ExactTags(tags)
		} else {
			CandidateFilter::Keywords(found.into_iter().map(str::to_string).collect())
		}
	};

	CandidateQuery { filter, exclude_id: exclude_current.then_some(target.id), limit: pool_cap }
}

/// Re-applies exclusion, drops duplicate ids and bounds the pool at `query.limit`.
pub fn prepare_pool(items: Vec<Item>, query: &CandidateQuery) -> Vec<Item> {
	let mut seen = HashSet::with_capacity(items.len());
	let mut pool: Vec<Item> = items
		.into_iter()
		.filter(|item| query.exclude_id != Some(item.id))
		.filter(|item| seen.insert(item.id))
		.collect();

	pool.sort_by(cmp_pool_order);
	pool.truncate(query.limit);

	pool
}

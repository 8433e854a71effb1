use std::{
	collections::{HashMap, HashSet},
	fs,
	path::Path,
};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
	Error, Result,
	queries::{CandidateQuery, cmp_pool_order},
};
use qrel_domain::{
	Item,
	item::{MAX_DIFFICULTY, MIN_DIFFICULTY, is_valid_difficulty},
};

/// On-disk layout of a question bank export.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct BankFile {
	pub items: Vec<Item>,
}

/// Immutable in-memory question bank, shared read-only across requests.
#[derive(Debug, Default)]
pub struct QuestionBank {
	items: Vec<Item>,
	by_id: HashMap<Uuid, usize>,
}
impl QuestionBank {
	pub fn load(path: &Path) -> Result<Self> {
		let raw = fs::read_to_string(path)
			.map_err(|err| Error::ReadBank { path: path.to_path_buf(), source: err })?;
		let file: BankFile = serde_json::from_str(&raw)
			.map_err(|err| Error::ParseBank { path: path.to_path_buf(), source: err })?;
		let bank = Self::from_items(file.items)?;

		tracing::info!(path = %path.display(), items = bank.len(), "Question bank loaded.");

		Ok(bank)
	}

	pub fn from_items(items: Vec<Item>) -> Result<Self> {
		let mut out = Vec::with_capacity(items.len());
		let mut by_id = HashMap::with_capacity(items.len());

		for mut item in items {
			if !is_valid_difficulty(item.difficulty) {
				return Err(Error::InvalidItem(format!(
					"Item {} has difficulty {} outside {}..={}.",
					item.id,
					item.difficulty,
					MIN_DIFFICULTY,
					MAX_DIFFICULTY
				)));
			}
			if by_id.insert(item.id, out.len()).is_some() {
				return Err(Error::Conflict(format!("Duplicate item id {}.", item.id)));
			}

			item.tags = clean_tags(item.tags);

			out.push(item);
		}

		Ok(Self { items: out, by_id })
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	pub fn get(&self, id: Uuid) -> Option<&Item> {
		self.by_id.get(&id).map(|idx| &self.items[*idx])
	}

	/// Items matching `query`, in pool order, truncated to `query.limit`.
	pub fn find_candidates(&self, query: &CandidateQuery) -> Vec<Item> {
		let mut matched: Vec<&Item> =
			self.items.iter().filter(|item| query.matches(item)).collect();

		matched.sort_by(|lhs, rhs| cmp_pool_order(lhs, rhs));
		matched.truncate(query.limit);

		tracing::debug!(
			filter = ?query.filter,
			matched = matched.len(),
			limit = query.limit,
			"Candidate pool fetched."
		);

		matched.into_iter().cloned().collect()
	}
}

fn clean_tags(tags: Vec<String>) -> Vec<String> {
	let mut seen = HashSet::new();
	let mut out = Vec::with_capacity(tags.len());

	for tag in tags {
		let trimmed = tag.trim();

		if trimmed.is_empty() || !seen.insert(trimmed.to_string()) {
			continue;
		}

		out.push(trimmed.to_string());
	}

	out
}

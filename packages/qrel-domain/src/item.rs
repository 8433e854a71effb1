use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
	Choice,
	MultipleChoice,
	Fill,
	Solution,
}

/// Read-only view of a bank question as the relevance engine sees it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
	pub id: Uuid,
	#[serde(default)]
	pub tags: Vec<String>,
	#[serde(default)]
	pub category: Option<String>,
	pub question_type: QuestionType,
	pub difficulty: u8,
	pub stem: String,
	#[serde(default)]
	pub popularity: u64,
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
}
impl Item {
	/// Category with surrounding whitespace removed, or `None` when blank.
	pub fn category(&self) -> Option<&str> {
		self.category.as_deref().map(str::trim).filter(|value| !value.is_empty())
	}

	pub fn has_tags(&self) -> bool {
		self.tags.iter().any(|tag| !tag.trim().is_empty())
	}
}

pub const MIN_DIFFICULTY: u8 = 1;
pub const MAX_DIFFICULTY: u8 = 5;

pub fn is_valid_difficulty(difficulty: u8) -> bool {
	(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty)
}

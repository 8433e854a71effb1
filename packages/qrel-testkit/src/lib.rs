mod error;

pub use error::{Error, Result};

use std::{
	env, fs,
	path::{Path, PathBuf},
};

use time::{Duration, OffsetDateTime, macros::datetime};
use uuid::Uuid;

use qrel_domain::{Item, QuestionType};

pub const BASE_CREATED_AT: OffsetDateTime = datetime!(2024-09-01 08:00 UTC);

pub struct ItemBuilder {
	item: Item,
}
impl ItemBuilder {
	pub fn new(stem: &str) -> Self {
		Self {
			item: Item {
				id: Uuid::new_v4(),
				tags: Vec::new(),
				category: Some("高考真题".to_string()),
				question_type: QuestionType::Solution,
				difficulty: 3,
				stem: stem.to_string(),
				popularity: 0,
				created_at: BASE_CREATED_AT,
			},
		}
	}

	pub fn id(mut self, id: Uuid) -> Self {
		self.item.id = id;

		self
	}

	pub fn tags(mut self, tags: &[&str]) -> Self {
		self.item.tags = tags.iter().map(|tag| tag.to_string()).collect();

		self
	}

	pub fn category(mut self, category: Option<&str>) -> Self {
		self.item.category = category.map(str::to_string);

		self
	}

	pub fn question_type(mut self, question_type: QuestionType) -> Self {
		self.item.question_type = question_type;

		self
	}

	pub fn difficulty(mut self, difficulty: u8) -> Self {
		self.item.difficulty = difficulty;

		self
	}

	pub fn popularity(mut self, popularity: u64) -> Self {
		self.item.popularity = popularity;

		self
	}

	pub fn created_days_ago(mut self, days: i64) -> Self {
		self.item.created_at = BASE_CREATED_AT - Duration::days(days);

		self
	}

	pub fn build(self) -> Item {
		self.item
	}
}

/// Stable ids for the sample bank, so tests can address items directly.
pub mod ids {
	use uuid::Uuid;

	pub const DERIVATIVE_MONOTONIC: Uuid = Uuid::from_u128(0x1001);
	pub const DERIVATIVE_MONOTONIC_VARIANT: Uuid = Uuid::from_u128(0x1002);
	pub const DERIVATIVE_EXTREMUM: Uuid = Uuid::from_u128(0x1003);
	pub const DERIVATIVE_APPLICATION: Uuid = Uuid::from_u128(0x1004);
	pub const LIMIT_BASIC: Uuid = Uuid::from_u128(0x1005);
	pub const GEOMETRY_TRIANGLE: Uuid = Uuid::from_u128(0x2001);
	pub const PROBABILITY_BALLS: Uuid = Uuid::from_u128(0x3001);
	pub const UNTAGGED: Uuid = Uuid::from_u128(0x4001);
}

/// A small bank covering related, loosely related and unrelated questions.
pub fn sample_items() -> Vec<Item> {
	vec![
		ItemBuilder::new("已知函数 $f(x)=x^3-3x+1$，求 f(x) 的单调区间。")
			.id(ids::DERIVATIVE_MONOTONIC)
			.tags(&["导数", "函数单调性"])
			.difficulty(3)
			.popularity(120)
			.build(),
		ItemBuilder::new("已知函数 $f(x)=x^3-3x+2$，求 f(x) 的单调区间。")
			.id(ids::DERIVATIVE_MONOTONIC_VARIANT)
			.tags(&["导数", "函数单调性"])
			.difficulty(3)
			.popularity(80)
			.created_days_ago(3)
			.build(),
		ItemBuilder::new("已知函数 $f(x)=x^3-3x$，求 f(x) 的极值。")
			.id(ids::DERIVATIVE_EXTREMUM)
			.tags(&["导数"])
			.difficulty(4)
			.popularity(60)
			.created_days_ago(10)
			.build(),
		ItemBuilder::new("某工厂生产 x 件产品的成本为 C(x)=0.5x^2+20x+100 元，求利润最大时的产量。")
			.id(ids::DERIVATIVE_APPLICATION)
			.tags(&["导数应用"])
			.category(Some("模拟题"))
			.difficulty(5)
			.popularity(40)
			.created_days_ago(30)
			.build(),
		ItemBuilder::new("求极限 $\\lim_{x \\to 0} \\frac{\\sin x}{x}$ 的值。")
			.id(ids::LIMIT_BASIC)
			.tags(&["极限"])
			.question_type(QuestionType::Fill)
			.difficulty(2)
			.popularity(90)
			.build(),
		ItemBuilder::new("在三角形 ABC 中，AB=3，AC=4，角 A 为直角，求 BC 的长。")
			.id(ids::GEOMETRY_TRIANGLE)
			.tags(&["平面几何"])
			.question_type(QuestionType::Choice)
			.difficulty(1)
			.popularity(200)
			.build(),
		ItemBuilder::new("袋中有 3 个红球和 2 个白球，任取 2 个，求恰有 1 个红球的概率。")
			.id(ids::PROBABILITY_BALLS)
			.tags(&["概率"])
			.question_type(QuestionType::Choice)
			.difficulty(2)
			.popularity(150)
			.build(),
		ItemBuilder::new("计算 1+2+3+...+100 的值。")
			.id(ids::UNTAGGED)
			.question_type(QuestionType::Fill)
			.difficulty(1)
			.popularity(10)
			.build(),
	]
}

/// Question bank file in the temp directory, removed on cleanup or drop.
pub struct TestBank {
	path: PathBuf,
	cleaned: bool,
}
impl TestBank {
	pub fn new(items: &[Item]) -> Result<Self> {
		let mut path = env::temp_dir();

		path.push(format!("qrel_bank_{}.json", Uuid::new_v4().simple()));

		let payload = serde_json::to_string_pretty(&serde_json::json!({ "items": items }))?;

		fs::write(&path, payload)?;

		Ok(Self { path, cleaned: false })
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn cleanup(mut self) -> Result<()> {
		self.cleanup_inner()
	}

	fn cleanup_inner(&mut self) -> Result<()> {
		if self.cleaned {
			return Ok(());
		}

		fs::remove_file(&self.path).map_err(|err| {
			Error::Message(format!("Failed to remove test bank {}: {err}.", self.path.display()))
		})?;

		self.cleaned = true;

		Ok(())
	}
}
impl Drop for TestBank {
	fn drop(&mut self) {
		if let Err(err) = self.cleanup_inner() {
			eprintln!("Test bank cleanup failed: {err}");
		}
	}
}

pub mod candidates;
pub mod related;

mod error;

pub use error::{Error, Result};
pub use related::{RelatedExplain, RelatedItem, RelatedRequest, RelatedResponse};

use std::{future::Future, pin::Pin, sync::Arc};

use uuid::Uuid;

use qrel_config::Config;
use qrel_domain::Item;
use qrel_storage::{bank::QuestionBank, queries::CandidateQuery};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Source of target items and candidate pools.
pub trait QuestionRepository
where
	Self: Send + Sync,
{
	fn fetch_item<'a>(&'a self, id: Uuid) -> BoxFuture<'a, Result<Option<Item>>>;

	fn fetch_candidates<'a>(
		&'a self,
		query: &'a CandidateQuery,
	) -> BoxFuture<'a, Result<Vec<Item>>>;
}

impl QuestionRepository for QuestionBank {
	fn fetch_item<'a>(&'a self, id: Uuid) -> BoxFuture<'a, Result<Option<Item>>> {
		let item = self.get(id).cloned();

		Box::pin(async move { Ok(item) })
	}

	fn fetch_candidates<'a>(
		&'a self,
		query: &'a CandidateQuery,
	) -> BoxFuture<'a, Result<Vec<Item>>> {
		let items = self.find_candidates(query);

		Box::pin(async move { Ok(items) })
	}
}

pub struct RelatedService {
	pub cfg: Config,
	pub repository: Arc<dyn QuestionRepository>,
}
impl RelatedService {
	pub fn new(cfg: Config, repository: Arc<dyn QuestionRepository>) -> Self {
		Self { cfg, repository }
	}
}

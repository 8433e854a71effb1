use std::sync::Arc;

use qrel_config::Config;
use qrel_service::{QuestionRepository, RelatedService};
use qrel_storage::bank::QuestionBank;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<RelatedService>,
	/// Echo internal error details to callers.
	pub diagnostics: bool,
}
impl AppState {
	/// Loads the question bank named by `config.storage.bank_path`.
	pub fn new(config: Config) -> color_eyre::Result<Self> {
		let bank = QuestionBank::load(&config.storage.bank_path)?;

		Ok(Self::with_repository(config, Arc::new(bank)))
	}

	pub fn with_repository(config: Config, repository: Arc<dyn QuestionRepository>) -> Self {
		let diagnostics = config.service.diagnostics;

		Self { service: Arc::new(RelatedService::new(config, repository)), diagnostics }
	}
}

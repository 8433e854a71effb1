#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to read question bank at {path:?}.")]
	ReadBank { path: std::path::PathBuf, source: std::io::Error },
	#[error("Failed to parse question bank at {path:?}.")]
	ParseBank { path: std::path::PathBuf, source: serde_json::Error },
	#[error("Invalid item: {0}")]
	InvalidItem(String),
	#[error("Conflict: {0}")]
	Conflict(String),
}

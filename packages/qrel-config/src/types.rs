use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	#[serde(default)]
	pub retrieval: Retrieval,
	#[serde(default)]
	pub scoring: Scoring,
	#[serde(default)]
	pub security: Security,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	#[serde(default = "default_log_level")]
	pub log_level: String,
	/// When true, internal error details are echoed back to API callers.
	#[serde(default)]
	pub diagnostics: bool,
}

#[derive(Debug, Deserialize)]
pub struct Storage {
	/// JSON question bank. Relative paths resolve against the config file's directory.
	pub bank_path: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Retrieval {
	/// Upper bound on candidates handed to the scorer per request.
	pub pool_cap: u32,
	pub default_limit: u32,
	pub max_limit: u32,
}
impl Default for Retrieval {
	fn default() -> Self {
		Self { pool_cap: 100, default_limit: 3, max_limit: 20 }
	}
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Scoring {
	/// Pools at least this large are scored on the rayon thread pool.
	pub parallel_threshold: u32,
}
impl Default for Scoring {
	fn default() -> Self {
		Self { parallel_threshold: 64 }
	}
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Security {
	pub bind_localhost_only: bool,
}
impl Default for Security {
	fn default() -> Self {
		Self { bind_localhost_only: true }
	}
}

fn default_log_level() -> String {
	"info".to_string()
}

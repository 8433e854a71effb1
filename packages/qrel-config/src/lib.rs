mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Retrieval, Scoring, Security, Service, Storage};

use std::{fs, net::SocketAddr, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg, path.parent());

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}

	let http_addr: SocketAddr = cfg.service.http_bind.trim().parse().map_err(|_| {
		Error::Validation {
			message: "service.http_bind must be a socket address such as 127.0.0.1:8090."
				.to_string(),
		}
	})?;

	if cfg.security.bind_localhost_only && !http_addr.ip().is_loopback() {
		return Err(Error::Validation {
			message: "service.http_bind must be a loopback address when \
				security.bind_localhost_only is true."
				.to_string(),
		});
	}
	if cfg.storage.bank_path.as_os_str().is_empty() {
		return Err(Error::Validation {
			message: "storage.bank_path must be non-empty.".to_string(),
		});
	}
	if cfg.retrieval.pool_cap == 0 {
		return Err(Error::Validation {
			message: "retrieval.pool_cap must be greater than zero.".to_string(),
		});
	}
	if cfg.retrieval.max_limit == 0 {
		return Err(Error::Validation {
			message: "retrieval.max_limit must be greater than zero.".to_string(),
		});
	}
	if cfg.retrieval.default_limit == 0 || cfg.retrieval.default_limit > cfg.retrieval.max_limit {
		return Err(Error::Validation {
			message: "retrieval.default_limit must be between 1 and retrieval.max_limit."
				.to_string(),
		});
	}
	if cfg.scoring.parallel_threshold == 0 {
		return Err(Error::Validation {
			message: "scoring.parallel_threshold must be greater than zero.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config, config_dir: Option<&Path>) {
	if cfg.service.log_level.trim().is_empty() {
		cfg.service.log_level = "info".to_string();
	}

	if let Some(dir) = config_dir
		&& cfg.storage.bank_path.is_relative()
		&& !cfg.storage.bank_path.as_os_str().is_empty()
	{
		cfg.storage.bank_path = dir.join(&cfg.storage.bank_path);
	}
}

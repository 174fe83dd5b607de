mod error;
mod types;

pub use error::{Error, Result};
pub use types::{
	Config, Curation, EmbeddingConfig, Providers, Qdrant, Search, Service, Storage,
};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.storage.qdrant.collection.trim().is_empty() {
		return Err(Error::Validation {
			message: "storage.qdrant.collection must be non-empty.".to_string(),
		});
	}
	if cfg.providers.embedding.dimensions == 0 {
		return Err(Error::Validation {
			message: "providers.embedding.dimensions must be greater than zero.".to_string(),
		});
	}
	if cfg.providers.embedding.dimensions != cfg.storage.qdrant.vector_dim {
		return Err(Error::Validation {
			message: "providers.embedding.dimensions must match storage.qdrant.vector_dim."
				.to_string(),
		});
	}
	if cfg.providers.embedding.api_key.trim().is_empty() {
		return Err(Error::Validation {
			message: "providers.embedding.api_key must be non-empty.".to_string(),
		});
	}
	if cfg.curation.min_year > cfg.curation.max_year {
		return Err(Error::Validation {
			message: "curation.min_year must not exceed curation.max_year.".to_string(),
		});
	}
	if cfg.curation.target_size == 0 {
		return Err(Error::Validation {
			message: "curation.target_size must be greater than zero.".to_string(),
		});
	}

	if let Some(peak) = cfg.curation.peak_year
		&& !(cfg.curation.min_year..=cfg.curation.max_year).contains(&peak)
	{
		return Err(Error::Validation {
			message: "curation.peak_year must fall within the curation year range.".to_string(),
		});
	}

	if cfg.search.default_top_k == 0 {
		return Err(Error::Validation {
			message: "search.default_top_k must be greater than zero.".to_string(),
		});
	}
	if !matches!(cfg.search.actor_filter.as_str(), "hard" | "boost") {
		return Err(Error::Validation {
			message: "search.actor_filter must be one of hard or boost.".to_string(),
		});
	}
	if !cfg.search.actor_boost.is_finite() || !(0.0..=1.0).contains(&cfg.search.actor_boost) {
		return Err(Error::Validation {
			message: "search.actor_boost must be in the range 0.0-1.0.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	if let Some(stripped) = cfg.providers.embedding.api_base.strip_suffix('/') {
		cfg.providers.embedding.api_base = stripped.to_string();
	}
}

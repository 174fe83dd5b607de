use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	pub providers: Providers,
	#[serde(default)]
	pub curation: Curation,
	#[serde(default)]
	pub search: Search,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Storage {
	pub qdrant: Qdrant,
}

#[derive(Debug, Deserialize)]
pub struct Qdrant {
	pub url: String,
	pub collection: String,
	pub vector_dim: u32,
}

#[derive(Debug, Deserialize)]
pub struct Providers {
	pub embedding: EmbeddingConfig,
}

#[derive(Debug, Deserialize)]
pub struct EmbeddingConfig {
	pub api_base: String,
	pub api_key: String,
	pub path: String,
	pub model: String,
	pub dimensions: u32,
	pub timeout_ms: u64,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Curation {
	pub min_year: i32,
	pub max_year: i32,
	pub target_size: usize,
	/// Years strictly after this one are kept in full; only years up to and
	/// including it participate in weighted sampling.
	pub peak_year: Option<i32>,
}
impl Default for Curation {
	fn default() -> Self {
		Self { min_year: 1975, max_year: 2025, target_size: 80_000, peak_year: None }
	}
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Search {
	pub default_top_k: u32,
	/// "hard" drops candidates missing every requested actor; "boost" raises
	/// their score per matching actor instead.
	pub actor_filter: String,
	pub actor_boost: f32,
}
impl Default for Search {
	fn default() -> Self {
		Self { default_top_k: 10, actor_filter: "boost".to_string(), actor_boost: 0.15 }
	}
}

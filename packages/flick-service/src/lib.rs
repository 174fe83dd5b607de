pub mod planner;
pub mod rerank;
pub mod search;

mod error;

use std::{future::Future, pin::Pin, sync::Arc};

pub use error::{Error, Result};
pub use search::{HealthResponse, Movie, RecommendRequest, SearchRequest, SearchResponse};

use flick_config::{Config, EmbeddingConfig};
use flick_providers::embedding;
use flick_storage::qdrant::PlotIndex;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Query-text encoder. Injected so tests and alternative backends can stand
/// in for the HTTP provider.
pub trait EmbeddingProvider
where
	Self: Send + Sync,
{
	fn embed<'a>(
		&'a self,
		cfg: &'a EmbeddingConfig,
		texts: &'a [String],
	) -> BoxFuture<'a, color_eyre::Result<Vec<Vec<f32>>>>;
}

struct DefaultProvider;

impl EmbeddingProvider for DefaultProvider {
	fn embed<'a>(
		&'a self,
		cfg: &'a EmbeddingConfig,
		texts: &'a [String],
	) -> BoxFuture<'a, color_eyre::Result<Vec<Vec<f32>>>> {
		Box::pin(embedding::embed(cfg, texts))
	}
}

/// Request-path service: owns the config, the vector index handle, and the
/// embedding provider. Constructed once at startup and shared behind an
/// `Arc`; every call is a stateless transformation.
pub struct FlickService {
	pub cfg: Config,
	pub index: PlotIndex,
	pub embedding: Arc<dyn EmbeddingProvider>,
}
impl FlickService {
	pub fn new(cfg: Config, index: PlotIndex) -> Self {
		Self { cfg, index, embedding: Arc::new(DefaultProvider) }
	}

	pub fn with_provider(
		cfg: Config,
		index: PlotIndex,
		embedding: Arc<dyn EmbeddingProvider>,
	) -> Self {
		Self { cfg, index, embedding }
	}
}

use std::collections::HashMap;

use qdrant_client::qdrant::{PointId, ScoredPoint, Value, point_id::PointIdOptions, value::Kind};
use serde::{Deserialize, Serialize};

use flick_domain::FilterMode;

use crate::{
	Error, FlickService, Result, planner,
	rerank::{RerankParams, rerank},
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
	pub query: String,
	pub top_k: Option<u32>,
	#[serde(default)]
	pub genres: Vec<String>,
	#[serde(default)]
	pub actors: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendRequest {
	pub movie_id: String,
	pub top_k: Option<u32>,
	#[serde(default)]
	pub genres: Vec<String>,
	#[serde(default)]
	pub actors: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
	pub id: String,
	pub title: String,
	pub overview: String,
	pub genres: String,
	pub release_date: String,
	pub popularity: f64,
	pub poster_path: String,
	pub production_companies: String,
	pub credits: String,
	pub score: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
	pub results: Vec<Movie>,
	pub query: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
	pub status: String,
	pub model: String,
	pub index: String,
}

impl FlickService {
	/// Free-text search over plot embeddings with optional genre/actor
	/// filtering.
	pub async fn search(&self, req: SearchRequest) -> Result<SearchResponse> {
		if req.query.trim().is_empty() {
			return Err(Error::InvalidRequest { message: "query must be non-empty.".to_string() });
		}

		let top_k = self.resolve_top_k(req.top_k)?;
		let has_genres = !req.genres.is_empty();
		let has_actors = !req.actors.is_empty();
		let vector = self.embed_query(req.query.trim()).await?;
		let limit = planner::fetch_limit(top_k, has_genres, has_actors, false);
		let points = self.index.search(vector, limit).await?;
		let candidates: Vec<Movie> = points.into_iter().filter_map(movie_from_point).collect();

		tracing::debug!(candidates = candidates.len(), limit, "Retrieved search candidates.");

		let results = rerank(candidates, &RerankParams {
			genres: &req.genres,
			actors: &req.actors,
			mode: self.filter_mode(has_genres, has_actors),
			actor_boost: self.cfg.search.actor_boost,
			exclude_id: None,
			top_k: top_k as usize,
		});

		Ok(SearchResponse { results, query: req.query })
	}

	/// Neighbors of a stored movie, re-ranked with the same filter pipeline.
	/// Fails with `NotFound` when the seed id is not in the index.
	pub async fn recommend(&self, req: RecommendRequest) -> Result<SearchResponse> {
		let movie_id = req.movie_id.trim();

		if movie_id.is_empty() {
			return Err(Error::InvalidRequest {
				message: "movie_id must be non-empty.".to_string(),
			});
		}

		let top_k = self.resolve_top_k(req.top_k)?;
		// Point ids are numeric catalog ids, so anything non-numeric cannot
		// be in the index.
		let point_id: u64 = movie_id.parse().map_err(|_| Error::NotFound {
			message: format!("Movie {movie_id} is not indexed."),
		})?;
		let seed = self.index.fetch(point_id).await?.ok_or_else(|| Error::NotFound {
			message: format!("Movie {movie_id} is not indexed."),
		})?;
		let seed_title = payload_str(&seed.payload, "title");
		let has_genres = !req.genres.is_empty();
		let has_actors = !req.actors.is_empty();
		let limit = planner::fetch_limit(top_k, has_genres, has_actors, true);
		let points = self.index.search_similar_to(point_id, limit).await?;
		let candidates: Vec<Movie> = points.into_iter().filter_map(movie_from_point).collect();

		tracing::debug!(
			candidates = candidates.len(),
			limit,
			seed = movie_id,
			"Retrieved recommendation candidates."
		);

		let results = rerank(candidates, &RerankParams {
			genres: &req.genres,
			actors: &req.actors,
			mode: self.filter_mode(has_genres, has_actors),
			actor_boost: self.cfg.search.actor_boost,
			exclude_id: Some(movie_id),
			top_k: top_k as usize,
		});

		Ok(SearchResponse { results, query: format!("Similar to: {seed_title}") })
	}

	/// Static readiness payload; deliberately avoids touching the index so
	/// health stays observable while upstream services are down.
	pub fn health(&self) -> HealthResponse {
		HealthResponse {
			status: "healthy".to_string(),
			model: self.cfg.providers.embedding.model.clone(),
			index: self.cfg.storage.qdrant.collection.clone(),
		}
	}

	fn filter_mode(&self, has_genres: bool, has_actors: bool) -> FilterMode {
		FilterMode::resolve(has_genres, has_actors, self.cfg.search.actor_filter == "boost")
	}

	fn resolve_top_k(&self, top_k: Option<u32>) -> Result<u32> {
		let top_k = top_k.unwrap_or(self.cfg.search.default_top_k);

		if top_k == 0 {
			return Err(Error::InvalidRequest {
				message: "top_k must be greater than zero.".to_string(),
			});
		}

		Ok(top_k)
	}

	async fn embed_query(&self, query: &str) -> Result<Vec<f32>> {
		let texts = [query.to_string()];
		let embeddings = self.embedding.embed(&self.cfg.providers.embedding, &texts).await?;
		let vector = embeddings.into_iter().next().ok_or_else(|| Error::Provider {
			message: "Embedding provider returned no vectors.".to_string(),
		})?;

		if vector.len() != self.cfg.storage.qdrant.vector_dim as usize {
			return Err(Error::Provider {
				message: "Embedding vector dimension mismatch.".to_string(),
			});
		}

		Ok(vector)
	}
}

fn movie_from_point(point: ScoredPoint) -> Option<Movie> {
	let id = point.id.as_ref().and_then(point_id_to_string)?;
	let payload = &point.payload;

	Some(Movie {
		id,
		title: payload_str(payload, "title"),
		overview: payload_str(payload, "overview"),
		genres: payload_str(payload, "genres"),
		release_date: payload_str(payload, "release_date"),
		popularity: payload_f64(payload, "popularity"),
		poster_path: payload_str(payload, "poster_path"),
		production_companies: payload_str(payload, "production_companies"),
		credits: payload_str(payload, "credits"),
		score: point.score,
	})
}

fn point_id_to_string(point_id: &PointId) -> Option<String> {
	match &point_id.point_id_options {
		Some(PointIdOptions::Num(id)) => Some(id.to_string()),
		Some(PointIdOptions::Uuid(id)) => Some(id.clone()),
		None => None,
	}
}

fn payload_str(payload: &HashMap<String, Value>, key: &str) -> String {
	match payload.get(key).and_then(|value| value.kind.as_ref()) {
		Some(Kind::StringValue(text)) => text.clone(),
		_ => String::new(),
	}
}

fn payload_f64(payload: &HashMap<String, Value>, key: &str) -> f64 {
	match payload.get(key).and_then(|value| value.kind.as_ref()) {
		Some(Kind::DoubleValue(value)) => *value,
		Some(Kind::IntegerValue(value)) => *value as f64,
		_ => 0.,
	}
}

use std::{collections::HashMap, path::Path};

use color_eyre::eyre;
use qdrant_client::{
	client::Payload,
	qdrant::{PointStruct, Value},
};

use flick_config::Config;
use flick_curation::io;
use flick_domain::{
	CatalogRecord, MAX_COMPANIES_CHARS, MAX_CREDITS_CHARS, MAX_OVERVIEW_CHARS, truncate_chars,
};
use flick_providers::embedding;
use flick_storage::qdrant::PlotIndex;

const EMBED_BATCH_SIZE: usize = 32;
const UPSERT_BATCH_SIZE: usize = 100;

/// Embeds every record's overview and upserts one point per movie. Reruns are
/// idempotent since points are keyed by catalog id.
pub async fn run(config: &Config, input: &Path) -> color_eyre::Result<()> {
	let records = io::read_catalog(input)?;
	let mut skipped = 0_u64;
	let mut keyed: Vec<(u64, CatalogRecord)> = Vec::with_capacity(records.len());

	for record in records {
		match numeric_id(&record) {
			Some(id) => keyed.push((id, record)),
			None => skipped += 1,
		}
	}

	if skipped > 0 {
		tracing::warn!(skipped, "Skipped records without a numeric identifier.");
	}

	let total = keyed.len();
	let index = PlotIndex::new(&config.storage.qdrant)?;

	index.ensure_collection().await?;

	let mut pending: Vec<PointStruct> = Vec::with_capacity(UPSERT_BATCH_SIZE);
	let mut upserted = 0_usize;

	for batch in keyed.chunks(EMBED_BATCH_SIZE) {
		let texts: Vec<String> = batch
			.iter()
			.map(|(_, record)| truncate_chars(&record.overview, MAX_OVERVIEW_CHARS))
			.collect();
		let vectors = embedding::embed(&config.providers.embedding, &texts).await?;

		for ((id, record), vector) in batch.iter().zip(vectors) {
			if vector.len() != config.storage.qdrant.vector_dim as usize {
				return Err(eyre::eyre!(
					"Embedding endpoint returned a {}-dimensional vector for movie {id}; expected {}.",
					vector.len(),
					config.storage.qdrant.vector_dim,
				));
			}

			pending.push(PointStruct::new(*id, vector, point_payload(record)));

			if pending.len() == UPSERT_BATCH_SIZE {
				index.upsert(std::mem::take(&mut pending)).await?;

				upserted += UPSERT_BATCH_SIZE;

				tracing::info!(upserted, total, "Upserted embedding batch.");
			}
		}
	}

	if !pending.is_empty() {
		upserted += pending.len();

		index.upsert(pending).await?;
	}

	let (points_count, vector_dim) = index.stats().await?;

	tracing::info!(upserted, points_count, vector_dim, "Embedding upload complete.");

	Ok(())
}

/// Point ids in the index are unsigned integers, so only records whose catalog
/// id parses as one can be uploaded.
fn numeric_id(record: &CatalogRecord) -> Option<u64> {
	record.id.as_deref().and_then(|id| id.trim().parse().ok())
}

fn payload_map(record: &CatalogRecord) -> HashMap<String, Value> {
	let mut payload = HashMap::new();

	payload.insert("title".to_string(), Value::from(record.title.clone()));
	payload.insert(
		"overview".to_string(),
		Value::from(truncate_chars(&record.overview, MAX_OVERVIEW_CHARS)),
	);
	payload.insert("genres".to_string(), Value::from(record.genres.clone()));
	payload.insert("release_date".to_string(), Value::from(record.release_date.clone()));
	payload.insert("popularity".to_string(), Value::from(record.popularity_score()));
	payload.insert("poster_path".to_string(), Value::from(record.poster_path.clone()));
	payload.insert(
		"production_companies".to_string(),
		Value::from(truncate_chars(&record.production_companies, MAX_COMPANIES_CHARS)),
	);
	payload.insert(
		"credits".to_string(),
		Value::from(truncate_chars(&record.credits, MAX_CREDITS_CHARS)),
	);

	payload
}

fn point_payload(record: &CatalogRecord) -> Payload {
	Payload::from(payload_map(record))
}

#[cfg(test)]
mod tests {
	use qdrant_client::qdrant::value::Kind;

	use super::*;

	fn record() -> CatalogRecord {
		CatalogRecord {
			id: Some("603".to_string()),
			title: "The Matrix".to_string(),
			overview: "A hacker learns the truth.".to_string(),
			genres: "Action, Science Fiction".to_string(),
			release_date: "1999-03-31".to_string(),
			popularity: Some(83.2),
			poster_path: "/matrix.jpg".to_string(),
			production_companies: "Warner Bros.".to_string(),
			credits: "Keanu Reeves, Carrie-Anne Moss".to_string(),
			status: "Released".to_string(),
		}
	}

	fn string_field(payload: &HashMap<String, Value>, key: &str) -> String {
		match payload[key].kind.as_ref() {
			Some(Kind::StringValue(text)) => text.clone(),
			other => panic!("{key} is not a string payload: {other:?}"),
		}
	}

	#[test]
	fn numeric_identifiers_parse_with_whitespace_tolerated() {
		assert_eq!(numeric_id(&record()), Some(603));

		let mut padded = record();
		padded.id = Some(" 42 ".to_string());
		assert_eq!(numeric_id(&padded), Some(42));
	}

	#[test]
	fn non_numeric_identifiers_are_rejected() {
		let mut named = record();
		named.id = Some("tt0133093".to_string());
		assert_eq!(numeric_id(&named), None);

		let mut missing = record();
		missing.id = None;
		assert_eq!(numeric_id(&missing), None);
	}

	#[test]
	fn payload_truncates_long_text_fields() {
		let mut record = record();
		record.overview = "x".repeat(MAX_OVERVIEW_CHARS + 500);
		record.credits = "y".repeat(MAX_CREDITS_CHARS + 100);

		let payload = payload_map(&record);

		assert_eq!(string_field(&payload, "overview").chars().count(), MAX_OVERVIEW_CHARS);
		assert_eq!(string_field(&payload, "credits").chars().count(), MAX_CREDITS_CHARS);
		assert_eq!(string_field(&payload, "title"), "The Matrix");
	}

	#[test]
	fn payload_carries_popularity_as_a_double() {
		let payload = payload_map(&record());

		match payload["popularity"].kind.as_ref() {
			Some(Kind::DoubleValue(value)) => assert!((value - 83.2).abs() < 1e-9),
			other => panic!("popularity is not a double payload: {other:?}"),
		}
	}
}

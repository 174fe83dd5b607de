use qdrant_client::qdrant::{
	CreateCollectionBuilder, Distance, GetPointsBuilder, PointId, PointStruct, Query,
	QueryPointsBuilder, RetrievedPoint, ScoredPoint, UpsertPointsBuilder, VectorInput,
	VectorParamsBuilder,
};

use crate::Result;

/// Approximate-nearest-neighbor index over plot embeddings. One unnamed
/// cosine vector per movie; point ids are the numeric catalog ids.
pub struct PlotIndex {
	pub client: qdrant_client::Qdrant,
	pub collection: String,
	pub vector_dim: u32,
}
impl PlotIndex {
	pub fn new(cfg: &flick_config::Qdrant) -> Result<Self> {
		let client = qdrant_client::Qdrant::from_url(&cfg.url).build()?;

		Ok(Self { client, collection: cfg.collection.clone(), vector_dim: cfg.vector_dim })
	}

	/// Creates the collection when absent; an existing collection is reused
	/// as-is.
	pub async fn ensure_collection(&self) -> Result<()> {
		if self.client.collection_exists(&self.collection).await? {
			return Ok(());
		}

		self.client
			.create_collection(
				CreateCollectionBuilder::new(&self.collection).vectors_config(
					VectorParamsBuilder::new(u64::from(self.vector_dim), Distance::Cosine),
				),
			)
			.await?;

		Ok(())
	}

	pub async fn upsert(&self, points: Vec<PointStruct>) -> Result<()> {
		self.client
			.upsert_points(UpsertPointsBuilder::new(&self.collection, points).wait(true))
			.await?;

		Ok(())
	}

	pub async fn search(&self, vector: Vec<f32>, limit: u64) -> Result<Vec<ScoredPoint>> {
		let response = self
			.client
			.query(
				QueryPointsBuilder::new(&self.collection)
					.query(Query::new_nearest(vector))
					.with_payload(true)
					.limit(limit),
			)
			.await?;

		Ok(response.result)
	}

	/// Nearest neighbors of a stored point, queried by its id.
	pub async fn search_similar_to(&self, id: u64, limit: u64) -> Result<Vec<ScoredPoint>> {
		let response = self
			.client
			.query(
				QueryPointsBuilder::new(&self.collection)
					.query(Query::new_nearest(VectorInput::new_id(PointId::from(id))))
					.with_payload(true)
					.limit(limit),
			)
			.await?;

		Ok(response.result)
	}

	/// Payload-only point lookup; `None` when the id is not stored.
	pub async fn fetch(&self, id: u64) -> Result<Option<RetrievedPoint>> {
		let response = self
			.client
			.get_points(
				GetPointsBuilder::new(&self.collection, vec![PointId::from(id)])
					.with_payload(true)
					.with_vectors(false),
			)
			.await?;

		Ok(response.result.into_iter().next())
	}

	/// Current point count as reported by the collection.
	pub async fn stats(&self) -> Result<(u64, u32)> {
		let info = self.client.collection_info(&self.collection).await?;
		let points_count =
			info.result.and_then(|collection| collection.points_count).unwrap_or(0);

		Ok((points_count, self.vector_dim))
	}
}

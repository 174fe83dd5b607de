use std::sync::Arc;

use flick_service::FlickService;
use flick_storage::qdrant::PlotIndex;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<FlickService>,
}
impl AppState {
	pub fn new(config: flick_config::Config) -> color_eyre::Result<Self> {
		let index = PlotIndex::new(&config.storage.qdrant)?;
		let service = FlickService::new(config, index);

		Ok(Self { service: Arc::new(service) })
	}
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to read catalog at {path}.")]
	ReadCatalog { path: String, source: csv::Error },
	#[error("Failed to write catalog at {path}.")]
	WriteCatalog { path: String, source: csv::Error },
}

use std::path::Path;

use flick_domain::CatalogRecord;

use crate::{Error, Result};

/// Reads a catalog export. Rows that fail to deserialize at all (ragged
/// lines, wrong column types) are skipped and counted; completeness checks
/// on well-formed rows belong to curation, not parsing.
pub fn read_catalog(path: &Path) -> Result<Vec<CatalogRecord>> {
	let mut reader = csv::Reader::from_path(path)
		.map_err(|err| Error::ReadCatalog { path: path.display().to_string(), source: err })?;
	let mut records = Vec::new();
	let mut skipped = 0_u64;

	for row in reader.deserialize::<CatalogRecord>() {
		match row {
			Ok(record) => records.push(record),
			Err(err) => {
				skipped += 1;

				tracing::debug!(error = %err, "Skipped unreadable catalog row.");
			},
		}
	}

	if skipped > 0 {
		tracing::warn!(skipped, "Some catalog rows could not be parsed.");
	}

	Ok(records)
}

pub fn write_catalog(path: &Path, records: &[CatalogRecord]) -> Result<()> {
	let mut writer = csv::Writer::from_path(path)
		.map_err(|err| Error::WriteCatalog { path: path.display().to_string(), source: err })?;

	for record in records {
		writer
			.serialize(record)
			.map_err(|err| Error::WriteCatalog { path: path.display().to_string(), source: err })?;
	}

	writer
		.flush()
		.map_err(|err| Error::WriteCatalog { path: path.display().to_string(), source: err.into() })?;

	Ok(())
}

use std::collections::HashSet;

use flick_config::Curation;
use flick_domain::{CatalogRecord, RELEASED_STATUS};

use crate::sampler::{SamplingMode, sample_by_year};

/// Surviving record counts after each curation pass.
#[derive(Clone, Copy, Debug)]
pub struct CurationReport {
	pub initial: usize,
	pub with_required_fields: usize,
	pub deduplicated: usize,
	pub released: usize,
	pub in_year_range: usize,
	pub selected: usize,
}

/// Filters a raw catalog down to complete, released, date-bounded records and
/// shrinks it with the recency-weighted sampler when it outgrows the target
/// budget. Malformed records are excluded, never reported as errors.
pub fn curate(records: Vec<CatalogRecord>, cfg: &Curation) -> (Vec<CatalogRecord>, CurationReport) {
	let initial = records.len();
	let mut records: Vec<CatalogRecord> =
		records.into_iter().filter(CatalogRecord::required_fields_present).collect();
	let with_required_fields = records.len();
	// First occurrence wins. Records without an identifier cannot be
	// deduplicated and pass through as-is.
	let mut seen_ids = HashSet::new();

	records.retain(|record| match &record.id {
		Some(id) => seen_ids.insert(id.clone()),
		None => true,
	});

	let deduplicated = records.len();

	records.retain(|record| record.status == RELEASED_STATUS);

	let released = records.len();

	records.retain(|record| {
		record
			.release_year()
			.map(|year| (cfg.min_year..=cfg.max_year).contains(&year))
			.unwrap_or(false)
	});

	let in_year_range = records.len();
	let records = if records.len() > cfg.target_size {
		let mode = match cfg.peak_year {
			Some(peak_year) => SamplingMode::Peaked { peak_year },
			None => SamplingMode::Plain,
		};

		sample_by_year(records, cfg.target_size, mode)
	} else {
		records
	};
	let report = CurationReport {
		initial,
		with_required_fields,
		deduplicated,
		released,
		in_year_range,
		selected: records.len(),
	};

	tracing::info!(
		initial = report.initial,
		with_required_fields = report.with_required_fields,
		deduplicated = report.deduplicated,
		released = report.released,
		in_year_range = report.in_year_range,
		selected = report.selected,
		"Curated catalog."
	);

	(records, report)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn curation() -> Curation {
		Curation { min_year: 1975, max_year: 2025, target_size: 80_000, peak_year: None }
	}

	fn record(id: &str, year: i32) -> CatalogRecord {
		CatalogRecord {
			id: Some(id.to_string()),
			title: format!("Movie {id}"),
			overview: "A plot.".to_string(),
			genres: "Drama".to_string(),
			release_date: format!("{year}-06-15"),
			popularity: Some(1.),
			poster_path: "/poster.jpg".to_string(),
			production_companies: "Studio".to_string(),
			credits: "Cast Member".to_string(),
			status: RELEASED_STATUS.to_string(),
		}
	}

	#[test]
	fn incomplete_records_are_dropped_silently() {
		let mut missing_overview = record("1", 2000);
		missing_overview.overview = String::new();

		let mut missing_popularity = record("2", 2000);
		missing_popularity.popularity = None;

		let (records, report) =
			curate(vec![missing_overview, record("3", 2000), missing_popularity], &curation());

		assert_eq!(report.initial, 3);
		assert_eq!(report.with_required_fields, 1);
		assert_eq!(records.len(), 1);
		assert_eq!(records[0].id.as_deref(), Some("3"));
	}

	#[test]
	fn duplicate_identifiers_keep_the_first_occurrence() {
		let mut first = record("7", 1999);
		first.title = "First".to_string();

		let mut second = record("7", 1999);
		second.title = "Second".to_string();

		let (records, _) = curate(vec![first, second], &curation());

		assert_eq!(records.len(), 1);
		assert_eq!(records[0].title, "First");
	}

	#[test]
	fn records_without_an_identifier_skip_deduplication() {
		let mut one = record("x", 1999);
		one.id = None;

		let mut two = record("y", 1999);
		two.id = None;

		let (records, _) = curate(vec![one, two], &curation());

		assert_eq!(records.len(), 2);
	}

	#[test]
	fn only_released_status_survives() {
		let mut rumored = record("1", 2000);
		rumored.status = "Rumored".to_string();

		let mut lowercase = record("2", 2000);
		lowercase.status = "released".to_string();

		let (records, _) = curate(vec![rumored, lowercase, record("3", 2000)], &curation());

		assert_eq!(records.len(), 1);
		assert_eq!(records[0].id.as_deref(), Some("3"));
	}

	#[test]
	fn year_range_is_inclusive_and_parse_failures_drop() {
		let mut bad_date = record("bad", 2000);
		bad_date.release_date = "soon".to_string();

		let (records, _) = curate(
			vec![
				record("1974", 1974),
				record("1975", 1975),
				record("2025", 2025),
				record("2026", 2026),
				bad_date,
			],
			&curation(),
		);
		let kept: Vec<_> = records.iter().filter_map(|record| record.id.as_deref()).collect();

		assert_eq!(kept, vec!["1975", "2025"]);
	}

	#[test]
	fn sampling_only_engages_beyond_the_target_size() {
		let cfg = Curation { target_size: 5, ..curation() };
		let within: Vec<CatalogRecord> =
			(0..5).map(|index| record(&index.to_string(), 2000 + index)).collect();
		let (records, report) = curate(within, &cfg);

		assert_eq!(records.len(), 5);
		assert_eq!(report.in_year_range, report.selected);

		let over: Vec<CatalogRecord> =
			(0..9).map(|index| record(&index.to_string(), 2000 + index / 3)).collect();
		let (records, report) = curate(over, &cfg);

		assert!(records.len() <= 5);
		assert_eq!(report.selected, records.len());
	}
}

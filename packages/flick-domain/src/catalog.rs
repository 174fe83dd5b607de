use serde::{Deserialize, Serialize};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

pub const RELEASED_STATUS: &str = "Released";

/// Payload limits mirror the index's per-point metadata budget.
pub const MAX_OVERVIEW_CHARS: usize = 1_000;
pub const MAX_COMPANIES_CHARS: usize = 500;
pub const MAX_CREDITS_CHARS: usize = 500;

const RELEASE_DATE_FORMAT: &[BorrowedFormatItem<'_>] =
	format_description!("[year]-[month]-[day]");

/// One movie as it appears in the raw catalog export. Fields arrive as loose
/// strings; curation is the only place that enforces completeness.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CatalogRecord {
	#[serde(default)]
	pub id: Option<String>,
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub overview: String,
	#[serde(default)]
	pub genres: String,
	#[serde(default)]
	pub release_date: String,
	#[serde(default)]
	pub popularity: Option<f64>,
	#[serde(default)]
	pub poster_path: String,
	#[serde(default)]
	pub production_companies: String,
	#[serde(default)]
	pub credits: String,
	#[serde(default)]
	pub status: String,
}
impl CatalogRecord {
	/// True when every field the serving path depends on carries a value.
	pub fn required_fields_present(&self) -> bool {
		!self.genres.trim().is_empty()
			&& !self.overview.trim().is_empty()
			&& !self.production_companies.trim().is_empty()
			&& !self.credits.trim().is_empty()
			&& !self.poster_path.trim().is_empty()
			&& !self.status.trim().is_empty()
			&& !self.release_date.trim().is_empty()
			&& self.popularity.map(|value| value >= 0.).unwrap_or(false)
	}

	pub fn release_year(&self) -> Option<i32> {
		Date::parse(self.release_date.trim(), RELEASE_DATE_FORMAT).ok().map(|date| date.year())
	}

	pub fn popularity_score(&self) -> f64 {
		self.popularity.unwrap_or(0.)
	}
}

/// Truncates on char boundaries so multi-byte titles never split a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
	text.chars().take(max_chars).collect()
}

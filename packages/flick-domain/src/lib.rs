pub mod catalog;
pub mod matching;

pub use catalog::{
	CatalogRecord, MAX_COMPANIES_CHARS, MAX_CREDITS_CHARS, MAX_OVERVIEW_CHARS, RELEASED_STATUS,
	truncate_chars,
};
pub use matching::FilterMode;

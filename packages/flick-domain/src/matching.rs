//! Substring matching against delimited metadata strings.
//!
//! The catalog stores genres and credits as comma-delimited strings, and
//! matching is deliberately a lowercased containment check on the whole
//! string rather than a tokenized comparison. That means "Art" matches
//! "Martial Arts" — a known sharp edge kept for compatibility with existing
//! query behavior. Swapping in exact token matching only needs to touch this
//! module.

/// How optional request filters combine during re-ranking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterMode {
	None,
	Genre,
	GenreAndActorHard,
	GenreAndActorBoost,
}
impl FilterMode {
	pub fn resolve(has_genres: bool, has_actors: bool, actor_boost: bool) -> Self {
		match (has_genres, has_actors) {
			(false, false) => Self::None,
			(true, false) => Self::Genre,
			(_, true) if actor_boost => Self::GenreAndActorBoost,
			(_, true) => Self::GenreAndActorHard,
		}
	}
}

/// True when the delimited field contains any of the wanted values,
/// case-insensitively. An empty wanted list never matches.
pub fn matches_any(field: &str, wanted: &[String]) -> bool {
	wanted.iter().any(|value| contains_ci(field, value))
}

/// Number of distinct wanted values the field contains. Each requested value
/// counts at most once regardless of how often it occurs in the field.
pub fn count_matches(field: &str, wanted: &[String]) -> usize {
	wanted.iter().filter(|value| contains_ci(field, value)).count()
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
	let needle = needle.trim();

	if needle.is_empty() {
		return false;
	}

	haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn wanted(values: &[&str]) -> Vec<String> {
		values.iter().map(|value| value.to_string()).collect()
	}

	#[test]
	fn matching_ignores_case() {
		assert!(matches_any("Action, Thriller", &wanted(&["action"])));
		assert!(matches_any("action, thriller", &wanted(&["ACTION"])));
	}

	#[test]
	fn no_requested_values_never_match() {
		assert!(!matches_any("Action, Thriller", &[]));
		assert!(!matches_any("Action, Thriller", &wanted(&["", "  "])));
	}

	#[test]
	fn unrelated_genres_do_not_match() {
		assert!(!matches_any("Comedy, Drama", &wanted(&["Action"])));
	}

	#[test]
	fn substring_containment_is_not_tokenized() {
		// Existing behavior: a partial word still matches the whole string.
		assert!(matches_any("Martial Arts", &wanted(&["Art"])));
	}

	#[test]
	fn count_matches_is_per_requested_value() {
		let credits = "Jane Doe, John Roe, Jane Doe";

		assert_eq!(count_matches(credits, &wanted(&["Jane Doe", "John Roe"])), 2);
		assert_eq!(count_matches(credits, &wanted(&["Jane Doe"])), 1);
		assert_eq!(count_matches(credits, &wanted(&["Nobody"])), 0);
	}

	#[test]
	fn filter_mode_resolution() {
		assert_eq!(FilterMode::resolve(false, false, true), FilterMode::None);
		assert_eq!(FilterMode::resolve(true, false, true), FilterMode::Genre);
		assert_eq!(FilterMode::resolve(true, true, false), FilterMode::GenreAndActorHard);
		assert_eq!(FilterMode::resolve(false, true, true), FilterMode::GenreAndActorBoost);
	}
}

//! Post-retrieval filtering and score adjustment.
//!
//! Genres are always a hard filter. Cast is either a second hard filter or a
//! soft boost depending on [`FilterMode`]; a boost with zero matching actors
//! still excludes the candidate, so both modes guarantee every surviving
//! result involves at least one requested actor.

use std::cmp::Ordering;

use flick_domain::{FilterMode, matching};

use crate::search::Movie;

pub struct RerankParams<'a> {
	pub genres: &'a [String],
	pub actors: &'a [String],
	pub mode: FilterMode,
	/// Score increment per distinct matching actor in boost mode.
	pub actor_boost: f32,
	/// Seed movie to drop from recommendation results.
	pub exclude_id: Option<&'a str>,
	pub top_k: usize,
}

/// Pure function over the raw candidate list: filter, boost, stable re-sort
/// by descending score, truncate to `top_k`.
pub fn rerank(candidates: Vec<Movie>, params: &RerankParams<'_>) -> Vec<Movie> {
	let mut kept = Vec::with_capacity(candidates.len());

	for mut movie in candidates {
		if params.exclude_id == Some(movie.id.as_str()) {
			continue;
		}
		if !params.genres.is_empty() && !matching::matches_any(&movie.genres, params.genres) {
			continue;
		}

		match params.mode {
			FilterMode::GenreAndActorHard =>
				if !matching::matches_any(&movie.credits, params.actors) {
					continue;
				},
			FilterMode::GenreAndActorBoost => {
				let matched = matching::count_matches(&movie.credits, params.actors);

				if matched == 0 {
					continue;
				}

				movie.score = (movie.score + params.actor_boost * matched as f32).min(1.);
			},
			FilterMode::None | FilterMode::Genre => (),
		}

		kept.push(movie);
	}

	// Stable sort keeps retrieval order for tied scores.
	kept.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
	kept.truncate(params.top_k);

	kept
}

#[cfg(test)]
mod tests {
	use super::*;

	fn movie(id: &str, genres: &str, credits: &str, score: f32) -> Movie {
		Movie {
			id: id.to_string(),
			title: format!("Movie {id}"),
			overview: "A plot.".to_string(),
			genres: genres.to_string(),
			release_date: "2001-01-01".to_string(),
			popularity: 1.,
			poster_path: "/poster.jpg".to_string(),
			production_companies: "Studio".to_string(),
			credits: credits.to_string(),
			score,
		}
	}

	fn strings(values: &[&str]) -> Vec<String> {
		values.iter().map(|value| value.to_string()).collect()
	}

	fn params<'a>(
		genres: &'a [String],
		actors: &'a [String],
		mode: FilterMode,
		top_k: usize,
	) -> RerankParams<'a> {
		RerankParams { genres, actors, mode, actor_boost: 0.15, exclude_id: None, top_k }
	}

	#[test]
	fn genre_filter_is_hard() {
		let genres = strings(&["Action"]);
		let candidates = vec![
			movie("1", "Comedy, Drama", "Someone", 0.9),
			movie("2", "Action, Thriller", "Someone", 0.5),
		];
		let results = rerank(candidates, &params(&genres, &[], FilterMode::Genre, 10));
		let ids: Vec<&str> = results.iter().map(|movie| movie.id.as_str()).collect();

		assert_eq!(ids, vec!["2"]);
	}

	#[test]
	fn boost_adds_per_distinct_actor_and_clamps_at_one() {
		let actors = strings(&["Jane Doe", "John Roe"]);
		let candidates = vec![movie("1", "Drama", "Jane Doe, John Roe, Extra", 0.80)];
		let results =
			rerank(candidates, &params(&[], &actors, FilterMode::GenreAndActorBoost, 10));

		assert_eq!(results.len(), 1);
		assert!((results[0].score - 1.).abs() < f32::EPSILON);
	}

	#[test]
	fn boost_with_zero_matches_excludes() {
		let actors = strings(&["Jane Doe"]);
		let candidates = vec![movie("1", "Drama", "Somebody Else", 0.95)];
		let results =
			rerank(candidates, &params(&[], &actors, FilterMode::GenreAndActorBoost, 10));

		assert!(results.is_empty());
	}

	#[test]
	fn hard_actor_filter_drops_non_matches_without_boosting() {
		let actors = strings(&["Jane Doe"]);
		let candidates = vec![
			movie("1", "Drama", "Jane Doe", 0.4),
			movie("2", "Drama", "Somebody Else", 0.9),
		];
		let results =
			rerank(candidates, &params(&[], &actors, FilterMode::GenreAndActorHard, 10));

		assert_eq!(results.len(), 1);
		assert_eq!(results[0].id, "1");
		assert!((results[0].score - 0.4).abs() < f32::EPSILON);
	}

	#[test]
	fn output_never_exceeds_top_k() {
		let candidates: Vec<Movie> = (0..8)
			.map(|index| movie(&index.to_string(), "Drama", "Someone", 0.5))
			.collect();
		let results = rerank(candidates, &params(&[], &[], FilterMode::None, 3));

		assert_eq!(results.len(), 3);
		// Tied scores keep retrieval order.
		let ids: Vec<&str> = results.iter().map(|movie| movie.id.as_str()).collect();
		assert_eq!(ids, vec!["0", "1", "2"]);
	}

	#[test]
	fn seed_movie_is_excluded_from_recommendations() {
		let candidates = vec![
			movie("seed", "Drama", "Someone", 0.99),
			movie("other", "Drama", "Someone", 0.7),
		];
		let mut params = params(&[], &[], FilterMode::None, 10);
		params.exclude_id = Some("seed");

		let results = rerank(candidates, &params);
		let ids: Vec<&str> = results.iter().map(|movie| movie.id.as_str()).collect();

		assert_eq!(ids, vec!["other"]);
	}

	#[test]
	fn boosted_scores_reorder_candidates() {
		let actors = strings(&["Jane Doe", "John Roe"]);
		let candidates = vec![
			movie("one-match", "Drama", "Jane Doe", 0.70),
			movie("two-matches", "Drama", "Jane Doe, John Roe", 0.60),
		];
		let results =
			rerank(candidates, &params(&[], &actors, FilterMode::GenreAndActorBoost, 10));

		// The double match overtakes the higher base score.
		assert_eq!(results[0].id, "two-matches");
		assert!((results[0].score - 0.90).abs() < 1e-6);
		assert!((results[1].score - 0.85).abs() < 1e-6);
	}

	#[test]
	fn combined_genre_hard_filter_and_actor_boost() {
		let genres = strings(&["Horror"]);
		let actors = strings(&["Jane Doe"]);
		let candidates = vec![
			movie("1", "Horror", "Jane Doe, John Roe", 0.5),
			movie("2", "Comedy", "Jane Doe", 0.9),
		];
		let results = rerank(
			candidates,
			&params(&genres, &actors, FilterMode::GenreAndActorBoost, 10),
		);

		assert_eq!(results.len(), 1);
		assert_eq!(results[0].id, "1");
		assert!((results[0].score - 0.65).abs() < 1e-6);
	}
}

//! Sizes the raw candidate fetch for a query.
//!
//! Post-hoc filtering thins the neighbor list, so filtered requests
//! over-fetch by a fixed multiplier. The multipliers are tuned guesses, not
//! guarantees: a heavily filtered query can still come back with fewer than
//! `top_k` results, and callers treat `top_k` as a ceiling.

/// Hard per-query cap imposed by the index service.
pub const MAX_FETCH_LIMIT: u64 = 100;

const GENRE_OVERFETCH: u64 = 3;
const ACTOR_OVERFETCH: u64 = 5;
const COMBINED_OVERFETCH: u64 = 10;

/// Raw neighbor count to request for a final page of `top_k`. Seeded
/// (recommendation) requests start from `top_k + 1` because the seed movie
/// shows up in its own neighbor list.
pub fn fetch_limit(top_k: u32, has_genres: bool, has_actors: bool, seeded: bool) -> u64 {
	let base = u64::from(top_k) + u64::from(seeded);
	let multiplier = match (has_genres, has_actors) {
		(false, false) => 1,
		(true, false) => GENRE_OVERFETCH,
		(false, true) => ACTOR_OVERFETCH,
		(true, true) => COMBINED_OVERFETCH,
	};

	(base * multiplier).min(MAX_FETCH_LIMIT)
}

//! Recency-weighted sampling of an oversized catalog.
//!
//! The year range is the sampling domain: each year's share of the output
//! budget grows exponentially toward the most recent year, and within a year
//! the most popular records win. Peaked mode carves out a trailing window of
//! years that bypasses sampling entirely.

use std::{cmp::Ordering, collections::BTreeMap};

use flick_domain::CatalogRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SamplingMode {
	/// Sample across the full year range.
	Plain,
	/// Fully retain every year strictly after `peak_year`; sample the rest
	/// with the leftover budget.
	Peaked { peak_year: i32 },
}

/// Shrinks `records` to roughly `target` entries, biased toward recent years.
///
/// Allocations are floored with a minimum of one record per non-empty year,
/// then reconciled largest-first when the floors overshoot the budget. The
/// output is ordered by ascending year, most popular records first within
/// each year. The result can exceed `target` when the per-year minimum or a
/// protected window cannot fit the budget; both conditions are logged rather
/// than treated as errors.
pub fn sample_by_year(
	records: Vec<CatalogRecord>,
	target: usize,
	mode: SamplingMode,
) -> Vec<CatalogRecord> {
	if records.len() <= target {
		return records;
	}

	let mut buckets: BTreeMap<i32, Vec<CatalogRecord>> = BTreeMap::new();

	for record in records {
		// Curation parses dates before sampling; a record without a year has
		// nothing to be bucketed by.
		if let Some(year) = record.release_year() {
			buckets.entry(year).or_default().push(record);
		}
	}

	for bucket in buckets.values_mut() {
		bucket.sort_by(|a, b| {
			b.popularity_score().partial_cmp(&a.popularity_score()).unwrap_or(Ordering::Equal)
		});
	}

	let Some(&min_year) = buckets.keys().next() else {
		return Vec::new();
	};
	let Some(&max_year) = buckets.keys().next_back() else {
		return Vec::new();
	};
	let domain_max = match mode {
		SamplingMode::Plain => max_year,
		SamplingMode::Peaked { peak_year } => peak_year.min(max_year),
	};
	let protected_count: usize = buckets
		.iter()
		.filter(|&(&year, _)| year > domain_max)
		.map(|(_, bucket)| bucket.len())
		.sum();

	if protected_count > target {
		tracing::warn!(
			protected_count,
			target,
			"Protected years alone exceed the sampling budget; keeping every record."
		);

		return buckets.into_values().flatten().collect();
	}

	let budget = target - protected_count;
	let denominator = f64::from(domain_max - min_year);
	let weights: Vec<(i32, f64)> = buckets
		.keys()
		.filter(|&&year| year <= domain_max)
		.map(|&year| {
			let x = if domain_max == min_year {
				1.
			} else {
				f64::from(year - min_year) / denominator
			};

			(year, (3. * x).exp())
		})
		.collect();
	let total_weight: f64 = weights.iter().map(|(_, weight)| weight).sum();
	// First pass: floored shares with a minimum of one per non-empty year.
	let mut allocations: Vec<(i32, usize)> = weights
		.iter()
		.map(|&(year, weight)| {
			let share = ((weight / total_weight) * budget as f64).floor() as usize;

			(year, share.max(1))
		})
		.collect();
	// Second pass: the minimums can overshoot; claw back from the largest
	// allocations first, never dropping a year below one.
	let allocated: usize = allocations.iter().map(|(_, count)| count).sum();

	if allocated > budget {
		let mut surplus = allocated - budget;
		let mut order: Vec<usize> = (0..allocations.len()).collect();

		order.sort_by_key(|&index| std::cmp::Reverse(allocations[index].1));

		for index in order {
			if surplus == 0 {
				break;
			}

			let reduction = (allocations[index].1 - 1).min(surplus);

			allocations[index].1 -= reduction;
			surplus -= reduction;
		}

		if surplus > 0 {
			tracing::warn!(
				surplus,
				budget,
				"Sampling budget cannot absorb the per-year minimums; output will run over."
			);
		}
	}

	let allocation_by_year: BTreeMap<i32, usize> = allocations.into_iter().collect();
	let mut sampled = Vec::new();

	for (year, bucket) in buckets {
		let available = bucket.len();
		let keep = if year > domain_max {
			available
		} else {
			allocation_by_year.get(&year).copied().unwrap_or(0).min(available)
		};

		tracing::debug!(year, available, keep, "Sampled year bucket.");
		sampled.extend(bucket.into_iter().take(keep));
	}

	sampled
}

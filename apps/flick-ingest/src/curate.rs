use std::path::Path;

use flick_config::Config;
use flick_curation::io;

pub fn run(
	config: &Config,
	input: &Path,
	output: &Path,
	target_size: Option<usize>,
) -> color_eyre::Result<()> {
	let mut curation = config.curation.clone();

	if let Some(target_size) = target_size {
		curation.target_size = target_size;
	}

	let records = io::read_catalog(input)?;
	let (records, report) = flick_curation::curate(records, &curation);

	io::write_catalog(output, &records)?;

	tracing::info!(
		input = %input.display(),
		output = %output.display(),
		selected = report.selected,
		"Wrote curated catalog."
	);

	Ok(())
}

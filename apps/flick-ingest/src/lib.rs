pub mod curate;
pub mod embed;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
	version = flick_cli::VERSION,
	rename_all = "kebab",
	styles = flick_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
	#[command(subcommand)]
	pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
	/// Filter and sample a raw catalog export into a serving dataset.
	Curate {
		#[arg(long, short = 'i', value_name = "FILE")]
		input: PathBuf,
		#[arg(long, short = 'o', value_name = "FILE")]
		output: PathBuf,
		#[arg(long, value_name = "N")]
		target_size: Option<usize>,
	},
	/// Embed plot overviews and upsert them into the vector index.
	Embed {
		#[arg(long, short = 'i', value_name = "FILE")]
		input: PathBuf,
	},
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = flick_config::load(&args.config)?;

	init_tracing(&config);

	match args.command {
		Command::Curate { input, output, target_size } =>
			curate::run(&config, &input, &output, target_size),
		Command::Embed { input } => embed::run(&config, &input).await,
	}
}

fn init_tracing(config: &flick_config::Config) {
	let filter =
		EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).init();
}

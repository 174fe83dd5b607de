use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = flick_ingest::Args::parse();
	flick_ingest::run(args).await
}

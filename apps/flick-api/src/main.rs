use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = flick_api::Args::parse();
	flick_api::run(args).await
}

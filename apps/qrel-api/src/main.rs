use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = qrel_api::Args::parse();

	qrel_api::run(args).await
}

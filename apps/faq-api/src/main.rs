use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = faq_api::Args::parse();

	faq_api::run(args).await
}

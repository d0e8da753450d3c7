use clap::Parser;

use faq_eval::Args;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = Args::parse();

	faq_eval::run(args).await
}

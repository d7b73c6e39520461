use anyhow::Context;
use vendas_api::Config;

mod logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	if let Err(error) = dotenvy::dotenv() {
		eprintln!("Failed to load `.env` file: {error}");
	}

	let config = Config::new().context("load configuration")?;
	let _guard = logging::init(&config).context("initialize logging")?;

	tracing::info!(?config, "starting up");

	vendas_api::run(config).await
}

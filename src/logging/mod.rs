//! Log-capturing facilities.

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use vendas_api::Config;

mod stderr;
mod files;

/// Initializes [`tracing-subscriber`].
///
/// NOTE: if file logging is enabled, the returned [`WorkerGuard`] flushes the log files when it
///       is dropped, which means it has to stay alive until the program exits!
pub fn init(config: &Config) -> anyhow::Result<Option<WorkerGuard>> {
	let (files_layer, guard) = match config.log_dir.as_deref() {
		None => (None, None),
		Some(log_dir) => {
			let (layer, guard) = files::layer(log_dir).context("files layer")?;
			(Some(layer), Some(guard))
		}
	};

	let registry = tracing_subscriber::registry()
		.with(stderr::layer())
		.with(files_layer);

	#[cfg(feature = "console")]
	let registry = {
		use tracing_subscriber::{EnvFilter, Layer};
		registry.with(console_subscriber::spawn().with_filter(EnvFilter::new("tokio=trace")))
	};

	registry.init();

	tracing::info! {
		dir = ?config.log_dir,
		"initialized logging",
	};

	Ok(guard)
}

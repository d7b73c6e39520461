use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::filter::FilterFn;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

/// Provides a tracing layer that writes the API's own logs into daily-rotated files in `log_dir`.
pub fn layer<S>(log_dir: &Path) -> anyhow::Result<(impl tracing_subscriber::Layer<S>, WorkerGuard)>
where
	S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
	fs::create_dir_all(log_dir)
		.with_context(|| format!("create log directory `{}`", log_dir.display()))?;

	let appender = tracing_appender::rolling::Builder::new()
		.rotation(Rotation::DAILY)
		.filename_prefix("vendas-api")
		.filename_suffix("log")
		.build(log_dir)
		.context("create log file appender")?;

	let (writer, guard) = tracing_appender::non_blocking(appender);

	let layer = tracing_subscriber::fmt::layer()
		.with_writer(writer)
		.with_ansi(false)
		.with_target(true)
		.with_filter(FilterFn::new(|metadata| {
			*metadata.level() <= Level::INFO
				&& (metadata.target().starts_with("vendas_api")
					|| metadata.target().starts_with("tower_http"))
		}));

	Ok((layer, guard))
}

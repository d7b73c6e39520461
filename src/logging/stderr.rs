use std::io::{self, IsTerminal};

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};

/// Directives used when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "vendas_api=info,tower_http=info,warn";

/// Provides a tracing layer for emitting logs to STDERR.
pub fn layer<S>() -> impl tracing_subscriber::Layer<S>
where
	S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

	tracing_subscriber::fmt::layer()
		.with_writer(io::stderr)
		.with_ansi(io::stderr().is_terminal())
		.with_target(true)
		.with_span_events(FmtSpan::CLOSE)
		.with_filter(filter)
}

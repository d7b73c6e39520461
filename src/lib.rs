#![doc = include_str!("../README.md")]

use std::fmt::Write;
use std::future::Future;
use std::net::SocketAddr;

use anyhow::Context;
use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;

mod error;
pub use error::{Error, ErrorResponse, Result};

pub mod config;
pub use config::Config;

mod state;
pub use state::State;

#[cfg(test)]
mod testing;

#[cfg(test)]
mod tests;

pub mod database;
pub mod openapi;
mod middleware;

pub mod health;
pub mod sales;

/// Run the API.
///
/// This function will not exit until a SIGINT signal is received.
/// If you want to supply a custom signal for graceful shutdown, use [`run_until()`] instead.
pub async fn run(config: Config) -> anyhow::Result<()> {
	let tcp_listener = bind(config.addr).await?;

	serve(tcp_listener, config, sigint()).await
}

/// Run the API until a given future completes.
///
/// This function is the same as [`run()`], except that it also waits for the provided `until`
/// future, and shuts down the server when that future resolves.
pub async fn run_until<Until>(config: Config, until: Until) -> anyhow::Result<()>
where
	Until: Future<Output = ()> + Send + 'static,
{
	let tcp_listener = bind(config.addr).await?;

	serve(tcp_listener, config, async move {
		tokio::select! {
			() = until => {}
			() = sigint() => {}
		}
	})
	.await
}

/// Serves the API on an already bound `tcp_listener` until `until` resolves.
pub async fn serve<Until>(tcp_listener: TcpListener, config: Config, until: Until) -> anyhow::Result<()>
where
	Until: Future<Output = ()> + Send + 'static,
{
	let addr = tcp_listener.local_addr().context("get tcp addr")?;
	tracing::info!(%addr, "listening for requests");

	let state = State::new(&config).context("initialize state")?;
	let cors_origin = HeaderValue::from_str(&config.cors_origin).context("encode cors origin")?;
	let spec = openapi::Spec::new();
	let mut routes_message = String::from("registering routes:\n");

	for (path, methods) in spec.routes() {
		writeln!(&mut routes_message, "    • {path} => [{methods}]")?;
	}

	tracing::info!("{routes_message}");
	tracing::debug!(cors_origin = %config.cors_origin, "initializing API service");

	let api_service = router(state, cors_origin)
		.merge(spec.swagger_ui())
		.into_make_service_with_connect_info::<SocketAddr>();

	axum::serve(tcp_listener, api_service)
		.with_graceful_shutdown(until)
		.await
		.context("run http server")
}

/// Builds the API's [`Router`] with all middleware applied.
///
/// Only requests from `cors_origin` are allowed by CORS.
pub fn router(state: State, cors_origin: HeaderValue) -> Router {
	Router::new()
		.merge(sales::router(state))
		.merge(health::router())
		.layer(middleware::panic_handler::layer())
		.layer(middleware::cors::layer(cors_origin))
		.layer(middleware::logging::layer!())
}

/// Opens a TCP socket on `addr`.
async fn bind(addr: SocketAddr) -> anyhow::Result<TcpListener> {
	tracing::debug!(%addr, "establishing TCP connection");

	TcpListener::bind(addr).await.context("bind tcp socket")
}

/// Waits for a SIGINT signal from the operating system.
#[tracing::instrument(name = "runtime::signals")]
async fn sigint() {
	if let Err(error) = signal::ctrl_c().await {
		tracing::error!(%error, "failed to receive SIGINT");
	} else {
		tracing::warn!("received SIGINT; shutting down...");
	}
}

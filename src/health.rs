//! A liveness probe.
//!
//! This never touches the database, so it stays green even while `/vendas` is failing.

use axum::{routing, Router};

/// Returns an [`axum::Router`] for the `/health` route.
pub fn router() -> Router {
	Router::new().route("/health", routing::get(get))
}

/// Reports that the API process is up.
#[tracing::instrument(level = "trace")]
#[utoipa::path(get, path = "/health", tag = "Health", responses(
  (status = OK, description = "The API is running.", body = str),
))]
pub async fn get() -> &'static str {
	"healthy"
}

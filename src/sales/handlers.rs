//! Handlers for the `/vendas` route.

use axum::extract::State;
use axum::Json;
use sqlx::Connection;

use crate::error::ErrorResponse;
use crate::sales::SalesRecord;
use crate::{Error, Result};

/// Fetch all products ordered by how often they were sold, best-selling first.
///
/// Every call opens its own database connection and closes it before responding.
#[tracing::instrument(level = "debug", skip(state))]
#[utoipa::path(
  get,
  path = "/vendas",
  tag = "Sales",
  responses(
    (status = OK, description = "Sales records, ordered by `vendas` descending.", body = [SalesRecord]),
    (status = INTERNAL_SERVER_ERROR, description = "The database could not be reached or queried.", body = ErrorResponse),
  ),
)]
pub async fn get(State(state): State<crate::State>) -> Result<Json<Vec<SalesRecord>>> {
	let mut conn = state
		.database
		.connect()
		.await
		.map_err(|error| Error::connect(error))?;

	let records = SalesRecord::fetch_all(&mut conn)
		.await
		.map_err(|error| Error::query(error))?;

	if let Err(error) = conn.close().await {
		tracing::warn!(%error, "failed to close database connection");
	}

	tracing::debug!(count = records.len(), "fetched sales records");

	Ok(Json(records))
}

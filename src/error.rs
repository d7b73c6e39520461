//! Runtime errors.
//!
//! This module exposes the [`Error`] type that is returned from HTTP handlers. It implements
//! [`IntoResponse`], and every error the API can produce at runtime becomes a
//! `500 Internal Server Error` whose body carries the underlying error message:
//!
//! ```json
//! { "detail": "error communicating with database: Connection refused (os error 111)" }
//! ```
//!
//! This module also exposes a [`Result`] type alias, which sets [`Error`] as the default `E` type
//! parameter.
//!
//! [`Error`]: struct@Error

use std::fmt::{self, Formatter};
use std::panic::Location;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Type alias for a [`Result<T, E>`] with its `E` parameter set to [`Error`].
///
/// [`Result`]: std::result::Result
/// [`Error`]: struct@Error
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The API's core error type.
///
/// It carries information about the kind of error that occurred and where it occurred.
#[derive(Debug, Error)]
pub struct Error {
	/// The kind of error that occurred.
	kind: ErrorKind,

	/// The source code location of where the error occurred.
	///
	/// This is only included in logs, never in responses.
	location: Location<'static>,
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "[{}] {}", self.location, self.kind)
	}
}

/// The different kinds of errors that can occur at runtime.
///
/// Both display the raw driver message; they only differ in how they are logged.
#[allow(clippy::missing_docs_in_private_items)]
#[derive(Debug, Error)]
enum ErrorKind {
	#[error("{0}")]
	Connect(sqlx::Error),

	#[error("{0}")]
	Query(sqlx::Error),
}

/// Response body for failed requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
	/// What went wrong.
	#[schema(example = "error communicating with database: Connection refused (os error 111)")]
	pub detail: String,
}

impl ErrorResponse {
	/// Creates a new [`ErrorResponse`].
	pub fn new<D>(detail: D) -> Self
	where
		D: Into<String>,
	{
		Self { detail: detail.into() }
	}
}

impl IntoResponse for ErrorResponse {
	fn into_response(self) -> Response {
		(StatusCode::INTERNAL_SERVER_ERROR, Json(self)).into_response()
	}
}

impl Error {
	/// Creates a new [`Error`] of the given [`ErrorKind`].
	///
	/// [`Error`]: struct@Error
	#[track_caller]
	fn new(kind: ErrorKind) -> Self {
		Self { kind, location: *Location::caller() }
	}

	/// An error that occurred while establishing a database connection.
	#[track_caller]
	pub(crate) fn connect(source: sqlx::Error) -> Self {
		Self::new(ErrorKind::Connect(source))
	}

	/// An error that occurred while running a query on an already established connection.
	#[track_caller]
	pub(crate) fn query(source: sqlx::Error) -> Self {
		Self::new(ErrorKind::Query(source))
	}

	/// The HTTP status code this error produces.
	pub const fn status(&self) -> StatusCode {
		StatusCode::INTERNAL_SERVER_ERROR
	}
}

impl IntoResponse for Error {
	fn into_response(self) -> Response {
		let detail = self.kind.to_string();

		match &self.kind {
			ErrorKind::Connect(error) => {
				tracing::error!(location = %self.location, %error, "failed to connect to database");
			}
			ErrorKind::Query(error) => {
				tracing::error!(location = %self.location, %error, "failed to query database");
			}
		}

		(self.status(), Json(ErrorResponse::new(detail))).into_response()
	}
}

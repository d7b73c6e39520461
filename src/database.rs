//! Database connections.
//!
//! The API does not pool connections. Every request opens its own connection through
//! [`Database::connect()`] and closes it again once it is done.

use derive_more::Debug;
use sqlx::postgres::PgConnectOptions;
use sqlx::{ConnectOptions, PgConnection};
use url::Url;

/// Knows how to reach the backing PostgreSQL database.
#[derive(Debug, Clone)]
pub struct Database {
	/// Parsed connection options.
	#[debug(skip)]
	options: PgConnectOptions,
}

impl Database {
	/// Creates a new [`Database`] from a connection URL.
	///
	/// This does not connect to anything yet; it only validates the URL.
	pub fn new(url: &Url) -> sqlx::Result<Self> {
		let options = PgConnectOptions::from_url(url)?;

		Ok(Self { options })
	}

	/// Opens a fresh connection.
	#[tracing::instrument(level = "debug", skip(self), err(Display))]
	pub async fn connect(&self) -> sqlx::Result<PgConnection> {
		self.options.connect().await
	}
}

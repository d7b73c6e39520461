//! The API's main application state.
//!
//! This is initialized once on startup, and then passed around the application by axum.

use crate::database::Database;

/// The main application state.
///
/// Holds nothing mutable; cloning it is cheap.
#[derive(Debug, Clone)]
pub struct State {
	/// The backing database.
	pub database: Database,
}

impl State {
	/// Creates a new [`State`] object.
	pub fn new(config: &crate::Config) -> sqlx::Result<Self> {
		let database = Database::new(&config.database_url)?;

		Ok(Self { database })
	}
}

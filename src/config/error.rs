use std::result::Result as StdResult;

use thiserror::Error as ThisError;

/// Type alias for a [`Result<T, E>`] with its `E` parameter set to [`Error`].
///
/// [`Result<T, E>`]: std::result::Result
pub type Result<T> = StdResult<T, Error>;

/// Any errors that can occurr while constructing the API's [Config].
///
/// [Config]: crate::config::Config
#[derive(Debug, ThisError)]
#[non_exhaustive]
pub enum Error {
	/// A required variable was not set.
	#[error("missing environment variable `{0}`")]
	MissingEnvironmentVariable(&'static str),

	/// A variable was set to an empty string.
	#[error("`{0}` cannot be empty")]
	EmptyValue(&'static str),

	/// A variable's value could not be parsed into the expected type.
	#[error("failed to parse environment variable `{var}`: {source}")]
	Parse {
		/// The variable's name.
		var: &'static str,

		/// The underlying parse error.
		source: Box<dyn std::error::Error + Send + Sync + 'static>,
	},

	/// A CORS origin was not a plain `http` or `https` origin.
	#[error("`{var}` must be an http(s) origin, got `{value}`")]
	InvalidOrigin {
		/// The variable's name.
		var: &'static str,

		/// The rejected value.
		value: String,
	},
}

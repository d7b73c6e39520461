//! This module contains helpers for unit/integration tests.

/// Global constructor that will run before tests.
#[ctor::ctor]
fn ctor() {
	use tracing_subscriber::fmt::format::FmtSpan;
	use tracing_subscriber::EnvFilter;

	color_eyre::install().expect("failed to install color-eyre");
	tracing_subscriber::fmt()
		.compact()
		.with_ansi(true)
		.with_file(true)
		.with_level(true)
		.with_line_number(true)
		.with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
		.with_target(true)
		.with_test_writer()
		.with_env_filter(EnvFilter::from_default_env())
		.init();

	dotenvy::dotenv().ok();
}

/// Wrapper over std's `assert!()` macro that uses [`color_eyre::eyre::ensure!()`] instead.
macro_rules! assert {
	($expr:expr $(, $($msg:tt)*)?) => {
		::color_eyre::eyre::ensure!($expr $(, $($msg)*)?)
	};
}

/// Wrapper over std's `assert_eq!()` macro that uses [`color_eyre::eyre::bail!()`] instead.
macro_rules! assert_eq {
	($lhs:expr, $rhs:expr $(,)?) => {
		match (&$lhs, &$rhs) {
			(lhs, rhs) => {
				if lhs != rhs {
					::color_eyre::eyre::bail!(
						"assertion `left == right` failed\n  left: {:?}\n right: {:?}",
						lhs,
						rhs,
					);
				}
			}
		}
	};
}

pub(crate) use {assert, assert_eq};

//! Prints the API's OpenAPI specification as JSON to stdout.

use anyhow::Context;
use vendas_api::openapi::Spec;

fn main() -> anyhow::Result<()> {
	let json = Spec::new().as_json().context("serialize OpenAPI spec")?;

	println!("{json}");

	Ok(())
}

//! Types for representing sales figures.

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgConnection, Row};
use utoipa::ToSchema;

/// The one query this API runs.
///
/// The sales column is widened to `BIGINT` so it decodes the same whether the table stores it as
/// `INTEGER` or `BIGINT`.
const FETCH_ALL: &str = r#"
	SELECT
	  produto,
	  vendas::BIGINT AS vendas
	FROM
	  vendas_produto
	ORDER BY
	  vendas DESC
"#;

/// A product and how many times it has been sold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SalesRecord {
	/// The product's name.
	#[serde(rename = "produto")]
	#[schema(example = "Notebook")]
	pub product: String,

	/// How many units were sold.
	#[serde(rename = "vendas")]
	#[schema(example = 42)]
	pub sales_count: i64,
}

impl FromRow<'_, PgRow> for SalesRecord {
	fn from_row(row: &PgRow) -> sqlx::Result<Self> {
		Ok(Self {
			product: row.try_get("produto")?,
			sales_count: row.try_get("vendas")?,
		})
	}
}

impl SalesRecord {
	/// Fetches every record, best-selling product first.
	#[tracing::instrument(level = "debug", skip(conn), err(Display))]
	pub async fn fetch_all(conn: &mut PgConnection) -> sqlx::Result<Vec<Self>> {
		sqlx::query_as::<_, Self>(FETCH_ALL).fetch_all(conn).await
	}
}

//! Sales figures per product.
//!
//! The data lives in the `vendas_produto` table, which is owned by some other system. The API only
//! ever reads from it.

use axum::{routing, Router};

mod models;
pub use models::SalesRecord;

pub mod handlers;

/// Returns an [`axum::Router`] for the `/vendas` routes.
pub fn router(state: crate::State) -> Router {
	Router::new()
		.route("/vendas", routing::get(handlers::get))
		.with_state(state)
}

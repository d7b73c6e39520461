//! CORS middleware.

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Creates a CORS layer that only lets the given `origin` make cross-origin requests.
///
/// Responses only carry `Access-Control-Allow-Origin` when the request came from that origin;
/// any other origin gets no CORS headers at all.
///
/// Credentials are allowed, which rules out `*` for methods and headers. Instead, whatever the
/// preflight request asks for is mirrored back.
pub fn layer(origin: HeaderValue) -> CorsLayer {
	CorsLayer::new()
		.allow_origin(AllowOrigin::list([origin]))
		.allow_credentials(true)
		.allow_methods(AllowMethods::mirror_request())
		.allow_headers(AllowHeaders::mirror_request())
}

use super::{handlers, state::AppState};
use axum::{
    http::{header, HeaderValue, Method},
    middleware::map_response,
    response::Response,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

const ALLOWED_METHODS: &str = "POST, OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type";

/// Creates the Axum router with all the application routes.
pub fn create_router(app_state: AppState) -> Router {
    // Every OPTIONS request is answered here as a preflight.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route(
            "/api/generate-banner",
            post(handlers::generate_banner_handler).fallback(handlers::method_not_allowed),
        )
        .with_state(app_state)
        .layer(map_response(advertise_cors_policy))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Non-preflight responses also carry the allowed methods and headers.
async fn advertise_cors_policy(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers
        .entry(header::ACCESS_CONTROL_ALLOW_METHODS)
        .or_insert(HeaderValue::from_static(ALLOWED_METHODS));
    headers
        .entry(header::ACCESS_CONTROL_ALLOW_HEADERS)
        .or_insert(HeaderValue::from_static(ALLOWED_HEADERS));
    response
}

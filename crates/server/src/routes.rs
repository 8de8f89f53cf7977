use crate::handlers::{fallback, save_config, SAVE_CONFIG_PATH};
use crate::AppState;
use axum::http::{header, HeaderValue};
use axum::routing::post;
use axum::Router;
use mediadock_store::ConfigStore;
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;

/// Build the application router
///
/// The CORS headers are set on every response, including errors and static
/// files, not only on preflight requests.
pub fn create_router<S: ConfigStore>(state: AppState<S>) -> Router {
    let cors = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ));

    Router::new()
        .route(
            SAVE_CONFIG_PATH,
            post(save_config::<S>).fallback(fallback::<S>),
        )
        .fallback(fallback::<S>)
        .layer(cors)
        .with_state(state)
}

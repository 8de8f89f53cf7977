use crate::error::ApiError;
use crate::AppState;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use mediadock_store::ConfigStore;
use tower::ServiceExt;
use tower_http::services::ServeDir;
use tracing::error;

/// Path of the configuration save endpoint
pub const SAVE_CONFIG_PATH: &str = "/save-config";

const SUCCESS_BODY: &str = r#"{"status": "success"}"#;

/// `POST /save-config`: persist the request body as the configuration document
///
/// The target must match exactly, so a query string makes it a 404.
pub async fn save_config<S: ConfigStore>(
    State(state): State<AppState<S>>,
    uri: Uri,
    headers: HeaderMap,
    body: Body,
) -> Result<Response, ApiError> {
    if uri.query().is_some() {
        return Err(ApiError::RouteNotFound);
    }

    match read_and_save(&state, &headers, body).await {
        Ok(()) => Ok((
            [(header::CONTENT_TYPE, "application/json")],
            SUCCESS_BODY,
        )
            .into_response()),
        Err(e) => {
            error!("Failed to save configuration: {}", e);
            Err(e)
        }
    }
}

async fn read_and_save<S: ConfigStore>(
    state: &AppState<S>,
    headers: &HeaderMap,
    body: Body,
) -> Result<(), ApiError> {
    let length = content_length(headers)?;
    let bytes = axum::body::to_bytes(body, length)
        .await
        .map_err(|e| ApiError::Body(e.to_string()))?;

    state.config.save(&bytes).await?;
    Ok(())
}

/// Body length announced by the client; chunked uploads are rejected
fn content_length(headers: &HeaderMap) -> Result<usize, ApiError> {
    let value = headers
        .get(header::CONTENT_LENGTH)
        .ok_or(ApiError::MissingContentLength)?;

    value
        .to_str()
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .ok_or_else(|| {
            ApiError::InvalidContentLength(String::from_utf8_lossy(value.as_bytes()).into_owned())
        })
}

/// Everything that is not a save request
///
/// OPTIONS is acknowledged on any path, GET and HEAD go to the static file
/// tree, POST elsewhere is a 404 and remaining verbs are not implemented.
pub async fn fallback<S: ConfigStore>(
    State(state): State<AppState<S>>,
    request: Request,
) -> Response {
    let method = request.method().clone();
    match method {
        Method::OPTIONS => StatusCode::OK.into_response(),
        Method::GET | Method::HEAD => serve_static(state.static_files, request).await,
        Method::POST => ApiError::RouteNotFound.into_response(),
        _ => ApiError::MethodNotImplemented.into_response(),
    }
}

async fn serve_static(files: ServeDir, request: Request) -> Response {
    match files.oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}

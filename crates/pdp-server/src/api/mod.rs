mod products;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use pdp_core::StoreContext;
use pdp_storefront::StorefrontClient;

use crate::middleware::{request_id, RequestId, REQUEST_ID_HEADER};

/// Shared per-process state: one pooled storefront client and the store
/// context every page is loaded under.
#[derive(Clone)]
pub struct AppState {
    pub storefront: Arc<StorefrontClient>,
    pub context: StoreContext,
}

/// Success envelope: `{ "data": ..., "meta": {...} }`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

impl<T: Serialize> ApiResponse<T> {
    pub(crate) fn wrap(data: T, request_id: RequestId) -> Json<Self> {
        Json(Self {
            data,
            meta: ResponseMeta::stamped(request_id),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

impl ResponseMeta {
    fn stamped(RequestId(request_id): RequestId) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

/// Error envelope: `{ "error": { "code", "message" }, "meta": {...} }`.
#[derive(Debug, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    status: StatusCode,
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

impl ApiError {
    fn new(
        status: StatusCode,
        code: &'static str,
        request_id: RequestId,
        message: impl Into<String>,
    ) -> Self {
        Self {
            status,
            error: ErrorBody {
                code,
                message: message.into(),
            },
            meta: ResponseMeta::stamped(request_id),
        }
    }

    /// 502: the storefront could not be reached or answered with an error.
    pub(crate) fn upstream(request_id: RequestId, message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::BAD_GATEWAY,
            "upstream_error",
            request_id,
            message,
        )
    }

    pub(crate) fn internal(request_id: RequestId, message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            request_id,
            message,
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
struct HealthData {
    status: &'static str,
    store_domain: String,
}

/// The page payload is public catalog data; any origin may read it.
fn read_only_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::HEAD])
        .allow_headers([header::ACCEPT, REQUEST_ID_HEADER])
        .expose_headers([REQUEST_ID_HEADER])
}

/// Builds the router: `/health` and `/products/{handle}`, wrapped in
/// tracing, CORS, compression and request-id layers (outermost first).
pub fn build_app(state: AppState) -> Router {
    let layers = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(read_only_cors())
        .layer(CompressionLayer::new())
        .layer(axum::middleware::from_fn(request_id));

    Router::new()
        .route("/health", get(health))
        .route("/products/{handle}", get(products::get_product_page))
        .layer(layers)
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> Json<ApiResponse<HealthData>> {
    let data = HealthData {
        status: "ok",
        store_domain: state.context.store_domain.clone(),
    };
    ApiResponse::wrap(data, request_id)
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;

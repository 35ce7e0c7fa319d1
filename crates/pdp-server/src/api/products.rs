use axum::{
    extract::{Path, RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};

use pdp_core::parse_query_pairs;
use pdp_storefront::{load_product_page, PageError, ProductPage};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState};

/// `GET /products/{handle}`: the product page payload, with the variant
/// chosen from the query string (`?Color=Blue&Size=M`).
pub(super) async fn get_product_page(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(handle): Path<String>,
    RawQuery(query): RawQuery,
) -> Result<Json<ApiResponse<ProductPage>>, Response> {
    let pairs = query.as_deref().map(parse_query_pairs).unwrap_or_default();

    match load_product_page(&state.storefront, &state.context, &handle, pairs).await {
        Ok(page) => Ok(ApiResponse::wrap(page, request_id)),
        Err(e) => Err(page_error_response(request_id, &handle, &e)),
    }
}

/// Not-found is a bare 404 with no body. Anything else is logged and
/// returned as an error envelope.
fn page_error_response(request_id: RequestId, handle: &str, error: &PageError) -> Response {
    match error {
        PageError::ProductNotFound { .. } => StatusCode::NOT_FOUND.into_response(),
        PageError::Storefront(e) => {
            tracing::error!(handle, request_id = %request_id.0, error = %e, "storefront request failed");
            ApiError::upstream(request_id, "storefront request failed").into_response()
        }
        PageError::Core(e) => {
            tracing::error!(handle, request_id = %request_id.0, error = %e, "product page assembly failed");
            ApiError::internal(request_id, "product page assembly failed").into_response()
        }
    }
}

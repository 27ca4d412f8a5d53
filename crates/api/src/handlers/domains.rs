use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::Json,
    routing::get,
    Router,
};
use tracing::debug;

use crate::{
    dto::{ApiResponse, DomainInfoResponse},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/domains/{name}", get(get_domain_info))
}

async fn get_domain_info(
    State(state): State<AppState>,
    name: Result<Path<String>, PathRejection>,
) -> Result<Json<ApiResponse<DomainInfoResponse>>, ApiError> {
    let Path(name) = name?;
    let view = state.get_domain_info.execute(&name).await?;
    debug!(domain = %view.name, "Domain information retrieved");
    Ok(Json(ApiResponse::success(view.into())))
}

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tracing::instrument;

use crate::{
    manifest::{osm_search_descriptor, ToolDescriptor},
    net::response::Result,
    params::ToolParameters,
    tool::OsmSearchTool,
    types::message::ToolInvokeMessage,
};

#[derive(Deserialize, Debug)]
pub struct InvokeRequest {
    pub tool_parameters: ToolParameters,
}

pub fn router(tool: OsmSearchTool) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/tools/osm_search", get(descriptor))
        .route("/tools/osm_search/invoke", post(invoke))
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(tool))
}

async fn health() -> &'static str {
    "ok"
}

async fn descriptor() -> Json<ToolDescriptor> {
    Json(osm_search_descriptor())
}

#[instrument(skip_all)]
async fn invoke(
    State(tool): State<Arc<OsmSearchTool>>,
    payload: std::result::Result<Json<InvokeRequest>, JsonRejection>,
) -> Result<Json<Vec<ToolInvokeMessage>>> {
    let Json(request) = payload?;
    Ok(Json(tool.invoke(&request.tool_parameters).await))
}

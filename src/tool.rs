//! The `osm_search` tool: validate parameters, query Overpass, normalize the
//! elements and emit the structured payload followed by a text summary.

use tracing::{error, info, instrument};

use crate::{
    clients::OverpassClient,
    error::Result,
    normalize::normalize,
    params::ToolParameters,
    query::build_query,
    types::{
        message::ToolInvokeMessage,
        search::{SearchRequest, SearchResponse},
    },
};

pub const TOOL_NAME: &str = "osm_search";

#[derive(Debug, Clone)]
pub struct OsmSearchTool {
    client: OverpassClient,
}

impl OsmSearchTool {
    pub fn new(client: OverpassClient) -> Self {
        Self { client }
    }

    /// Always yields either the payload and a summary, or a single error text.
    #[instrument(skip_all)]
    pub async fn invoke(&self, params: &ToolParameters) -> Vec<ToolInvokeMessage> {
        match self.search(params).await {
            Ok(response) => {
                let summary = response.summary();
                vec![
                    ToolInvokeMessage::Json(response),
                    ToolInvokeMessage::Text(summary),
                ]
            }
            Err(err) => {
                error!("{err}");
                vec![ToolInvokeMessage::text(format!("Error: {err}"))]
            }
        }
    }

    async fn search(&self, params: &ToolParameters) -> Result<SearchResponse> {
        let request = SearchRequest::try_from(params)?;
        info!(
            lat = request.latitude(),
            lon = request.longitude(),
            radius_km = request.radius_km,
            category = %request.category,
            "osm search"
        );
        let overpass = self.client.fetch(&build_query(&request)).await?;
        let response = normalize(overpass);
        info!(count = response.count, "osm search complete");
        Ok(response)
    }
}

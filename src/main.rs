use osm_search::{
    clients::{build_reqwest_client, OverpassClient},
    config::Config,
    server::router,
    tool::OsmSearchTool,
};
use tracing::info;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    // initialize tracing
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let tool = init_tool(&config)?;

    let app = router(tool);

    info!(
        "Running on {}, querying {}",
        config.bind_addr, config.overpass_url
    );

    axum::Server::bind(&config.bind_addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}

fn init_tool(config: &Config) -> color_eyre::Result<OsmSearchTool> {
    let client = OverpassClient::new(build_reqwest_client()?, config.overpass_url.clone());
    Ok(OsmSearchTool::new(client))
}

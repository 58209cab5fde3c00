#![allow(dead_code)]

use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::post,
    Form, Router,
};
use osm_search::{
    clients::{build_reqwest_client, OverpassClient},
    tool::OsmSearchTool,
};
use serde_json::{json, Value};

pub struct FakeOverpass {
    status: StatusCode,
    body: String,
    hits: AtomicUsize,
    queries: Mutex<Vec<String>>,
}

impl FakeOverpass {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn last_query(&self) -> Option<String> {
        self.queries.lock().unwrap().last().cloned()
    }
}

async fn interpreter(
    State(fake): State<Arc<FakeOverpass>>,
    Form(form): Form<HashMap<String, String>>,
) -> impl IntoResponse {
    fake.hits.fetch_add(1, Ordering::SeqCst);
    if let Some(query) = form.get("data") {
        fake.queries.lock().unwrap().push(query.clone());
    }
    (
        fake.status,
        [(header::CONTENT_TYPE, "application/json")],
        fake.body.clone(),
    )
}

pub async fn serve(app: Router) -> SocketAddr {
    let server = axum::Server::bind(&SocketAddr::from(([127, 0, 0, 1], 0)))
        .serve(app.into_make_service());
    let addr = server.local_addr();
    tokio::spawn(server);
    addr
}

/// Start a stand-in Overpass interpreter answering every query the same way
pub async fn fake_overpass(status: StatusCode, body: impl Into<String>) -> (Arc<FakeOverpass>, String) {
    let fake = Arc::new(FakeOverpass {
        status,
        body: body.into(),
        hits: AtomicUsize::new(0),
        queries: Mutex::new(Vec::new()),
    });
    let app = Router::new()
        .route("/api/interpreter", post(interpreter))
        .with_state(fake.clone());
    let addr = serve(app).await;
    (fake, format!("http://{addr}/api/interpreter"))
}

pub fn tool_for(url: &str) -> OsmSearchTool {
    OsmSearchTool::new(OverpassClient::new(build_reqwest_client().unwrap(), url))
}

pub fn params(value: Value) -> serde_json::Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("parameters must be an object"),
    }
}

pub fn supermarket_response() -> String {
    json!({
        "version": 0.6,
        "elements": [
            {
                "type": "node",
                "id": 1,
                "lat": 52.52,
                "lon": 13.405,
                "tags": {
                    "name": "Test Supermarket",
                    "shop": "supermarket",
                    "addr:street": "Main St",
                    "addr:housenumber": "1"
                }
            }
        ]
    })
    .to_string()
}

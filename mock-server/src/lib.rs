use std::{sync::Arc, time::Duration};

use axum::{
    extract::{Path, State},
    http::{header, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{any, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

/// One request the server received.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hit {
    pub method: String,
    pub path: String,
}

/// Every request received so far, in arrival order.
pub type Hits = Arc<RwLock<Vec<Hit>>>;

pub fn app() -> Router {
    app_with_hits(Hits::default())
}

/// Build the router around a caller-owned hit log so tests can inspect it
/// while the server runs.
pub fn app_with_hits(hits: Hits) -> Router {
    Router::new()
        .route("/", any(ok))
        .route("/status/{code}", any(status))
        .route("/redirect", any(redirect))
        .route("/delay/{ms}", any(delay))
        .route("/hits", get(list_hits))
        .with_state(hits)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with_hits(listener: TcpListener, hits: Hits) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_hits(hits)).await
}

async fn record(hits: &Hits, method: Method, uri: Uri) {
    hits.write().await.push(Hit {
        method: method.to_string(),
        path: uri.path().to_string(),
    });
}

async fn ok(State(hits): State<Hits>, method: Method, uri: Uri) -> StatusCode {
    record(&hits, method, uri).await;
    StatusCode::OK
}

async fn status(
    State(hits): State<Hits>,
    Path(code): Path<u16>,
    method: Method,
    uri: Uri,
) -> Result<StatusCode, StatusCode> {
    record(&hits, method, uri).await;
    StatusCode::from_u16(code).map_err(|_| StatusCode::BAD_REQUEST)
}

async fn redirect(State(hits): State<Hits>, method: Method, uri: Uri) -> Response {
    record(&hits, method, uri).await;
    (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response()
}

async fn delay(
    State(hits): State<Hits>,
    Path(ms): Path<u64>,
    method: Method,
    uri: Uri,
) -> StatusCode {
    record(&hits, method, uri).await;
    tokio::time::sleep(Duration::from_millis(ms)).await;
    StatusCode::OK
}

async fn list_hits(State(hits): State<Hits>) -> Json<Vec<Hit>> {
    Json(hits.read().await.clone())
}

//! Throwaway prime service for dispatcher tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::get;

/// Limits requested from a [`spawn_service`] instance, in arrival order.
pub type Hits = Arc<Mutex<Vec<u64>>>;

/// Serve `GET /primes/{n}` on an ephemeral port, answering every request with
/// `status` and `body` after `delay`. Returns the base URL and the hit log.
pub async fn spawn_service(status: StatusCode, body: &'static str, delay: Duration) -> (String, Hits) {
    let hits: Hits = Arc::new(Mutex::new(Vec::new()));
    let log = hits.clone();
    let app = Router::new().route(
        "/primes/{n}",
        get(move |Path(n): Path<u64>| {
            let log = log.clone();
            async move {
                log.lock().unwrap().push(n);
                tokio::time::sleep(delay).await;
                (status, body)
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), hits)
}

/// Base URL of a port that nothing listens on.
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn hits_of(hits: &Hits) -> Vec<u64> {
    hits.lock().unwrap().clone()
}

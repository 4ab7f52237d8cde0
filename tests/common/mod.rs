//! Shared helpers for the HTTP integration tests.

#![allow(dead_code)]

use axum::Router;
use record_service::domain::Record;

/// Serves `router` on an ephemeral port and returns its base URL.
pub async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://127.0.0.1:{}", port)
}

pub fn record(id: &str, name: &str, age: i64) -> Record {
    Record {
        id: id.to_string(),
        name: name.to_string(),
        age,
    }
}

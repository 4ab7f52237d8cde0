// src/performance_test.rs
// Load generator: fires concurrent creates at an in-process server and checks every id is distinct.
use rand::Rng;
use serde_json::json;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use record_service::infra::{config, logging};
use record_service::{transport, DatabaseService, ServiceConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let num_items: usize = std::env::args()
        .nth(1)
        .and_then(|v| v.parse().ok())
        .unwrap_or(1_000);
    let concurrency: usize = 32;

    let service_config = ServiceConfig::from_env()?;
    logging::init_tracing(&config::log_filter());
    println!(
        "--- Create Performance Test: {} records, {} in flight, DATABASE_URL={} ---",
        num_items, concurrency, service_config.database_url
    );

    let db = DatabaseService::new(&service_config).await?;
    let app_state = transport::http::AppState::new(Arc::new(db.record_store()));
    let router = transport::http::create_router(app_state);

    // Bind to an ephemeral port to avoid conflicts if an API server is already running.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();
    let server_handle = tokio::spawn(async move { axum::serve(listener, router).await });
    let url = format!("http://127.0.0.1:{}/records/", port);
    let client = reqwest::Client::new();

    let start_time = Instant::now();
    let semaphore = Arc::new(tokio::sync::Semaphore::new(concurrency));
    let mut tasks = Vec::with_capacity(num_items);
    for i in 0..num_items {
        let permit = semaphore.clone().acquire_owned().await?;
        let client = client.clone();
        let url = url.clone();
        let age: i64 = rand::thread_rng().gen_range(0..120);
        tasks.push(tokio::spawn(async move {
            let _permit = permit;
            let resp = client
                .post(&url)
                .json(&json!({ "name": format!("load_{}", i), "age": age }))
                .send()
                .await?
                .error_for_status()?
                .json::<serde_json::Value>()
                .await?;
            let id = resp["id"]
                .as_str()
                .ok_or_else(|| anyhow::anyhow!("create response without id: {}", resp))?
                .to_string();
            Ok::<String, anyhow::Error>(id)
        }));
    }

    let mut ids = HashSet::with_capacity(num_items);
    for task in tasks {
        ids.insert(task.await??);
    }
    let duration = start_time.elapsed();

    server_handle.abort();
    db.close().await;

    println!("\n--- Results ---");
    println!("Distinct ids: {} / {}", ids.len(), num_items);
    println!("Total time: {} ms", duration.as_millis());
    println!(
        "Average time per create: {:.2} µs",
        duration.as_micros() as f64 / num_items as f64
    );
    if ids.len() != num_items {
        return Err(anyhow::anyhow!("duplicate ids returned under concurrency"));
    }
    Ok(())
}

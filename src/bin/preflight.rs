use record_service::infra::{config, logging};
use record_service::{DatabaseService, RecordStore, ServiceConfig};

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight -- [--create-schema-if-missing]\n\
         \n\
         Reads env vars (all optional):\n\
           DATABASE_URL, BIND_ADDR, DB_MAX_CONNECTIONS, RUST_LOG\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }
    let create_if_missing = args.iter().any(|a| a == "--create-schema-if-missing");

    // Force-read config (nice error messages if invalid)
    let service_config = ServiceConfig::from_env()?;
    logging::init_tracing(&config::log_filter());

    println!("> Preflight:");
    println!("  DATABASE_URL={}", service_config.database_url);
    println!("  BIND_ADDR={}", service_config.bind_addr);
    println!("  DB_MAX_CONNECTIONS={}", service_config.max_connections);

    let db =
        DatabaseService::connect(&service_config.database_url, service_config.max_connections)
            .await?;
    db.record_store()
        .ping()
        .await
        .map_err(|e| anyhow::anyhow!("Database is not reachable: {}", e))?;
    println!("  Database reachable.");

    if db.schema_present().await? {
        println!("  records table exists.");
    } else if create_if_missing {
        println!("  records table missing -> creating...");
        db.ensure_schema().await?;
        if !db.schema_present().await? {
            return Err(anyhow::anyhow!("records table still missing after setup"));
        }
        println!("  records table created.");
    } else {
        db.close().await;
        return Err(anyhow::anyhow!(
            "records table does not exist. Re-run with --create-schema-if-missing"
        ));
    }

    println!("  Stored records: {}", db.record_count().await?);

    // The listen address must be free for the server to start.
    let listener = tokio::net::TcpListener::bind(service_config.bind_addr)
        .await
        .map_err(|e| anyhow::anyhow!("Cannot bind {}: {}", service_config.bind_addr, e))?;
    drop(listener);
    println!("  Listen address is available.");

    db.close().await;
    println!("> Preflight OK.");
    Ok(())
}

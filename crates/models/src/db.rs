use mongodb::bson::doc;
use mongodb::{Client, Database};
use once_cell::sync::Lazy;
use std::env;

pub static MONGODB_URL: Lazy<String> = Lazy::new(|| {
    // Load .env if present
    let _ = dotenvy::dotenv();
    env::var("MONGODB_URL").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
});

pub static DATABASE_NAME: Lazy<String> = Lazy::new(|| {
    let _ = dotenvy::dotenv();
    env::var("DATABASE_NAME").unwrap_or_else(|_| "eldercare_db".to_string())
});

/// Handle to the configured database. The client connects lazily; no I/O
/// happens until the first operation.
pub async fn connect() -> anyhow::Result<Database> {
    connect_to(MONGODB_URL.as_str(), DATABASE_NAME.as_str()).await
}

pub async fn connect_to(url: &str, name: &str) -> anyhow::Result<Database> {
    let client = Client::with_uri_str(url).await?;
    Ok(client.database(name))
}

/// Round-trip to the deployment; fails if the server is unreachable.
pub async fn ping(db: &Database) -> anyhow::Result<()> {
    db.run_command(doc! { "ping": 1 }, None).await?;
    Ok(())
}

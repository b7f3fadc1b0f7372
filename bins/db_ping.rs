//! Connectivity smoke check: ping the configured MongoDB deployment and
//! list the collections the api will use.

use dotenvy::dotenv;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    common::utils::logging::init_logging_default();

    // Connection string may carry credentials; log only the database name.
    info!(database = %models::db::DATABASE_NAME.as_str(), "testing connection");

    let db = models::db::connect().await?;
    models::db::ping(&db).await?;
    info!("ping ok");

    let collections = db.list_collection_names(None).await?;
    info!(?collections, "database access ok");
    Ok(())
}

use neo4rs::query;
use tracing::{info, warn};

use crate::GraphClient;

/// Create the uniqueness constraints backing the MERGE keys.
/// Idempotent: re-running against an existing schema is a no-op.
pub async fn migrate(client: &GraphClient) -> Result<(), neo4rs::Error> {
    let g = &client.graph;

    info!("Running schema migrations...");

    let constraints = [
        "CREATE CONSTRAINT indicator_value IF NOT EXISTS FOR (i:Indicator) REQUIRE i.value IS UNIQUE",
        "CREATE CONSTRAINT report_name IF NOT EXISTS FOR (r:Report) REQUIRE r.name IS UNIQUE",
    ];

    for c in &constraints {
        run_ignoring_exists(g, c).await?;
    }
    info!("Uniqueness constraints created");

    Ok(())
}

/// Run a schema statement, swallowing "already exists" errors from servers
/// that reject an equivalent constraint under a different name.
async fn run_ignoring_exists(g: &neo4rs::Graph, cypher: &str) -> Result<(), neo4rs::Error> {
    match g.run(query(cypher)).await {
        Ok(_) => Ok(()),
        Err(e) => {
            let msg = e.to_string().to_lowercase();
            if msg.contains("already exists") || msg.contains("equivalent") {
                warn!("Already exists (skipped): {}", cypher.chars().take(80).collect::<String>());
                Ok(())
            } else {
                Err(e)
            }
        }
    }
}

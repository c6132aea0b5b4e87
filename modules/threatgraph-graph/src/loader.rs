use neo4rs::{query, Query};
use tracing::info;

use threatgraph_common::Mention;

use crate::GraphClient;

/// Indicator and Report are merged on their keys; `type` is only written
/// when the Indicator node is created, so the first-seen type sticks.
const UPSERT_MENTION: &str = "MERGE (i:Indicator {value: $value})
  ON CREATE SET i.type = $type
MERGE (r:Report {name: $report})
MERGE (i)-[:MENTIONED_IN]->(r)";

/// Write-side wrapper for the graph.
pub struct GraphLoader {
    client: GraphClient,
}

impl GraphLoader {
    pub fn new(client: GraphClient) -> Self {
        Self { client }
    }

    /// Upsert one mention in its own write transaction.
    pub async fn upsert_mention(&self, mention: &Mention) -> Result<(), neo4rs::Error> {
        let mut txn = self.client.graph.start_txn().await?;
        txn.run(mention_query(mention)).await?;
        txn.commit().await?;

        info!(value = mention.value.as_str(), kind = mention.kind.as_str(), "Added indicator");
        Ok(())
    }

    /// Upsert a group of mentions in a single write transaction.
    ///
    /// Same graph result as calling [`upsert_mention`](Self::upsert_mention)
    /// for each, but a failure rolls back the whole group.
    pub async fn upsert_batch(&self, mentions: &[Mention]) -> Result<(), neo4rs::Error> {
        if mentions.is_empty() {
            return Ok(());
        }

        let mut txn = self.client.graph.start_txn().await?;
        txn.run_queries(mentions.iter().map(mention_query)).await?;
        txn.commit().await?;

        for m in mentions {
            info!(value = m.value.as_str(), kind = m.kind.as_str(), "Added indicator");
        }
        Ok(())
    }
}

fn mention_query(mention: &Mention) -> Query {
    query(UPSERT_MENTION)
        .param("value", mention.value.as_str())
        .param("type", mention.kind.as_str())
        .param("report", mention.report.as_str())
}

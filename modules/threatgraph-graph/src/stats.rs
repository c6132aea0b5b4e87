use neo4rs::query;

use crate::GraphClient;

/// Node and edge counts for the ingested subgraph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphStats {
    pub indicators: u64,
    pub reports: u64,
    pub mentions: u64,
}

impl GraphStats {
    pub async fn collect(client: &GraphClient) -> Result<Self, neo4rs::Error> {
        Ok(Self {
            indicators: count(client, "MATCH (n:Indicator) RETURN count(n) AS n").await?,
            reports: count(client, "MATCH (n:Report) RETURN count(n) AS n").await?,
            mentions: count(
                client,
                "MATCH (:Indicator)-[e:MENTIONED_IN]->(:Report) RETURN count(e) AS n",
            )
            .await?,
        })
    }
}

/// Stored `type` of an Indicator node, if the node exists.
pub async fn indicator_type(
    client: &GraphClient,
    value: &str,
) -> Result<Option<String>, neo4rs::Error> {
    let q = query("MATCH (i:Indicator {value: $value}) RETURN i.type AS type").param("value", value);
    let mut stream = client.graph.execute(q).await?;
    match stream.next().await? {
        Some(row) => Ok(row.get::<String>("type").ok()),
        None => Ok(None),
    }
}

/// Report names an indicator is linked to, sorted.
pub async fn reports_for(client: &GraphClient, value: &str) -> Result<Vec<String>, neo4rs::Error> {
    let q = query(
        "MATCH (:Indicator {value: $value})-[:MENTIONED_IN]->(r:Report)
         RETURN r.name AS name ORDER BY name",
    )
    .param("value", value);
    let mut stream = client.graph.execute(q).await?;
    let mut names = Vec::new();
    while let Some(row) = stream.next().await? {
        if let Ok(name) = row.get::<String>("name") {
            names.push(name);
        }
    }
    Ok(names)
}

async fn count(client: &GraphClient, cypher: &str) -> Result<u64, neo4rs::Error> {
    let mut stream = client.graph.execute(query(cypher)).await?;
    match stream.next().await? {
        Some(row) => Ok(row.get::<i64>("n").unwrap_or(0) as u64),
        None => Ok(0),
    }
}

use neo4rs::{ConfigBuilder, Graph};

#[derive(Clone)]
pub struct GraphClient {
    pub(crate) graph: Graph,
}

impl GraphClient {
    /// Ingestion is strictly sequential, so the pool holds a single
    /// connection: one session for the whole run.
    pub async fn connect(uri: &str, user: &str, password: &str) -> Result<Self, neo4rs::Error> {
        let config = ConfigBuilder::default()
            .uri(uri)
            .user(user)
            .password(password)
            .fetch_size(500)
            .max_connections(1)
            .build()?;
        let graph = Graph::connect(config).await?;
        Ok(Self { graph })
    }
}

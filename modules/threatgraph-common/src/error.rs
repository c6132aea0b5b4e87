use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThreatGraphError {
    #[error("Graph error: {0}")]
    Graph(#[from] neo4rs::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

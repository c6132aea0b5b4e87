// Seams between the ingest loop and its two external systems.
//
// PulseSource — where pulses come from (OTX in production).
// MentionSink — where mentions are written (Neo4j in production).
//
// Both have in-memory doubles in `testing.rs`, so the orchestration is
// tested without network or Docker.

use async_trait::async_trait;

use otx_client::{OtxClient, Pulse};
use threatgraph_common::{Mention, ThreatGraphError};
use threatgraph_graph::{GraphLoader, GraphStats};

#[async_trait]
pub trait PulseSource: Send + Sync {
    /// One fetch of the subscribed pulse set.
    async fn subscribed_pulses(&self) -> otx_client::Result<Vec<Pulse>>;
}

#[async_trait]
impl PulseSource for OtxClient {
    async fn subscribed_pulses(&self) -> otx_client::Result<Vec<Pulse>> {
        OtxClient::subscribed_pulses(self).await
    }
}

#[async_trait]
pub trait MentionSink: Send + Sync {
    /// Upsert a single mention in its own transaction.
    async fn upsert_mention(&self, mention: &Mention) -> Result<(), ThreatGraphError>;

    /// Upsert several mentions in one transaction.
    async fn upsert_batch(&self, mentions: &[Mention]) -> Result<(), ThreatGraphError>;

    /// Called once after the last write, before the sink is dropped.
    async fn finish(&self) -> Result<(), ThreatGraphError> {
        Ok(())
    }
}

pub struct GraphSink {
    loader: GraphLoader,
    client: threatgraph_graph::GraphClient,
}

impl GraphSink {
    pub fn new(client: threatgraph_graph::GraphClient) -> Self {
        Self {
            loader: GraphLoader::new(client.clone()),
            client,
        }
    }
}

#[async_trait]
impl MentionSink for GraphSink {
    async fn upsert_mention(&self, mention: &Mention) -> Result<(), ThreatGraphError> {
        Ok(self.loader.upsert_mention(mention).await?)
    }

    async fn upsert_batch(&self, mentions: &[Mention]) -> Result<(), ThreatGraphError> {
        Ok(self.loader.upsert_batch(mentions).await?)
    }

    async fn finish(&self) -> Result<(), ThreatGraphError> {
        let stats = GraphStats::collect(&self.client).await?;
        tracing::info!(
            indicators = stats.indicators,
            reports = stats.reports,
            mentions = stats.mentions,
            "Graph totals"
        );
        Ok(())
    }
}

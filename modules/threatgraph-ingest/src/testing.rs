//! In-memory doubles for `PulseSource` and `MentionSink`.
//!
//! `MemorySink` mirrors the graph's merge semantics: nodes keyed by value and
//! name, first-seen type kept, at most one edge per (value, report).

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;

use async_trait::async_trait;

use otx_client::{OtxError, Pulse, PulseIndicator};
use threatgraph_common::{Mention, ThreatGraphError};

use crate::traits::{MentionSink, PulseSource};

pub struct MockSource {
    response: Mutex<Option<otx_client::Result<Vec<Pulse>>>>,
}

impl MockSource {
    pub fn ok(pulses: Vec<Pulse>) -> Self {
        Self {
            response: Mutex::new(Some(Ok(pulses))),
        }
    }

    pub fn err(err: OtxError) -> Self {
        Self {
            response: Mutex::new(Some(Err(err))),
        }
    }

    pub fn pulse(name: Option<&str>, indicators: &[(&str, &str)]) -> Pulse {
        Pulse {
            name: name.map(String::from),
            indicators: Some(
                indicators
                    .iter()
                    .map(|(v, t)| PulseIndicator {
                        indicator: Some(v.to_string()),
                        kind: Some(t.to_string()),
                    })
                    .collect(),
            ),
        }
    }
}

#[async_trait]
impl PulseSource for MockSource {
    async fn subscribed_pulses(&self) -> otx_client::Result<Vec<Pulse>> {
        self.response
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

#[derive(Default)]
struct Graph {
    indicators: BTreeMap<String, String>,
    reports: BTreeSet<String>,
    edges: BTreeSet<(String, String)>,
    transactions: usize,
}

impl Graph {
    fn merge(&mut self, m: &Mention) {
        self.indicators
            .entry(m.value.clone())
            .or_insert_with(|| m.kind.clone());
        self.reports.insert(m.report.clone());
        self.edges.insert((m.value.clone(), m.report.clone()));
    }
}

#[derive(Default)]
pub struct MemorySink {
    graph: Mutex<Graph>,
    fail_after: Option<usize>,
    fail_finish: bool,
}

impl MemorySink {
    /// Sink whose transactions start failing once `n` have committed.
    pub fn failing_after(n: usize) -> Self {
        Self {
            graph: Mutex::default(),
            fail_after: Some(n),
            fail_finish: false,
        }
    }

    /// Sink that accepts every write but fails its post-load summary.
    pub fn failing_finish() -> Self {
        Self {
            fail_finish: true,
            ..Self::default()
        }
    }

    fn commit(&self, mentions: &[Mention]) -> Result<(), ThreatGraphError> {
        let mut g = self.graph.lock().unwrap();
        if self.fail_after.is_some_and(|n| g.transactions >= n) {
            return Err(ThreatGraphError::Config("injected write failure".into()));
        }
        for m in mentions {
            g.merge(m);
        }
        g.transactions += 1;
        Ok(())
    }

    pub fn indicator_count(&self) -> usize {
        self.graph.lock().unwrap().indicators.len()
    }

    pub fn report_count(&self) -> usize {
        self.graph.lock().unwrap().reports.len()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.lock().unwrap().edges.len()
    }

    /// (indicators, reports, edges)
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.indicator_count(), self.report_count(), self.edge_count())
    }

    pub fn transactions(&self) -> usize {
        self.graph.lock().unwrap().transactions
    }

    pub fn indicator_type(&self, value: &str) -> Option<String> {
        self.graph.lock().unwrap().indicators.get(value).cloned()
    }

    pub fn has_edge(&self, value: &str, report: &str) -> bool {
        self.graph
            .lock()
            .unwrap()
            .edges
            .contains(&(value.to_string(), report.to_string()))
    }
}

#[async_trait]
impl MentionSink for MemorySink {
    async fn upsert_mention(&self, mention: &Mention) -> Result<(), ThreatGraphError> {
        self.commit(std::slice::from_ref(mention))
    }

    async fn upsert_batch(&self, mentions: &[Mention]) -> Result<(), ThreatGraphError> {
        self.commit(mentions)
    }

    async fn finish(&self) -> Result<(), ThreatGraphError> {
        if self.fail_finish {
            return Err(ThreatGraphError::Config("injected summary failure".into()));
        }
        Ok(())
    }
}

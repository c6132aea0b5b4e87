use std::future::Future;

use tracing::{info, warn};

use otx_client::Pulse;
use threatgraph_common::ThreatGraphError;

use crate::extract::pulse_mentions;
use crate::fetch::{fetch_pulses, FetchOutcome};
use crate::traits::{MentionSink, PulseSource};

/// Transaction granularity for the load step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// One transaction per indicator.
    #[default]
    PerIndicator,
    /// One transaction per pulse.
    PerPulse,
}

/// What a run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub pulses: usize,
    pub written: usize,
    pub skipped: usize,
    pub fetch_failed: bool,
}

impl IngestReport {
    /// True when nothing reached the loader.
    pub fn is_empty(&self) -> bool {
        self.pulses == 0
    }
}

/// Fetch once, then load every pulse into the sink returned by `connect`.
///
/// `connect` is only called when the fetch produced pulses, so an empty or
/// failed fetch never opens a database session. Sink errors abort the loop;
/// writes already committed stay committed. Errors from [`MentionSink::finish`]
/// are logged only.
pub async fn run<S, F, Fut>(
    source: &dyn PulseSource,
    connect: F,
    mode: WriteMode,
) -> Result<IngestReport, ThreatGraphError>
where
    S: MentionSink,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<S, ThreatGraphError>>,
{
    let pulses = match fetch_pulses(source).await {
        FetchOutcome::Pulses(pulses) => pulses,
        FetchOutcome::Empty => {
            info!("No data retrieved from OTX.");
            return Ok(IngestReport::default());
        }
        FetchOutcome::Failed(_) => {
            info!("No data retrieved from OTX.");
            return Ok(IngestReport {
                fetch_failed: true,
                ..Default::default()
            });
        }
    };

    info!(count = pulses.len(), "Retrieved pulses. Storing to Neo4j...");

    let sink = connect().await?;
    let report = load(&sink, &pulses, mode).await?;
    // Writes are committed; summary errors are logged only.
    if let Err(e) = sink.finish().await {
        warn!(error = %e, "Post-load summary failed");
    }
    drop(sink);

    info!(
        pulses = report.pulses,
        written = report.written,
        skipped = report.skipped,
        "Data ingestion completed successfully."
    );
    Ok(report)
}

/// Write every usable indicator of every pulse, in order.
pub async fn load<S: MentionSink + ?Sized>(
    sink: &S,
    pulses: &[Pulse],
    mode: WriteMode,
) -> Result<IngestReport, ThreatGraphError> {
    let mut report = IngestReport {
        pulses: pulses.len(),
        ..Default::default()
    };

    for pulse in pulses {
        let extracted = pulse_mentions(pulse);
        report.skipped += extracted.skipped;

        match mode {
            WriteMode::PerIndicator => {
                for mention in &extracted.mentions {
                    sink.upsert_mention(mention).await?;
                    report.written += 1;
                }
            }
            WriteMode::PerPulse => {
                sink.upsert_batch(&extracted.mentions).await?;
                report.written += extracted.mentions.len();
            }
        }
    }

    Ok(report)
}

use tracing::{info, warn};

use otx_client::Pulse;

use crate::traits::PulseSource;

/// Result of the single OTX fetch.
///
/// `Empty` and `Failed` both lead to "nothing to load", but are kept apart so
/// the run report can say which one happened.
#[derive(Debug)]
pub enum FetchOutcome {
    Pulses(Vec<Pulse>),
    Empty,
    Failed(String),
}

impl FetchOutcome {
    /// Collapse to a plain pulse list; failures read as empty.
    pub fn into_pulses(self) -> Vec<Pulse> {
        match self {
            FetchOutcome::Pulses(pulses) => pulses,
            FetchOutcome::Empty | FetchOutcome::Failed(_) => Vec::new(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchOutcome::Failed(_))
    }
}

/// Fetch subscribed pulses once. Errors are logged and never retried.
pub async fn fetch_pulses(source: &dyn PulseSource) -> FetchOutcome {
    info!("Fetching data from AlienVault OTX...");

    match source.subscribed_pulses().await {
        Ok(pulses) if pulses.is_empty() => FetchOutcome::Empty,
        Ok(pulses) => FetchOutcome::Pulses(pulses),
        Err(e) => {
            warn!(error = %e, "Error fetching data from OTX");
            FetchOutcome::Failed(e.to_string())
        }
    }
}

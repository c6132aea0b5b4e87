pub mod extract;
pub mod fetch;
pub mod ingest;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;

pub use fetch::{fetch_pulses, FetchOutcome};
pub use ingest::{run, IngestReport, WriteMode};
pub use traits::{MentionSink, PulseSource};

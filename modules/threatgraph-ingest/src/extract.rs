use otx_client::{Pulse, PulseIndicator};
use threatgraph_common::{Mention, UNKNOWN_REPORT};

/// Mentions extracted from one pulse, plus how many entries were dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PulseMentions {
    pub report: String,
    pub mentions: Vec<Mention>,
    pub skipped: usize,
}

/// Report name for a pulse; absent, null or empty names fall back to
/// [`UNKNOWN_REPORT`].
pub fn report_name(pulse: &Pulse) -> &str {
    match pulse.name.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => UNKNOWN_REPORT,
    }
}

/// Turn a pulse into mentions, in indicator order. Entries without both a
/// value and a type are skipped.
pub fn pulse_mentions(pulse: &Pulse) -> PulseMentions {
    let report = report_name(pulse).to_string();
    let mut mentions = Vec::with_capacity(pulse.indicators().len());
    let mut skipped = 0;

    for ind in pulse.indicators() {
        match usable(ind) {
            Some((value, kind)) => mentions.push(Mention::new(value, kind, report.as_str())),
            None => {
                tracing::debug!(report = report.as_str(), "Skipping indicator without value or type");
                skipped += 1;
            }
        }
    }

    PulseMentions {
        report,
        mentions,
        skipped,
    }
}

fn usable(ind: &PulseIndicator) -> Option<(&str, &str)> {
    let value = ind.indicator.as_deref().filter(|v| !v.is_empty())?;
    let kind = ind.kind.as_deref().filter(|k| !k.is_empty())?;
    Some((value, kind))
}

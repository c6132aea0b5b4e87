use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Envelope returned by `GET /api/v1/pulses/subscribed`.
///
/// OTX pages this endpoint (`next`, `count`) but only the first page is read.
/// Entries of `results` that are not objects are dropped.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubscribedPulses {
    #[serde(default, deserialize_with = "lenient_pulses")]
    pub results: Vec<Pulse>,
}

impl SubscribedPulses {
    pub fn into_pulses(self) -> Vec<Pulse> {
        self.results
    }
}

/// A named bundle of indicators. OTX returns many more fields (tags,
/// author, TLP...) which are ignored.
///
/// Fields of the wrong JSON type decode as `None` rather than failing the
/// whole feed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pulse {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_indicators")]
    pub indicators: Option<Vec<PulseIndicator>>,
}

impl Pulse {
    pub fn indicators(&self) -> &[PulseIndicator] {
        self.indicators.as_deref().unwrap_or(&[])
    }
}

/// A single observable inside a pulse: an IP, domain, hash, URL, etc.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PulseIndicator {
    #[serde(default, deserialize_with = "lenient_string")]
    pub indicator: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "lenient_string")]
    pub kind: Option<String>,
}

fn lenient_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Non-object entries become an empty indicator, which the skip rule drops
/// and counts.
fn lenient_indicators<'de, D: Deserializer<'de>>(
    d: D,
) -> Result<Option<Vec<PulseIndicator>>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .map(|item| serde_json::from_value(item).unwrap_or_default())
                .collect(),
        ),
        _ => None,
    })
}

fn lenient_pulses<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<Pulse>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Array(items) => items
            .into_iter()
            .filter(Value::is_object)
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

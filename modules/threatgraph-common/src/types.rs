use serde::{Deserialize, Serialize};

/// Report name used when a pulse arrives without one.
pub const UNKNOWN_REPORT: &str = "Unknown Report";

/// One indicator seen in one report: the unit written to the graph as
/// `(:Indicator)-[:MENTIONED_IN]->(:Report)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mention {
    /// Raw observable (IP, domain, hash, URL...). Unique key of the Indicator node.
    pub value: String,
    /// Source-defined category. Only stored when the Indicator node is created.
    pub kind: String,
    /// Unique key of the Report node.
    pub report: String,
}

impl Mention {
    pub fn new(value: impl Into<String>, kind: impl Into<String>, report: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: kind.into(),
            report: report.into(),
        }
    }
}

use std::env;

/// Process configuration, built once at startup and passed down explicitly.
///
/// Nothing is validated here: a missing key is an empty string and surfaces
/// as an auth or connection failure on first use.
#[derive(Debug, Clone, Default)]
pub struct Config {
    // OTX
    pub otx_api_key: String,
    pub otx_base_url: String,

    // Neo4j
    pub neo4j_uri: String,
    pub neo4j_user: String,
    pub neo4j_password: String,
}

const DEFAULT_OTX_BASE_URL: &str = "https://otx.alienvault.com";

impl Config {
    /// Load from the process environment, reading `.env` first if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).unwrap_or_default();
        Self {
            otx_api_key: var("OTX_API_KEY"),
            otx_base_url: lookup("OTX_BASE_URL")
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_OTX_BASE_URL.to_string()),
            neo4j_uri: var("NEO4J_URI"),
            neo4j_user: var("NEO4J_USERNAME"),
            neo4j_password: var("NEO4J_PASSWORD"),
        }
    }

    pub fn log_redacted(&self) {
        tracing::info!("Config loaded:");
        tracing::info!("  OTX_API_KEY: {}", preview(&self.otx_api_key));
        tracing::info!("  OTX_BASE_URL: {}", self.otx_base_url);
        tracing::info!("  NEO4J_URI: {}", or_unset(&self.neo4j_uri));
        tracing::info!("  NEO4J_USERNAME: {}", or_unset(&self.neo4j_user));
        tracing::info!("  NEO4J_PASSWORD: {}", presence(&self.neo4j_password));
    }
}

fn preview(val: &str) -> String {
    if val.is_empty() {
        return "<not set>".to_string();
    }
    let head: String = val.chars().take(4).collect();
    format!("{}...({} chars)", head, val.chars().count())
}

/// Secrets that are never partially printed.
fn presence(val: &str) -> String {
    if val.is_empty() {
        "<not set>".to_string()
    } else {
        format!("<set> ({} chars)", val.chars().count())
    }
}

fn or_unset(val: &str) -> &str {
    if val.is_empty() {
        "<not set>"
    } else {
        val
    }
}

use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_SERVICE_NAME: &str = "Driver Sentiment Model Server";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Reported as `service` by the root endpoint.
    pub service_name: String,
    pub body_limit_bytes: usize,
    /// Optional YAML file with extra word valences for the lexicon analyzer.
    pub lexicon_path: Option<PathBuf>,
}

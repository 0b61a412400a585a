use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

pub const BIND_ADDR_VAR: &str = "SALVAGE_BIND_ADDR";
pub const DATA_DIR_VAR: &str = "SALVAGE_DATA_DIR";
pub const LOG_FORMAT_VAR: &str = "SALVAGE_LOG_FORMAT";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DATA_DIR: &str = "./data";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Root of the on-disk assessment store.
    pub data_dir: PathBuf,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line, for log shippers.
    Json,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            other => Err(eyre::eyre!(
                "unknown log format '{other}' (expected json or pretty)"
            )),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source; unset variables take their
    /// defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let bind_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr
            .parse()
            .map_err(|e| eyre::eyre!("invalid {BIND_ADDR_VAR} '{bind_addr}': {e}"))?;

        let data_dir = lookup(DATA_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(value) => value.parse()?,
            None => LogFormat::Json,
        };

        Ok(Self {
            bind_addr,
            data_dir,
            log_format,
        })
    }
}

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub print: PrintConfig,
    #[serde(default)]
    pub state: StateConfig,
    #[serde(default)]
    pub templates: TemplatesConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,
    /// Largest accepted request body, in bytes.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

/// Print command configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PrintConfig {
    /// Executable invoked with the rendered ticket text on its stdin.
    #[serde(default = "default_script_path")]
    pub script_path: PathBuf,
    /// Upper bound on a single print attempt.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            script_path: default_script_path(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Durable state locations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StateConfig {
    /// Counter file backing the ticket number sequence.
    #[serde(default = "default_counter_path")]
    pub counter_path: PathBuf,
    /// Append-only ticket event log.
    #[serde(default = "default_ticket_log_path")]
    pub ticket_log_path: PathBuf,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            counter_path: default_counter_path(),
            ticket_log_path: default_ticket_log_path(),
        }
    }
}

/// Template settings source
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TemplatesConfig {
    /// Ticket-type -> template/width map, TOML. A missing or malformed
    /// file falls back to the built-in default template.
    #[serde(default = "default_settings_path")]
    pub settings_path: PathBuf,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            settings_path: default_settings_path(),
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    "0.0.0.0:5005".parse().unwrap()
}

fn default_max_body_bytes() -> usize {
    64 * 1024 // 64 KiB
}

fn default_script_path() -> PathBuf {
    PathBuf::from("config/print_ticket.sh")
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_counter_path() -> PathBuf {
    PathBuf::from("config/state/ticket_counter")
}

fn default_ticket_log_path() -> PathBuf {
    PathBuf::from("config/logs/tickets.log")
}

fn default_settings_path() -> PathBuf {
    PathBuf::from("config/templates.toml")
}

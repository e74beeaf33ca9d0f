use clap::Parser;

/// Command line configuration of the `redset` set server.
#[derive(Debug, Clone, Parser)]
#[command(version, about = "In-memory RESP2 set server")]
pub struct ServerConfig {
    /// Address the server binds to
    #[arg(long, env = "REDSET_BIND", default_value = "127.0.0.1:6379")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: "127.0.0.1:6379".to_string() }
    }
}

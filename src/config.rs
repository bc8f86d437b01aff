use clap::Parser;

/// Server configuration, read from flags with environment fallbacks.
#[derive(Debug, Clone, Parser)]
#[command(name = "user_hours", about = "In-memory user and hours tracking service")]
pub struct ServerConfig {
    #[arg(long, env = "USER_HOURS_HOST", default_value = "0.0.0.0", help = "Address to bind")]
    pub host: String,

    #[arg(long, env = "USER_HOURS_PORT", default_value_t = 5003, help = "Port to listen on")]
    pub port: u16,

    #[arg(
        long,
        env = "USER_HOURS_BUFFER",
        default_value_t = 32,
        help = "Pending request capacity of the user store"
    )]
    pub buffer_size: usize,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

use std::path::PathBuf;
use std::sync::Arc;

/// Application configuration and constants
pub struct Config {
    pub data_dir: Arc<PathBuf>,
    pub views_dir: Arc<PathBuf>,
    pub port: u16,
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self {
            data_dir: Arc::new(PathBuf::from("data")),
            views_dir: Arc::new(PathBuf::from("views")),
            port: 8080,
        }
    }

    /// Create configuration with custom values
    pub fn with_custom(data_dir: PathBuf, views_dir: PathBuf, port: Option<u16>) -> Self {
        Self {
            data_dir: Arc::new(data_dir),
            views_dir: Arc::new(views_dir),
            port: port.unwrap_or(8080),
        }
    }

    /// Get the socket address for binding
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        std::net::SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

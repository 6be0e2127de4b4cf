use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Application configuration, built once at startup and handed to the
/// router. Pages live under `data_dir`, templates under `template_dir`.
pub struct Config {
    pub data_dir: PathBuf,
    pub template_dir: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            template_dir: PathBuf::from("tmpl"),
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }

    /// Defaults with `QUIRE_DATA_DIR`, `QUIRE_TMPL_DIR`, and `QUIRE_PORT`
    /// environment overrides applied.
    pub fn from_env() -> Self {
        let mut config = Self::new();
        if let Ok(dir) = std::env::var("QUIRE_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Ok(dir) = std::env::var("QUIRE_TMPL_DIR") {
            config.template_dir = PathBuf::from(dir);
        }
        if let Ok(port) = std::env::var("QUIRE_PORT") {
            match port.parse() {
                Ok(port) => config.port = port,
                Err(_) => log::warn!("Ignoring unparsable QUIRE_PORT value '{}'", port),
            }
        }
        config
    }

    /// Create configuration with custom values
    pub fn with_custom(
        data_dir: PathBuf,
        template_dir: PathBuf,
        port: Option<u16>,
        host: Option<String>,
    ) -> Self {
        Self {
            data_dir,
            template_dir,
            port: port.unwrap_or(8080),
            host: host.unwrap_or_else(|| "0.0.0.0".to_string()),
        }
    }

    /// Get the socket address for binding
    pub fn socket_addr(&self) -> SocketAddr {
        let ip: IpAddr = self.host.parse().unwrap_or_else(|_| [0, 0, 0, 0].into());
        SocketAddr::new(ip, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_layout() {
        let config = Config::new();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.template_dir, PathBuf::from("tmpl"));
        assert_eq!(config.socket_addr().port(), 8080);
    }

    #[test]
    fn custom_paths_keep_default_port() {
        let config = Config::with_custom(
            PathBuf::from("/srv/wiki/data"),
            PathBuf::from("/srv/wiki/tmpl"),
            None,
            None,
        );
        assert_eq!(config.socket_addr().port(), 8080);
        assert_eq!(config.data_dir, PathBuf::from("/srv/wiki/data"));
    }

    #[test]
    fn unparsable_host_falls_back_to_unspecified() {
        let config = Config::with_custom(
            PathBuf::from("data"),
            PathBuf::from("tmpl"),
            Some(9000),
            Some("not-an-ip".to_string()),
        );
        let addr = config.socket_addr();
        assert!(addr.ip().is_unspecified());
        assert_eq!(addr.port(), 9000);
    }
}

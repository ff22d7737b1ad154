//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `MEMBERSHIP_*` environment variables, and
//! configuration files, in OrthoConfig's usual precedence order.

use std::net::{IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Host used when none is configured.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Port used when none is configured.
pub const DEFAULT_PORT: u16 = 3000;

/// Errors raised while turning settings into a bind address.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// The configured host is not an IP address.
    #[error("host must be an IP address, got {0:?}")]
    InvalidHost(String),
}

/// Listener settings for the HTTP server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "MEMBERSHIP")]
pub struct ServerSettings {
    /// Interface address to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    #[ortho_config(default = 3000)]
    pub port: u16,
}

impl ServerSettings {
    /// Configured host, falling back to [`DEFAULT_HOST`].
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Socket address the server should bind.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = self.host();
        let ip: IpAddr = host
            .parse()
            .map_err(|_| SettingsError::InvalidHost(host.to_owned()))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

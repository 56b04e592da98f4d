//! HTTP server configuration object.

/// Host the server listens on.
pub const DEFAULT_HOST: &str = "localhost";
/// Port the server listens on.
pub const DEFAULT_PORT: u16 = 8080;

/// Builder-style configuration for creating the HTTP server.
///
/// The binary always runs with [`ServerConfig::default`]; tests override the
/// bind target to grab an ephemeral port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    host: String,
    port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Override the host and port to bind.
    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "Exercised by server tests binding ephemeral ports")
    )]
    #[must_use]
    pub fn with_bind(mut self, host: impl Into<String>, port: u16) -> Self {
        self.host = host.into();
        self.port = port;
        self
    }

    /// Return the host and port the server will bind to.
    #[must_use]
    pub fn bind_target(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }

    /// Base URL announced in the startup log.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_listens_on_localhost_8080() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_target(), ("localhost", 8080));
        assert_eq!(config.base_url(), "http://localhost:8080");
    }

    #[test]
    fn with_bind_overrides_target() {
        let config = ServerConfig::default().with_bind("127.0.0.1", 0);
        assert_eq!(config.bind_target(), ("127.0.0.1", 0));
    }
}

//! Configuration for the HTTP transport.
//!
//! # Configuration Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `request_timeout_ms` | 30000 | Whole-request timeout |
//! | `connection_timeout_secs` | 30 | Connection establishment timeout |
//!
//! Timeouts are the transport's own; this layer adds no cancellation or
//! retry of its own on top of them.
//!
//! # Examples
//!
//! ```
//! use couch_rs::ClientConfig;
//!
//! let config = ClientConfig::default();
//! assert_eq!(config.request_timeout_ms, 30_000);
//!
//! let config = ClientConfig {
//!     request_timeout_ms: 5_000,
//!     ..Default::default()
//! };
//! assert_eq!(config.connection_timeout_secs, 30); // Default
//! ```

/// Configuration for the HTTP transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Request timeout in milliseconds.
    ///
    /// Maximum time to wait for a request to complete, body included.
    pub request_timeout_ms: u64,

    /// Connection timeout in seconds.
    ///
    /// Maximum time to wait for a connection to be established.
    pub connection_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            request_timeout_ms: 30_000,
            connection_timeout_secs: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.request_timeout_ms, 30_000);
        assert_eq!(config.connection_timeout_secs, 30);
    }

    #[test]
    fn test_partial_override() {
        let config = ClientConfig {
            request_timeout_ms: 1_000,
            ..Default::default()
        };
        assert_eq!(config.request_timeout_ms, 1_000);
        assert_eq!(config.connection_timeout_secs, 30);
    }

    #[test]
    fn test_clone_eq() {
        let config = ClientConfig::default();
        assert_eq!(config, config.clone());
    }
}

//! Server endpoint, root of the resource hierarchy.

use crate::client::{ClientConfig, CouchClient};
use crate::error::Result;
use crate::resource::Database;

/// Configuration for a [`Node`].
///
/// # Examples
///
/// ```
/// use couch_rs::NodeConfig;
///
/// let config = NodeConfig {
///     address: "couch.internal".to_string(),
///     ..Default::default()
/// };
/// assert_eq!(config.port, 5984);
/// ```
#[derive(Clone, Debug)]
pub struct NodeConfig {
    /// URL scheme, `http` by default.
    pub protocol: String,

    /// Server host, `localhost` by default.
    pub address: String,

    /// Server port, `5984` by default.
    pub port: u16,

    /// Transport configuration for the shared HTTP client.
    pub client: ClientConfig,
}

impl Default for NodeConfig {
    fn default() -> Self {
        NodeConfig {
            protocol: "http".to_string(),
            address: "localhost".to_string(),
            port: 5984,
            client: ClientConfig::default(),
        }
    }
}

/// A document-database server endpoint.
///
/// The base URL is derived once at construction as
/// `<protocol>://<address>:<port>/` and never changes. The Node also owns
/// the [`CouchClient`] that every descendant resource reuses.
///
/// # Examples
///
/// ```
/// use couch_rs::{Node, NodeConfig};
///
/// let node = Node::new();
/// assert_eq!(node.url(), "http://localhost:5984/");
///
/// let node = Node::with_config(NodeConfig {
///     protocol: "https".to_string(),
///     address: "db.example.com".to_string(),
///     port: 6984,
///     ..Default::default()
/// });
/// assert_eq!(node.url(), "https://db.example.com:6984/");
/// ```
#[derive(Clone, Debug)]
pub struct Node {
    protocol: String,
    address: String,
    port: u16,
    url: String,
    client: CouchClient,
}

impl Node {
    /// Create a node with default configuration
    /// (`http://localhost:5984/`).
    pub fn new() -> Self {
        Self::with_config(NodeConfig::default())
    }

    /// Create a node with custom configuration.
    pub fn with_config(config: NodeConfig) -> Self {
        let url = format!(
            "{}://{}:{}/",
            config.protocol, config.address, config.port
        );

        Node {
            url,
            client: CouchClient::with_config(config.client),
            protocol: config.protocol,
            address: config.address,
            port: config.port,
        }
    }

    /// URL scheme of this endpoint.
    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    /// Host of this endpoint.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Port of this endpoint.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Base URL, `<protocol>://<address>:<port>/`.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The HTTP client shared with every descendant resource.
    pub fn client(&self) -> &CouchClient {
        &self.client
    }

    /// Bind a [`Database`] under this node without any network call.
    pub fn database(&self, name: impl Into<String>) -> Database {
        Database::new(self.client.clone(), &self.url, name)
    }

    /// Create a database on the server.
    ///
    /// Issues `PUT <url><name>/` and returns the persisted [`Database`].
    /// Fails with [`CouchError::DatabaseCreation`](crate::CouchError)
    /// when the server rejects the request, e.g. because the database
    /// already exists.
    pub async fn create_database(&self, name: impl Into<String>) -> Result<Database> {
        let database = self.database(name);
        database.create().await?;
        Ok(database)
    }

    /// Delete a database from the server.
    ///
    /// Fails with [`CouchError::DatabaseNotFound`](crate::CouchError)
    /// when the target does not exist.
    pub async fn delete_database(&self, name: impl Into<String>) -> Result<()> {
        self.database(name).delete().await
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_url() {
        let node = Node::new();
        assert_eq!(node.url(), "http://localhost:5984/");
    }

    #[test]
    fn test_default_fields() {
        let node = Node::new();
        assert_eq!(node.protocol(), "http");
        assert_eq!(node.address(), "localhost");
        assert_eq!(node.port(), 5984);
    }

    #[test]
    fn test_custom_config_url() {
        let node = Node::with_config(NodeConfig {
            protocol: "https".to_string(),
            address: "db.example.com".to_string(),
            port: 6984,
            ..Default::default()
        });
        assert_eq!(node.url(), "https://db.example.com:6984/");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let node = Node::with_config(NodeConfig {
            port: 5985,
            ..Default::default()
        });
        assert_eq!(node.url(), "http://localhost:5985/");
    }

    #[test]
    fn test_url_idempotent() {
        let node = Node::new();
        assert_eq!(node.url(), node.url());
    }

    #[test]
    fn test_database_binding_url() {
        let node = Node::new();
        let db = node.database("test");
        assert_eq!(db.url(), "http://localhost:5984/test/");
    }
}

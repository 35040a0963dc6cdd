//! Named collection of documents under a Node.

use crate::client::CouchClient;
use crate::error::{CouchError, Result};
use crate::resource::Document;
use serde_json::{Map, Value};

/// A named database living under a [`Node`](crate::Node).
///
/// The URL is fixed at construction from the owning node's URL and the
/// database name, `<node.url><name>/`, and is immutable afterwards.
///
/// Database-level failures are logged at error level and returned wrapped
/// in a descriptive variant; see [`create`](Database::create) and
/// [`delete`](Database::delete).
#[derive(Clone, Debug)]
pub struct Database {
    client: CouchClient,
    name: String,
    url: String,
}

impl Database {
    pub(crate) fn new(client: CouchClient, node_url: &str, name: impl Into<String>) -> Self {
        let name = name.into();
        let url = format!("{}{}/", node_url, name);
        Database { client, name, url }
    }

    /// Name of this database.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// URL of this database, `<node.url><name>/`.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub(crate) fn client(&self) -> &CouchClient {
        &self.client
    }

    /// Create this database on the server.
    ///
    /// Issues a PUT with an empty body. Any failure — transport error,
    /// non-2xx status (the server answers 412 when the database already
    /// exists), or a body that does not report `ok: true` — is logged and
    /// returned as [`CouchError::DatabaseCreation`] wrapping the
    /// underlying error.
    pub async fn create(&self) -> Result<&Self> {
        match self.try_create().await {
            Ok(()) => Ok(self),
            Err(source) => {
                tracing::error!(database = %self.name, error = %source, "database create failed");
                Err(CouchError::DatabaseCreation {
                    name: self.name.clone(),
                    source: Box::new(source),
                })
            }
        }
    }

    async fn try_create(&self) -> Result<()> {
        let res = self.client.put(&self.url, "", &[]).await?;

        if !res.is_success() {
            return Err(CouchError::Http {
                status: res.status,
                url: self.url.clone(),
            });
        }

        let ack = res.ack()?;
        tracing::debug!(database = %self.name, ?ack, "create acknowledged");

        if ack.ok {
            Ok(())
        } else {
            Err(CouchError::WriteRejected {
                url: self.url.clone(),
            })
        }
    }

    /// Delete this database from the server.
    ///
    /// A 404 answer fails with [`CouchError::DatabaseNotFound`]; other
    /// non-2xx statuses and transport failures propagate un-wrapped.
    pub async fn delete(&self) -> Result<()> {
        let res = self.client.delete(&self.url, &[]).await?;

        if res.is_not_found() {
            tracing::error!(database = %self.name, "database delete failed, database not found");
            return Err(CouchError::DatabaseNotFound {
                name: self.name.clone(),
            });
        }

        if !res.is_success() {
            return Err(CouchError::Http {
                status: res.status,
                url: self.url.clone(),
            });
        }

        let ack = res.ack()?;
        tracing::debug!(database = %self.name, ?ack, "delete acknowledged");
        Ok(())
    }

    /// Bind a [`Document`] under this database without any network call.
    ///
    /// If the mapping carries `_id`/`_rev` fields, they seed the
    /// document's identifier and revision.
    pub fn document(&self, data: Map<String, Value>) -> Document {
        Document::new(self.client.clone(), &self.url, data)
    }

    /// Create a document on the server.
    ///
    /// Binds a [`Document`] with the given payload, invokes its create
    /// operation, and returns it carrying the server-assigned identifier
    /// and revision.
    pub async fn create_document(&self, data: Map<String, Value>) -> Result<Document> {
        let mut document = self.document(data);
        document.create().await?;
        Ok(document)
    }
}

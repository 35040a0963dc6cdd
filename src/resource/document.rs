//! Versioned JSON record under a Database.

use crate::client::CouchClient;
use crate::error::{CouchError, Result};
use crate::resource::Attachment;
use crate::types::{Revision, WriteAck};
use bytes::Bytes;
use serde_json::{Map, Value};

/// A versioned JSON document.
///
/// A document starts unpersisted: no identifier, no revision, no URL.
/// After a successful [`create`](Document::create) the server-assigned
/// identifier and revision are written back into the document, and every
/// later mutation — including attachment writes — advances the revision
/// in place. An identifier, once set, never reverts to empty.
///
/// The payload is an arbitrary JSON object. The reserved `_id`/`_rev`
/// fields may seed the identity at construction but are otherwise managed
/// by this type; see [`to_json`](Document::to_json) for the
/// serialization rule.
#[derive(Clone, Debug)]
pub struct Document {
    client: CouchClient,
    database_url: String,
    id: Option<String>,
    rev: Option<Revision>,
    data: Map<String, Value>,
}

impl Document {
    pub(crate) fn new(client: CouchClient, database_url: &str, data: Map<String, Value>) -> Self {
        let id = data
            .get("_id")
            .and_then(Value::as_str)
            .map(String::from);
        let rev = data
            .get("_rev")
            .and_then(Value::as_str)
            .map(Revision::from);

        Document {
            client,
            database_url: database_url.to_string(),
            id,
            rev,
            data,
        }
    }

    /// Identifier, if one has been supplied or assigned.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Revision last observed from the server.
    pub fn rev(&self) -> Option<&Revision> {
        self.rev.as_ref()
    }

    /// The payload mapping.
    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    /// Mutable access to the payload mapping.
    pub fn data_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.data
    }

    /// Whether this document has been written to the server: identifier
    /// and revision are both known.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some() && self.rev.is_some()
    }

    pub(crate) fn client(&self) -> &CouchClient {
        &self.client
    }

    /// URL of this document, `<database.url><id>/`.
    ///
    /// A document without an identifier has no URL.
    pub fn url(&self) -> Option<String> {
        self.id
            .as_ref()
            .map(|id| format!("{}{}/", self.database_url, id))
    }

    /// URL of this document carrying a revision query parameter,
    /// `<database.url><id>?rev=<rev>`.
    ///
    /// Note the trailing slash of [`url`](Document::url) is absent in
    /// this form; the asymmetry is inherited deliberately.
    pub fn url_with_rev(&self, rev: &Revision) -> Option<String> {
        self.id
            .as_ref()
            .map(|id| format!("{}{}?rev={}", self.database_url, id, rev))
    }

    /// The wire form of the payload.
    ///
    /// `_id` and `_rev` are stripped from the mapping unless currently
    /// set on the document, in which case the document's current values
    /// are written in. Unset identity fields are never sent; set ones
    /// always round-trip.
    pub fn to_json(&self) -> Value {
        let mut data = self.data.clone();

        match &self.id {
            Some(id) => {
                data.insert("_id".to_string(), Value::String(id.clone()));
            }
            None => {
                data.remove("_id");
            }
        }
        match &self.rev {
            Some(rev) => {
                data.insert("_rev".to_string(), Value::String(rev.as_str().to_string()));
            }
            None => {
                data.remove("_rev");
            }
        }

        Value::Object(data)
    }

    /// Write this document to the server.
    ///
    /// With an identifier set this issues `PUT <database.url><id>`, which
    /// also covers updates when a revision is present in the serialized
    /// body; otherwise `POST <database.url>` and the server assigns the
    /// identifier. On an accepted write the acknowledged `id`/`rev`
    /// overwrite this document's identity fields.
    ///
    /// A transport-complete response that does not report `ok: true`
    /// returns [`CouchError::WriteRejected`] and leaves the identity
    /// fields unchanged, so a stale document cannot be mistaken for a
    /// persisted one.
    pub async fn create(&mut self) -> Result<()> {
        let body = serde_json::to_vec(&self.to_json())?;
        let headers = [("Content-Type", "application/json")];

        let (url, res) = match &self.id {
            Some(id) => {
                let url = format!("{}{}", self.database_url, id);
                let res = self.client.put(&url, body, &headers).await?;
                (url, res)
            }
            None => {
                let url = self.database_url.clone();
                let res = self.client.post(&url, body, &headers).await?;
                (url, res)
            }
        };

        if !res.is_success() {
            return Err(CouchError::Http {
                status: res.status,
                url,
            });
        }

        let ack = res.ack()?;
        tracing::debug!(?ack, "document write acknowledged");

        if !ack.ok {
            return Err(CouchError::WriteRejected { url });
        }

        self.apply_ack(&ack);
        Ok(())
    }

    /// Bind an [`Attachment`] for this document without any network call.
    pub fn attachment(
        &self,
        name: impl Into<String>,
        content_type: impl Into<String>,
        content_length: u64,
        data: impl Into<Bytes>,
    ) -> Attachment {
        Attachment::new(name, content_type, content_length, data)
    }

    /// Create a standalone attachment on this document.
    ///
    /// Binds an [`Attachment`] and invokes its create operation, which
    /// advances this document's revision on success. Returns the created
    /// attachment.
    pub async fn create_standalone_attachment(
        &mut self,
        name: impl Into<String>,
        content_type: impl Into<String>,
        content_length: u64,
        data: impl Into<Bytes>,
    ) -> Result<Attachment> {
        let attachment = Attachment::new(name, content_type, content_length, data);
        attachment.create(self).await?;
        Ok(attachment)
    }

    /// Overwrite identity fields from an acknowledgement.
    ///
    /// Only acknowledged values are applied, so an identifier can never
    /// revert to empty.
    pub(crate) fn apply_ack(&mut self, ack: &WriteAck) {
        if let Some(id) = &ack.id {
            self.id = Some(id.clone());
        }
        if let Some(rev) = &ack.rev {
            self.rev = Some(rev.clone());
        }
    }
}

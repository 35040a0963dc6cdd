//! Named binary blob under a Document.

use crate::error::{CouchError, Result};
use crate::resource::Document;
use bytes::Bytes;

/// A named binary attachment, written standalone via its own PUT rather
/// than inlined into the document body.
///
/// An attachment is a leaf: it holds its name, content type, length, and
/// bytes, and derives its URL from the owning [`Document`] at call time.
/// Because attachment writes are document mutations, a known document
/// revision must ride along as a query parameter, and an accepted write
/// advances the owning document's revision in place — which is why
/// [`create`](Attachment::create) and [`delete`](Attachment::delete)
/// take the document `&mut`.
///
/// The content length is coerced to its decimal string form exactly once,
/// at construction; it is never held as a raw number.
#[derive(Clone, Debug)]
pub struct Attachment {
    name: String,
    content_type: String,
    content_length: String,
    data: Bytes,
}

impl Attachment {
    /// Create an attachment binding. No network call.
    pub fn new(
        name: impl Into<String>,
        content_type: impl Into<String>,
        content_length: u64,
        data: impl Into<Bytes>,
    ) -> Self {
        Attachment {
            name: name.into(),
            content_type: content_type.into(),
            content_length: content_length.to_string(),
            data: data.into(),
        }
    }

    /// Name of this attachment.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared content type.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Declared content length, as a decimal string.
    pub fn content_length(&self) -> &str {
        &self.content_length
    }

    /// The binary payload.
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// URL of this attachment under the given document,
    /// `<document.url><name>`, carrying `?rev=<rev>` whenever the
    /// document has a known revision.
    ///
    /// `None` when the document has no identifier yet.
    pub fn url(&self, document: &Document) -> Option<String> {
        let doc_url = document.url()?;
        Some(match document.rev() {
            Some(rev) => format!("{}{}?rev={}", doc_url, self.name, rev),
            None => format!("{}{}", doc_url, self.name),
        })
    }

    fn headers(&self) -> [(&str, &str); 2] {
        [
            ("Content-Type", self.content_type.as_str()),
            ("Content-Length", self.content_length.as_str()),
        ]
    }

    /// Write this attachment to the server.
    ///
    /// Issues a PUT with the raw binary payload and the `Content-Type`
    /// and `Content-Length` headers. On an accepted write the
    /// acknowledged `id`/`rev` overwrite the owning document's identity
    /// fields, since attaching advances the document's revision. A
    /// response that does not report `ok: true` returns
    /// [`CouchError::WriteRejected`] and leaves the document unchanged.
    pub async fn create(&self, document: &mut Document) -> Result<()> {
        let url = self.url(document).ok_or(CouchError::MissingDocumentId)?;

        let res = document
            .client()
            .put(&url, self.data.clone(), &self.headers())
            .await?;

        if !res.is_success() {
            return Err(CouchError::Http {
                status: res.status,
                url,
            });
        }

        let ack = res.ack()?;
        tracing::debug!(attachment = %self.name, ?ack, "attachment write acknowledged");

        if !ack.ok {
            return Err(CouchError::WriteRejected { url });
        }

        document.apply_ack(&ack);
        Ok(())
    }

    /// Delete this attachment from the server.
    ///
    /// Issues a DELETE to the same URL with the same headers. An
    /// accepted delete is itself a document mutation, so the owning
    /// document's identity fields are overwritten from the
    /// acknowledgement here too.
    pub async fn delete(&self, document: &mut Document) -> Result<()> {
        let url = self.url(document).ok_or(CouchError::MissingDocumentId)?;

        let res = document.client().delete(&url, &self.headers()).await?;

        if !res.is_success() {
            return Err(CouchError::Http {
                status: res.status,
                url,
            });
        }

        let ack = res.ack()?;
        tracing::debug!(attachment = %self.name, ?ack, "attachment delete acknowledged");

        if !ack.ok {
            return Err(CouchError::WriteRejected { url });
        }

        document.apply_ack(&ack);
        Ok(())
    }
}

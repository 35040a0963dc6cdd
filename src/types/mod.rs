//! Core data types for the document-store wire protocol.
//!
//! # Overview
//!
//! Every write against the server resolves to the same small vocabulary:
//! a request goes out, a [`CouchResponse`] comes back, and on the happy
//! path its body decodes to a [`WriteAck`] carrying the server-assigned
//! identifier and [`Revision`].
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Revision`] | Opaque optimistic-concurrency token, e.g. `1-967a00d` |
//! | [`CouchResponse`] | Raw HTTP response: status, headers, body |
//! | [`WriteAck`] | Parsed `{"ok": true, "id": ..., "rev": ...}` body |
//!
//! # Revisions
//!
//! Revisions are the heart of the protocol. Every mutation of an existing
//! document must present the revision the client last observed; the server
//! answers each accepted write with the next one. Attachment writes count
//! as document mutations and advance the owning document's revision too.
//!
//! ```
//! use couch_rs::Revision;
//!
//! let rev = Revision::new("2-7051cbe5c8faecb085f50d42f5d911d2");
//! assert_eq!(rev.generation(), Some(2));
//! ```

mod ack;
mod response;
mod revision;

pub use ack::WriteAck;
pub use response::CouchResponse;
pub use revision::Revision;

//! Parsed write acknowledgement.

use crate::types::Revision;

/// The body a CouchDB-compatible server answers writes with.
///
/// Successful document and attachment writes carry all three fields:
/// `{"ok": true, "id": "...", "rev": "..."}`. Database-level operations
/// answer with `{"ok": true}` alone. Rejections carry `"error"` and
/// `"reason"` instead, which are kept for logging.
///
/// All fields default, so any well-formed JSON object parses; an absent
/// `"ok"` reads as `false`.
///
/// # Examples
///
/// ```
/// use couch_rs::WriteAck;
///
/// let ack: WriteAck =
///     serde_json::from_str(r#"{"ok":true,"id":"abc","rev":"1-xyz"}"#).unwrap();
/// assert!(ack.ok);
/// assert_eq!(ack.id.as_deref(), Some("abc"));
///
/// let ack: WriteAck =
///     serde_json::from_str(r#"{"error":"conflict","reason":"Document update conflict."}"#)
///         .unwrap();
/// assert!(!ack.ok);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WriteAck {
    /// Whether the server accepted the write.
    #[serde(default)]
    pub ok: bool,

    /// Server-assigned document identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Revision resulting from the write.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rev: Option<Revision>,

    /// Error token on rejection, e.g. `conflict` or `not_found`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Human-readable rejection reason.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_ack() {
        let ack: WriteAck =
            serde_json::from_str(r#"{"ok":true,"id":"abc","rev":"1-xyz"}"#).unwrap();
        assert!(ack.ok);
        assert_eq!(ack.id.as_deref(), Some("abc"));
        assert_eq!(ack.rev, Some(Revision::new("1-xyz")));
    }

    #[test]
    fn test_bare_ok() {
        let ack: WriteAck = serde_json::from_str(r#"{"ok":true}"#).unwrap();
        assert!(ack.ok);
        assert_eq!(ack.id, None);
        assert_eq!(ack.rev, None);
    }

    #[test]
    fn test_missing_ok_reads_false() {
        let ack: WriteAck = serde_json::from_str("{}").unwrap();
        assert!(!ack.ok);
    }

    #[test]
    fn test_error_body() {
        let ack: WriteAck =
            serde_json::from_str(r#"{"error":"conflict","reason":"Document update conflict."}"#)
                .unwrap();
        assert!(!ack.ok);
        assert_eq!(ack.error.as_deref(), Some("conflict"));
        assert_eq!(ack.reason.as_deref(), Some("Document update conflict."));
    }

    #[test]
    fn test_explicit_not_ok() {
        let ack: WriteAck = serde_json::from_str(r#"{"ok":false}"#).unwrap();
        assert!(!ack.ok);
    }
}

//! Revision token for optimistic concurrency.
//!
//! A revision uniquely identifies one point in a document's history. The
//! server assigns a fresh revision on every accepted write, and every
//! subsequent mutation of that document must present the revision the
//! client last observed, either in the request target (`?rev=...`) or in
//! the serialized body (`"_rev"`).
//!
//! # Format
//!
//! CouchDB-compatible servers use `<generation>-<hash>` strings such as
//! `1-967a00dff5e02add41819138abb3284d`. The token is treated as opaque:
//! nothing in this crate orders or compares revisions beyond equality. The
//! generation prefix is exposed for diagnostics only.
//!
//! # Coercion rule
//!
//! Whatever shape a revision arrives in, it is held and transmitted as a
//! string. This type is the single place where that coercion lives; no
//! call site formats a revision by hand.
//!
//! # Examples
//!
//! ```
//! use couch_rs::Revision;
//!
//! let rev = Revision::new("1-967a00d");
//! assert_eq!(rev.as_str(), "1-967a00d");
//! assert_eq!(rev.generation(), Some(1));
//! assert_eq!(rev.to_string(), "1-967a00d");
//!
//! // From string literals
//! let rev: Revision = "2-abc".into();
//! assert_eq!(rev.generation(), Some(2));
//! ```

use std::fmt;

/// An opaque, server-assigned revision token.
///
/// Serializes transparently as its underlying string, so a `Revision` can
/// sit directly inside a JSON document body as the `"_rev"` field.
///
/// # Examples
///
/// ```
/// use couch_rs::Revision;
///
/// let rev = Revision::new("1-abc");
/// let json = serde_json::to_string(&rev).unwrap();
/// assert_eq!(json, r#""1-abc""#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Revision(String);

impl Revision {
    /// Create a revision from any string-like value.
    #[inline]
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Revision(s.into())
    }

    /// The revision as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The generation counter, i.e. the numeric prefix of an
    /// `<generation>-<hash>` token.
    ///
    /// Returns `None` when the token does not carry the conventional
    /// prefix. Diagnostic use only; the token stays opaque to the
    /// protocol logic.
    ///
    /// # Examples
    ///
    /// ```
    /// use couch_rs::Revision;
    ///
    /// assert_eq!(Revision::new("3-deadbeef").generation(), Some(3));
    /// assert_eq!(Revision::new("opaque").generation(), None);
    /// ```
    #[must_use]
    pub fn generation(&self) -> Option<u64> {
        self.0.split_once('-').and_then(|(n, _)| n.parse().ok())
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Revision {
    #[inline]
    fn from(s: String) -> Self {
        Revision(s)
    }
}

impl From<&str> for Revision {
    #[inline]
    fn from(s: &str) -> Self {
        Revision(s.to_string())
    }
}

impl From<Revision> for String {
    #[inline]
    fn from(rev: Revision) -> Self {
        rev.0
    }
}

impl AsRef<str> for Revision {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let rev = Revision::new("1-abc");
        assert_eq!(rev.as_str(), "1-abc");
    }

    #[test]
    fn test_display() {
        let rev = Revision::new("1-abc");
        assert_eq!(rev.to_string(), "1-abc");
    }

    #[test]
    fn test_from_str() {
        let rev: Revision = "1-abc".into();
        assert_eq!(rev, Revision::new("1-abc"));
    }

    #[test]
    fn test_from_string() {
        let rev: Revision = String::from("1-abc").into();
        assert_eq!(rev, Revision::new("1-abc"));
    }

    #[test]
    fn test_into_string() {
        let s: String = Revision::new("1-abc").into();
        assert_eq!(s, "1-abc");
    }

    #[test]
    fn test_generation() {
        assert_eq!(Revision::new("1-abc").generation(), Some(1));
        assert_eq!(Revision::new("42-abc").generation(), Some(42));
    }

    #[test]
    fn test_generation_opaque() {
        assert_eq!(Revision::new("abc").generation(), None);
        assert_eq!(Revision::new("x-abc").generation(), None);
    }

    #[test]
    fn test_serde_transparent() {
        let rev = Revision::new("1-abc");
        assert_eq!(serde_json::to_string(&rev).unwrap(), r#""1-abc""#);

        let back: Revision = serde_json::from_str(r#""1-abc""#).unwrap();
        assert_eq!(back, rev);
    }

    #[test]
    fn test_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Revision::new("1-a"));
        set.insert(Revision::new("1-b"));
        set.insert(Revision::new("1-a"));
        assert_eq!(set.len(), 2);
    }
}

//! Content-type detection for the batch loader.
//!
//! Shells out to the `file` utility rather than carrying a MIME database.
//! Only the `couch-load` binary calls this; the core resource types take
//! content types as plain strings and never sniff anything themselves.

use crate::error::Result;
use std::io;
use std::path::Path;
use std::process::Command;

/// Detect the MIME type of a file via `file --mime -br`.
///
/// The raw output is trimmed down to the bare type: anything after a `;`
/// (charset parameters) or `,` is dropped.
///
/// Fails when the utility is missing or exits non-zero; callers that
/// want a fallback can substitute `application/octet-stream`.
pub fn content_type_for(path: &Path) -> Result<String> {
    let output = Command::new("file")
        .arg("--mime")
        .arg("-br")
        .arg(path)
        .output()?;

    if !output.status.success() {
        return Err(io::Error::other(format!(
            "file --mime exited with {} for {}",
            output.status,
            path.display()
        ))
        .into());
    }

    let raw = String::from_utf8_lossy(&output.stdout);
    let content_type = raw
        .split([';', ','])
        .next()
        .unwrap_or("")
        .trim()
        .to_string();

    Ok(content_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Relies on file(1), present wherever the loader itself is usable.
    #[test]
    fn test_plain_text_file() {
        if Command::new("file").arg("--version").output().is_err() {
            return;
        }

        let dir = std::env::temp_dir();
        let path = dir.join("couch_rs_sniff_test.txt");
        std::fs::write(&path, "hello world\n").unwrap();

        let content_type = content_type_for(&path).unwrap();
        assert!(
            content_type.starts_with("text/"),
            "unexpected content type: {}",
            content_type
        );
        assert!(!content_type.contains(';'));

        let _ = std::fs::remove_file(&path);
    }
}

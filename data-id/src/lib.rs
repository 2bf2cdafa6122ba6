use std::convert::Infallible;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use core::{fmt::Display, str::FromStr};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Identifier of an indexed file, derived from the name of its root
/// directory and its root-relative path.
///
/// The value is the URL-safe, padding-free base64 encoding of
/// `SHA-256(namespace || 0x00 || relative_path)`. It depends on nothing
/// but its two inputs, so recomputing it in another process (or another
/// implementation) always reproduces the same value, and it can be used
/// unmodified as a URL path segment.
#[derive(
    Debug, Clone, PartialEq, Eq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
pub struct FileId(String);

impl FileId {
    /// Compute the identifier of the file at `relative_path` under the
    /// root named `namespace`.
    ///
    /// The NUL byte between the two components keeps the framing
    /// unambiguous: no pair of inputs can produce another pair's digest
    /// input.
    pub fn compute(namespace: &str, relative_path: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(namespace.as_bytes());
        hasher.update([0u8]);
        hasher.update(relative_path.as_bytes());
        FileId(URL_SAFE_NO_PAD.encode(hasher.finalize()))
    }

    /// Return the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for FileId {
    type Err = Infallible;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        Ok(FileId(s.to_string()))
    }
}

impl Display for FileId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanity_check() {
        assert_eq!(
            FileId::compute("test", "foo"),
            FileId("aOQ3jCgI0A25loP1oPTw6cBy7hFjO6I6JdbQhU0T0vM".to_string())
        );
        assert_eq!(
            FileId::compute("ns", "foo"),
            FileId("ZKmQtJ4TbyhLzB9H0Yw666hK7iNivuFsNlUURQZu3nk".to_string())
        );
        assert_eq!(
            FileId::compute("test", "baz"),
            FileId("FQxPF1hgqNq0-MvjlEj5N-wKdBevuqhwhyi_vHGVv0w".to_string())
        );
    }

    #[test]
    fn same_inputs_same_id() {
        let first = FileId::compute("docs", "a/b.txt");
        let second = FileId::compute("docs", "a/b.txt");
        assert_eq!(first, second);
    }

    #[test]
    fn different_inputs_different_id() {
        let id = FileId::compute("test", "foo");
        assert_ne!(id, FileId::compute("other", "foo"));
        assert_ne!(id, FileId::compute("test", "bar"));
        assert_ne!(id, FileId::compute("tes", "tfoo"));
    }

    #[test]
    fn ids_are_url_safe() {
        let id = FileId::compute("docs", "nested/dir/file.bin");
        assert!(id
            .as_str()
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        assert!(!id.as_str().contains('='));
    }

    #[test]
    fn parses_back_from_display() {
        let id = FileId::compute("test", "foo");
        let parsed: FileId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }
}

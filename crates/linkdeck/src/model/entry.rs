//! A named web reference.

use std::fmt;

use url::Url;

use crate::error::{Error, Result};

/// A named reference to a loadable resource.
///
/// The name is the label shown in list rows and is never empty. The target is
/// kept exactly as given: it is usually a URL, but it is not validated here.
/// Deciding whether a target can be rendered is the content view's job.
///
/// Entries are immutable once built.
///
/// # Example
///
/// ```
/// use linkdeck::model::ReferenceEntry;
///
/// let entry = ReferenceEntry::new("Docs", "https://example.com/docs").unwrap();
/// assert_eq!(entry.name(), "Docs");
/// assert_eq!(entry.to_string(), "Docs (https://example.com/docs)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReferenceEntry {
    name: String,
    target: String,
}

impl ReferenceEntry {
    /// Creates an entry.
    ///
    /// Fails with [`Error::InvalidArgument`] if `name` is empty.
    pub fn new(name: impl Into<String>, target: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::invalid_argument("name", "must not be empty"));
        }
        Ok(Self {
            name,
            target: target.into(),
        })
    }

    /// Returns the display label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the target exactly as it was given.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Parses the target as a URL.
    ///
    /// Returns `None` when the target is not an absolute URL.
    pub fn url(&self) -> Option<Url> {
        Url::parse(&self.target).ok()
    }
}

impl fmt::Display for ReferenceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_rejected() {
        let err = ReferenceEntry::new("", "https://example.com").unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_malformed_target_passes_through() {
        let entry = ReferenceEntry::new("Broken", "not a url at all").unwrap();
        assert_eq!(entry.target(), "not a url at all");
        assert!(entry.url().is_none());
    }

    #[test]
    fn test_url_parses_valid_target() {
        let entry = ReferenceEntry::new("Docs", "https://example.com/docs").unwrap();
        let url = entry.url().unwrap();
        assert_eq!(url.host_str(), Some("example.com"));
        assert_eq!(url.path(), "/docs");
    }
}

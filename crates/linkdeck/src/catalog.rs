//! Reference catalogs: the configuration a [`ReferenceModel`] is seeded from.
//!
//! A catalog is a TOML or JSON document listing references in display order,
//! plus the model's [`InitialSelection`] policy:
//!
//! ```toml
//! initial_selection = "first-entry"   # or "none"
//!
//! [[reference]]
//! name = "Docs"
//! target = "https://example.com/docs"
//!
//! [[reference]]
//! name = "Blog"
//! target = "https://example.com/blog"
//! ```
//!
//! The JSON form uses the same keys. Catalogs are read-only; nothing writes
//! a model back to disk.
//!
//! # Example
//!
//! ```
//! use linkdeck::catalog::ReferenceCatalog;
//!
//! let catalog = ReferenceCatalog::from_toml_str(r#"
//!     [[reference]]
//!     name = "Docs"
//!     target = "https://example.com/docs"
//! "#).unwrap();
//!
//! let model = catalog.into_model().unwrap();
//! assert_eq!(model.count(), 1);
//! assert_eq!(model.selected_index(), Some(0));
//! ```

use std::path::Path;

use linkdeck_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{InitialSelection, ReferenceModel};

/// One `[[reference]]` item of a catalog.
///
/// Fields are kept as written; validation happens in
/// [`ReferenceCatalog::into_model`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogReference {
    /// Display label.
    pub name: String,
    /// Resource target, usually a URL.
    pub target: String,
}

/// A parsed reference catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceCatalog {
    /// Selection policy of the model built from this catalog.
    #[serde(default)]
    pub initial_selection: InitialSelection,
    /// References in display order.
    #[serde(default, rename = "reference", alias = "references")]
    pub references: Vec<CatalogReference>,
}

impl ReferenceCatalog {
    /// Parses a TOML catalog.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Parses a JSON catalog.
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Reads a catalog file, picking the format from its extension.
    ///
    /// `.toml` and `.json` are accepted (case-insensitive). Anything else
    /// fails with [`Error::UnsupportedFormat`].
    #[tracing::instrument(skip_all, target = "linkdeck::catalog", level = "debug")]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self> = match extension.as_deref() {
            Some("toml") => Self::from_toml_str,
            Some("json") => Self::from_json_str,
            _ => {
                return Err(Error::UnsupportedFormat {
                    path: path.to_path_buf(),
                });
            }
        };

        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let catalog = parse(&content)?;
        tracing::debug!(
            target: targets::CATALOG,
            path = %path.display(),
            references = catalog.references.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Returns the number of references.
    pub fn len(&self) -> usize {
        self.references.len()
    }

    /// Returns `true` if the catalog lists no references.
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    /// Builds a model holding the catalog's references in order.
    ///
    /// Each reference goes through [`ReferenceModel::add_entry_named`], so an
    /// empty name fails with [`Error::InvalidArgument`].
    pub fn into_model(self) -> Result<ReferenceModel> {
        let model = ReferenceModel::with_policy(self.initial_selection);
        for reference in self.references {
            model.add_entry_named(reference.name, reference.target)?;
        }
        Ok(model)
    }
}

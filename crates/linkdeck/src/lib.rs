//! linkdeck: a master-detail list of named web references.
//!
//! A [`ReferenceModel`](model::ReferenceModel) holds an ordered list of
//! entries and the current selection. A
//! [`DetailCoordinator`](model::DetailCoordinator) observes the selection and
//! tells a [`ContentView`](model::ContentView), typically an embedded web
//! view, which target to load. Rendering the list and the content is left to
//! the embedding application.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use linkdeck::prelude::*;
//!
//! struct PrintView;
//!
//! impl ContentView for PrintView {
//!     fn load(&self, target: &str) {
//!         println!("load {target}");
//!     }
//!
//!     fn clear(&self) {
//!         println!("clear");
//!     }
//! }
//!
//! # fn main() -> linkdeck::Result<()> {
//! let model = Arc::new(ReferenceModel::new());
//! model.add_entry_named("Docs", "https://example.com/docs")?;
//! model.add_entry_named("Blog", "https://example.com/blog")?;
//!
//! let coordinator = DetailCoordinator::new(Arc::new(PrintView));
//! coordinator.bind(&model)?;
//!
//! // A list view reports the user's choice:
//! model.set_selected_index(Some(1))?;
//! assert_eq!(coordinator.state().entry().map(|e| e.name()), Some("Blog"));
//! # Ok(())
//! # }
//! ```

pub mod catalog;
mod error;
pub mod model;
pub mod prelude;

pub use error::{Error, Result};

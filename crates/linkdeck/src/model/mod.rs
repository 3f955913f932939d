//! Master-detail model for web references.
//!
//! This module separates the list of references from the component that
//! shows the selected one:
//!
//! - `ReferenceEntry`: A named target, usually a URL
//! - `ReferenceModel`: Ordered entries plus the current selection
//! - `DetailCoordinator`: Turns selection changes into content view instructions
//! - `ContentView`: The rendering collaborator the coordinator drives
//!
//! # Architecture Overview
//!
//! ```text
//! ┌──────────────┐ set_selected_index ┌────────────────┐
//! │ List display │───────────────────>│ ReferenceModel │
//! │  (external)  │<───────────────────│                │
//! └──────────────┘  count / entry_at  └────────────────┘
//!                                             │ selection observer
//!                                             v
//! ┌──────────────┐    load / clear    ┌───────────────────┐
//! │ ContentView  │<───────────────────│ DetailCoordinator │
//! │  (external)  │                    │                   │
//! └──────────────┘                    └───────────────────┘
//! ```

mod content;
mod coordinator;
mod entry;
mod reference_model;

pub use content::ContentView;
pub use coordinator::{DetailCoordinator, DetailState};
pub use entry::ReferenceEntry;
pub use reference_model::{InitialSelection, NO_SELECTION, ReferenceModel};

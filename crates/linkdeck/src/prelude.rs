//! Prelude module for linkdeck.
//!
//! ```ignore
//! use linkdeck::prelude::*;
//! ```

// ============================================================================
// Signal/Slot and Property System
// ============================================================================

pub use linkdeck_core::{ConnectionId, Property, Signal};

// ============================================================================
// Model
// ============================================================================

pub use crate::model::{
    ContentView, DetailCoordinator, DetailState, InitialSelection, NO_SELECTION, ReferenceEntry,
    ReferenceModel,
};

// ============================================================================
// Configuration and Errors
// ============================================================================

pub use crate::catalog::ReferenceCatalog;
pub use crate::{Error, Result};

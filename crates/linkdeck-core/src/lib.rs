//! Core systems for linkdeck.
//!
//! This crate provides the observer primitives the reference model and its
//! coordinator are built on:
//!
//! - **Signal/Slot System**: Type-safe synchronous change notification
//! - **Property System**: Values with change detection
//! - **Logging**: `tracing` targets for filtering by subsystem
//!
//! # Signal/Slot Example
//!
//! ```
//! use linkdeck_core::Signal;
//!
//! let value_changed = Signal::<i32>::new();
//!
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit(42);
//! value_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod property;
pub mod signal;

pub use property::Property;
pub use signal::{ConnectionId, Signal};

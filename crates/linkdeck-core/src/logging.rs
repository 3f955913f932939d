//! Logging facilities for linkdeck.
//!
//! linkdeck uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Filter by subsystem with the names in [`targets`], e.g.
//! `RUST_LOG=linkdeck::coordinator=debug`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "linkdeck_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "linkdeck_core::signal";
    /// Reference model target.
    pub const MODEL: &str = "linkdeck::model";
    /// Detail coordinator target.
    pub const COORDINATOR: &str = "linkdeck::coordinator";
    /// Catalog loading target.
    pub const CATALOG: &str = "linkdeck::catalog";
}

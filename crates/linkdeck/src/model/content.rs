//! The content view a [`DetailCoordinator`](super::DetailCoordinator) drives.

/// Something that can render a reference target, such as an embedded web view.
///
/// Implementations decide whether a target is loadable; targets arrive
/// exactly as they were stored in the model. Report the outcome of a load
/// back through [`DetailCoordinator::load_finished`](super::DetailCoordinator::load_finished)
/// or [`DetailCoordinator::load_failed`](super::DetailCoordinator::load_failed).
///
/// # Example
///
/// ```
/// use linkdeck::model::ContentView;
///
/// struct StdoutView;
///
/// impl ContentView for StdoutView {
///     fn load(&self, target: &str) {
///         println!("loading {target}");
///     }
///
///     fn clear(&self) {
///         println!("blank");
///     }
/// }
/// ```
pub trait ContentView: Send + Sync {
    /// Starts rendering `target`.
    fn load(&self, target: &str);

    /// Resets the view to its empty state.
    fn clear(&self);
}

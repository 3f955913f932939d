//! Keeps a content view in step with a model's selection.
//!
//! [`DetailCoordinator`] is the detail half of a master-detail screen. Once
//! bound to a [`ReferenceModel`], every selection change is turned into a
//! `load` or `clear` instruction for its [`ContentView`].
//!
//! # State
//!
//! ```text
//!            select entry              select other entry
//!   Idle ─────────────────> Loaded(e) ───────────────────> Loaded(e')
//!    ^                          │
//!    └──────────────────────────┘
//!         clear selection
//! ```
//!
//! Independently of the state, the coordinator tracks whether the content
//! view is still busy with the last `load` (the activity indicator).

use std::sync::{Arc, Weak};

use linkdeck_core::logging::targets;
use linkdeck_core::{ConnectionId, Property, Signal};
use parking_lot::Mutex;

use super::content::ContentView;
use super::entry::ReferenceEntry;
use super::reference_model::ReferenceModel;
use crate::error::{Error, Result};

/// What the content view is currently showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailState {
    /// Nothing is selected; the view is cleared.
    #[default]
    Idle,
    /// The view was told to load this entry's target.
    Loaded(ReferenceEntry),
}

impl DetailState {
    /// Returns the loaded entry, if any.
    pub fn entry(&self) -> Option<&ReferenceEntry> {
        match self {
            Self::Idle => None,
            Self::Loaded(entry) => Some(entry),
        }
    }

    /// Returns `true` for [`DetailState::Idle`].
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// A live binding to a model's observer slot.
struct Binding {
    model: Weak<ReferenceModel>,
    connection: ConnectionId,
}

impl Binding {
    fn release(self) {
        if let Some(model) = self.model.upgrade() {
            model.release_selection_observer(self.connection);
        }
    }
}

struct Inner {
    view: Arc<dyn ContentView>,
    binding: Mutex<Option<Binding>>,
    state: Property<DetailState>,
    loading: Property<bool>,
    state_changed: Signal<DetailState>,
    activity_changed: Signal<bool>,
}

impl Inner {
    /// The bound model, if it is alive and its observer slot is still ours.
    fn bound_model(&self) -> Option<Arc<ReferenceModel>> {
        let binding = self.binding.lock();
        let binding = binding.as_ref()?;
        let model = binding.model.upgrade()?;
        model
            .holds_selection_observer(binding.connection)
            .then_some(model)
    }

    fn on_selection_changed(&self, selection: Option<usize>, model: &ReferenceModel) {
        let entry = selection.and_then(|_| model.selected_entry());
        tracing::debug!(target: targets::COORDINATOR, ?selection, "selection changed");
        self.show(entry);
    }

    fn show(&self, entry: Option<ReferenceEntry>) {
        match entry {
            None => {
                self.set_state(DetailState::Idle);
                self.set_loading(false);
                self.view.clear();
            }
            Some(entry) => {
                let target = entry.target().to_owned();
                self.set_state(DetailState::Loaded(entry));
                // Must be up before `load`; views may finish inside the call.
                self.set_loading(true);
                tracing::debug!(target: targets::COORDINATOR, %target, "loading target");
                self.view.load(&target);
            }
        }
    }

    fn set_state(&self, state: DetailState) {
        if self.state.set(state.clone()) {
            self.state_changed.emit(state);
        }
    }

    fn set_loading(&self, loading: bool) {
        if self.loading.set(loading) {
            self.activity_changed.emit(loading);
        }
    }
}

/// Drives a [`ContentView`] from the selection of a [`ReferenceModel`].
///
/// The coordinator holds the model weakly and never mutates it. Dropping the
/// coordinator releases the model's observer slot.
///
/// # Signals
///
/// - `state_changed()`: Emitted when the [`DetailState`] changes.
/// - `activity_changed()`: Emitted when the loading flag flips.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use linkdeck::model::{ContentView, DetailCoordinator, ReferenceModel};
///
/// struct NullView;
/// impl ContentView for NullView {
///     fn load(&self, _target: &str) {}
///     fn clear(&self) {}
/// }
///
/// let model = Arc::new(ReferenceModel::new());
/// model.add_entry_named("Docs", "https://example.com/docs").unwrap();
/// model.add_entry_named("Blog", "https://example.com/blog").unwrap();
///
/// let coordinator = DetailCoordinator::new(Arc::new(NullView));
/// coordinator.bind(&model).unwrap();
///
/// model.set_selected_index(Some(1)).unwrap();
/// assert_eq!(coordinator.caption().as_deref(), Some("https://example.com/blog"));
/// ```
pub struct DetailCoordinator {
    inner: Arc<Inner>,
}

impl DetailCoordinator {
    /// Creates an unbound coordinator that drives `view`.
    pub fn new(view: Arc<dyn ContentView>) -> Self {
        Self {
            inner: Arc::new(Inner {
                view,
                binding: Mutex::new(None),
                state: Property::new(DetailState::Idle),
                loading: Property::new(false),
                state_changed: Signal::new(),
                activity_changed: Signal::new(),
            }),
        }
    }

    /// Registers this coordinator as `model`'s selection observer.
    ///
    /// Binding does not load anything; the view follows the next selection
    /// change or [`on_user_invoked_target`](Self::on_user_invoked_target).
    /// If the coordinator was bound to a different model, that binding is
    /// released once the new one succeeds; the current state and view
    /// content stay as they are until that model's selection changes.
    /// Binding again to a model whose slot this coordinator still holds is a
    /// no-op. Fails with [`Error::ObserverAlreadyBound`] if another observer
    /// holds the slot.
    pub fn bind(&self, model: &Arc<ReferenceModel>) -> Result<()> {
        let mut binding = self.inner.binding.lock();
        let weak_model = Arc::downgrade(model);
        if let Some(existing) = binding.as_ref() {
            if Weak::ptr_eq(&existing.model, &weak_model) {
                if model.holds_selection_observer(existing.connection) {
                    return Ok(());
                }
                // The slot was released from the model side.
                *binding = None;
            }
        }

        let weak_inner = Arc::downgrade(&self.inner);
        let observed = weak_model.clone();
        let connection = model.set_selection_observer(move |selection| {
            if let (Some(inner), Some(model)) = (weak_inner.upgrade(), observed.upgrade()) {
                inner.on_selection_changed(selection, &model);
            }
        })?;

        if let Some(previous) = binding.replace(Binding {
            model: weak_model,
            connection,
        }) {
            previous.release();
        }
        tracing::debug!(target: targets::COORDINATOR, "bound to model");
        Ok(())
    }

    /// Releases the model's observer slot.
    ///
    /// Returns `true` if the coordinator was bound. The current state and
    /// view content are left as they are.
    pub fn unbind(&self) -> bool {
        let previous = self.inner.binding.lock().take();
        match previous {
            Some(binding) => {
                binding.release();
                tracing::debug!(target: targets::COORDINATOR, "unbound from model");
                true
            }
            None => false,
        }
    }

    /// Returns `true` if the coordinator is bound to a live model and still
    /// holds its observer slot.
    pub fn is_bound(&self) -> bool {
        self.inner.bound_model().is_some()
    }

    /// Re-reads the model's selection and re-issues the load (or clear).
    ///
    /// This backs a "open again" affordance in the detail view, e.g. after a
    /// failed load. Fails with [`Error::Unbound`] unless
    /// [`is_bound`](Self::is_bound).
    pub fn on_user_invoked_target(&self) -> Result<()> {
        let model = self.inner.bound_model().ok_or(Error::Unbound)?;
        let entry = model.selected_entry();
        tracing::debug!(
            target: targets::COORDINATOR,
            reload = entry.is_some(),
            "user invoked target"
        );
        self.inner.show(entry);
        Ok(())
    }

    /// Returns the current state.
    pub fn state(&self) -> DetailState {
        self.inner.state.get()
    }

    /// Returns the label for the detail view's target button.
    pub fn caption(&self) -> Option<String> {
        self.inner
            .state
            .with(|state| state.entry().map(|entry| entry.target().to_owned()))
    }

    /// Returns `true` while the content view is working on the last load.
    pub fn is_loading(&self) -> bool {
        self.inner.loading.get()
    }

    /// Called by the content view when the last load completed.
    pub fn load_finished(&self) {
        tracing::debug!(target: targets::COORDINATOR, "load finished");
        self.inner.set_loading(false);
    }

    /// Called by the content view when the last load could not complete.
    pub fn load_failed(&self, reason: &str) {
        tracing::warn!(
            target: targets::COORDINATOR,
            %reason,
            caption = ?self.caption(),
            "load failed"
        );
        self.inner.set_loading(false);
    }

    /// Emitted when the [`DetailState`] changes.
    pub fn state_changed(&self) -> &Signal<DetailState> {
        &self.inner.state_changed
    }

    /// Emitted when the loading flag flips. Args: new loading flag.
    pub fn activity_changed(&self) -> &Signal<bool> {
        &self.inner.activity_changed
    }
}

impl Drop for DetailCoordinator {
    fn drop(&mut self) {
        self.unbind();
    }
}

impl std::fmt::Debug for DetailCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetailCoordinator")
            .field("state", &self.state())
            .field("loading", &self.is_loading())
            .field("bound", &self.is_bound())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Load(String),
        Clear,
    }

    #[derive(Default)]
    struct RecordingView {
        calls: Mutex<Vec<Call>>,
    }

    impl RecordingView {
        fn calls(&self) -> Vec<Call> {
            self.calls.lock().clone()
        }
    }

    impl ContentView for RecordingView {
        fn load(&self, target: &str) {
            self.calls.lock().push(Call::Load(target.to_string()));
        }

        fn clear(&self) {
            self.calls.lock().push(Call::Clear);
        }
    }

    fn two_entry_model() -> Arc<ReferenceModel> {
        let model = Arc::new(ReferenceModel::new());
        model.add_entry_named("Docs", "https://example.com/docs").unwrap();
        model.add_entry_named("Blog", "https://example.com/blog").unwrap();
        model
    }

    fn bound() -> (Arc<ReferenceModel>, Arc<RecordingView>, DetailCoordinator) {
        let model = two_entry_model();
        let view = Arc::new(RecordingView::default());
        let coordinator = DetailCoordinator::new(view.clone());
        coordinator.bind(&model).unwrap();
        (model, view, coordinator)
    }

    #[test]
    fn test_bind_registers_without_loading() {
        let (model, view, coordinator) = bound();
        assert!(model.has_selection_observer());
        assert!(coordinator.is_bound());
        assert!(view.calls().is_empty());
        assert!(coordinator.state().is_idle());
    }

    #[test]
    fn test_selection_loads_exactly_once() {
        let (model, view, coordinator) = bound();

        model.set_selected_index(Some(1)).unwrap();

        assert_eq!(view.calls(), vec![Call::Load("https://example.com/blog".into())]);
        assert_eq!(coordinator.state().entry().unwrap().name(), "Blog");
        assert!(coordinator.is_loading());
    }

    #[test]
    fn test_state_machine_transitions() {
        let (model, view, coordinator) = bound();
        let states = Arc::new(Mutex::new(Vec::new()));
        let recv = states.clone();
        coordinator.state_changed().connect(move |state: &DetailState| {
            recv.lock().push(state.entry().map(|e| e.name().to_string()));
        });

        model.set_selected_index(Some(0)).unwrap();
        model.set_selected_index(Some(1)).unwrap();
        model.set_selected_index(None).unwrap();

        assert_eq!(
            *states.lock(),
            vec![Some("Docs".to_string()), Some("Blog".to_string()), None]
        );
        assert_eq!(view.calls().last(), Some(&Call::Clear));
        assert!(coordinator.state().is_idle());
        assert_eq!(coordinator.caption(), None);
        assert!(!coordinator.is_loading());
    }

    #[test]
    fn test_reselecting_same_entry_reloads() {
        let (model, view, coordinator) = bound();
        let changes = Arc::new(Mutex::new(0));
        let recv = changes.clone();
        coordinator.state_changed().connect(move |_| *recv.lock() += 1);

        model.set_selected_index(Some(0)).unwrap();
        model.set_selected_index(Some(0)).unwrap();

        assert_eq!(view.calls().len(), 2);
        assert_eq!(*changes.lock(), 1);
    }

    #[test]
    fn test_user_invoked_target_reissues_load() {
        let (model, view, coordinator) = bound();
        model.set_selected_index(Some(1)).unwrap();
        coordinator.load_failed("offline");
        assert!(!coordinator.is_loading());

        coordinator.on_user_invoked_target().unwrap();

        let expected = Call::Load("https://example.com/blog".into());
        assert_eq!(view.calls(), vec![expected.clone(), expected]);
        assert!(coordinator.is_loading());
    }

    #[test]
    fn test_user_invoked_target_without_selection_clears() {
        let (model, view, coordinator) = bound();
        model.set_selected_index(None).unwrap();

        coordinator.on_user_invoked_target().unwrap();
        assert_eq!(view.calls(), vec![Call::Clear, Call::Clear]);
    }

    #[test]
    fn test_user_invoked_target_requires_binding() {
        let view = Arc::new(RecordingView::default());
        let coordinator = DetailCoordinator::new(view.clone());
        assert!(matches!(coordinator.on_user_invoked_target(), Err(Error::Unbound)));

        let model = two_entry_model();
        coordinator.bind(&model).unwrap();
        drop(model);
        assert!(!coordinator.is_bound());
        assert!(matches!(coordinator.on_user_invoked_target(), Err(Error::Unbound)));
        assert!(view.calls().is_empty());
    }

    #[test]
    fn test_activity_signal() {
        let (model, _view, coordinator) = bound();
        let flags = Arc::new(Mutex::new(Vec::new()));
        let recv = flags.clone();
        coordinator.activity_changed().connect(move |&loading| recv.lock().push(loading));

        model.set_selected_index(Some(0)).unwrap();
        coordinator.load_finished();
        coordinator.load_finished();
        model.set_selected_index(Some(1)).unwrap();
        model.set_selected_index(None).unwrap();

        assert_eq!(*flags.lock(), vec![true, false, true, false]);
    }

    #[test]
    fn test_second_coordinator_cannot_bind() {
        let (model, _view, _coordinator) = bound();
        let other = DetailCoordinator::new(Arc::new(RecordingView::default()));

        assert!(matches!(other.bind(&model), Err(Error::ObserverAlreadyBound)));
        assert!(!other.is_bound());
    }

    #[test]
    fn test_rebind_moves_to_new_model() {
        let (first, view, coordinator) = bound();
        let second = two_entry_model();

        coordinator.bind(&first).unwrap();
        coordinator.bind(&second).unwrap();
        assert!(!first.has_selection_observer());
        assert!(second.has_selection_observer());

        first.set_selected_index(Some(1)).unwrap();
        assert!(view.calls().is_empty());
        second.set_selected_index(Some(1)).unwrap();
        assert_eq!(view.calls().len(), 1);
    }

    #[test]
    fn test_rebind_after_slot_cleared_by_model() {
        let (model, view, coordinator) = bound();

        assert!(model.clear_selection_observer());
        assert!(!coordinator.is_bound());
        assert!(matches!(coordinator.on_user_invoked_target(), Err(Error::Unbound)));

        coordinator.bind(&model).unwrap();
        assert!(coordinator.is_bound());
        assert!(model.has_selection_observer());

        model.set_selected_index(Some(1)).unwrap();
        assert_eq!(view.calls(), vec![Call::Load("https://example.com/blog".into())]);
    }

    #[test]
    fn test_rebind_fails_once_slot_is_taken() {
        let (model, view, coordinator) = bound();
        model.clear_selection_observer();

        let other_view = Arc::new(RecordingView::default());
        let other = DetailCoordinator::new(other_view.clone());
        other.bind(&model).unwrap();

        assert!(matches!(coordinator.bind(&model), Err(Error::ObserverAlreadyBound)));
        assert!(!coordinator.is_bound());
        assert!(other.is_bound());

        model.set_selected_index(Some(0)).unwrap();
        assert!(view.calls().is_empty());
        assert_eq!(other_view.calls().len(), 1);

        // Dropping the former owner leaves the new owner's slot alone.
        drop(coordinator);
        assert!(other.is_bound());
    }

    #[test]
    fn test_rebind_keeps_shown_entry() {
        let (first, view, coordinator) = bound();
        first.set_selected_index(Some(1)).unwrap();

        let second = two_entry_model();
        coordinator.bind(&second).unwrap();

        assert_eq!(coordinator.caption().as_deref(), Some("https://example.com/blog"));
        assert_eq!(view.calls().len(), 1);

        second.set_selected_index(Some(0)).unwrap();
        assert_eq!(coordinator.caption().as_deref(), Some("https://example.com/docs"));
    }

    #[test]
    fn test_unbind_and_drop_release_slot() {
        let (model, view, coordinator) = bound();
        assert!(coordinator.unbind());
        assert!(!coordinator.unbind());
        assert!(!model.has_selection_observer());

        model.set_selected_index(Some(1)).unwrap();
        assert!(view.calls().is_empty());

        coordinator.bind(&model).unwrap();
        drop(coordinator);
        assert!(!model.has_selection_observer());
    }

    #[test]
    fn test_malformed_target_passes_through() {
        let model = Arc::new(ReferenceModel::new());
        model.add_entry_named("Broken", "::not a url::").unwrap();
        let view = Arc::new(RecordingView::default());
        let coordinator = DetailCoordinator::new(view.clone());
        coordinator.bind(&model).unwrap();

        model.set_selected_index(Some(0)).unwrap();
        assert_eq!(view.calls(), vec![Call::Load("::not a url::".into())]);
    }
}

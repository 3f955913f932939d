//! Ordered list of web references with a single current selection.
//!
//! [`ReferenceModel`] is what a list display reads to render its rows and
//! what it writes to when the user picks a row. Selection changes are pushed
//! to one bound observer, normally a [`DetailCoordinator`](super::DetailCoordinator).

use std::ops::Deref;

use linkdeck_core::logging::targets;
use linkdeck_core::{ConnectionId, Signal};
use parking_lot::{Mutex, RwLock, RwLockReadGuard};
use serde::{Deserialize, Serialize};

use super::entry::ReferenceEntry;
use crate::error::{Error, Result};

/// The "no selection" value on the signed-row surface
/// ([`ReferenceModel::select_row`], [`ReferenceModel::selected_row`]).
pub const NO_SELECTION: i64 = -1;

/// What happens to the selection when the first entry lands in an empty model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InitialSelection {
    /// The first entry becomes selected (default).
    #[default]
    FirstEntry,
    /// The selection stays unset until someone selects a row.
    #[serde(rename = "none")]
    Unselected,
}

#[derive(Debug, Default)]
struct ModelState {
    entries: Vec<ReferenceEntry>,
    selected: Option<usize>,
}

/// An ordered collection of [`ReferenceEntry`] values and a selection index.
///
/// Insertion order is preserved and duplicate names are allowed. Entries
/// cannot be changed or removed once added.
///
/// The selection is either `None` or a valid index; it never points past the
/// end of the list.
///
/// # Signals
///
/// - `entry_added`: Emitted after an entry is appended, with its row.
/// - The selection-changed notification goes to the single observer
///   registered with [`set_selection_observer`](Self::set_selection_observer).
///
/// # Example
///
/// ```
/// use linkdeck::model::ReferenceModel;
///
/// let model = ReferenceModel::new();
/// model.add_entry_named("Docs", "https://example.com/docs").unwrap();
/// model.add_entry_named("Blog", "https://example.com/blog").unwrap();
///
/// assert_eq!(model.count(), 2);
/// assert_eq!(model.selected_index(), Some(0));
///
/// model.set_selected_index(Some(1)).unwrap();
/// assert_eq!(model.selected_entry().unwrap().name(), "Blog");
/// ```
pub struct ReferenceModel {
    state: RwLock<ModelState>,
    policy: InitialSelection,
    selection_changed: Signal<Option<usize>>,
    observer: Mutex<Option<ConnectionId>>,

    /// Emitted after an entry is appended. Args: row of the new entry.
    pub entry_added: Signal<usize>,
}

impl Default for ReferenceModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferenceModel {
    /// Creates an empty model that auto-selects its first entry.
    pub fn new() -> Self {
        Self::with_policy(InitialSelection::default())
    }

    /// Creates an empty model with the given initial selection policy.
    pub fn with_policy(policy: InitialSelection) -> Self {
        Self {
            state: RwLock::new(ModelState::default()),
            policy,
            selection_changed: Signal::new(),
            observer: Mutex::new(None),
            entry_added: Signal::new(),
        }
    }

    /// Creates a model holding `entries`.
    ///
    /// With [`InitialSelection::FirstEntry`] and at least one entry, the
    /// selection starts at `0`; otherwise it starts unset.
    pub fn with_entries(entries: Vec<ReferenceEntry>, policy: InitialSelection) -> Self {
        let selected = match policy {
            InitialSelection::FirstEntry if !entries.is_empty() => Some(0),
            _ => None,
        };
        Self {
            state: RwLock::new(ModelState { entries, selected }),
            ..Self::with_policy(policy)
        }
    }

    /// Returns the initial selection policy.
    pub fn initial_selection(&self) -> InitialSelection {
        self.policy
    }

    // =========================================================================
    // Entries
    // =========================================================================

    /// Returns the number of entries.
    pub fn count(&self) -> usize {
        self.state.read().entries.len()
    }

    /// Returns `true` if the model has no entries.
    pub fn is_empty(&self) -> bool {
        self.state.read().entries.is_empty()
    }

    /// Returns the entry at `index`.
    ///
    /// Fails with [`Error::OutOfRange`] if `index >= count()`.
    pub fn entry_at(&self, index: usize) -> Result<ReferenceEntry> {
        let state = self.state.read();
        state
            .entries
            .get(index)
            .cloned()
            .ok_or_else(|| Error::out_of_range(index, state.entries.len()))
    }

    /// Returns the entry at a signed `row`.
    ///
    /// Fails with [`Error::OutOfRange`] if `row` is negative or `>= count()`.
    pub fn entry_at_row(&self, row: i64) -> Result<ReferenceEntry> {
        let index = usize::try_from(row).map_err(|_| Error::out_of_range(row, self.count()))?;
        self.entry_at(index)
    }

    /// Returns read access to all entries in insertion order.
    ///
    /// The model cannot be written while the returned guard is alive.
    pub fn entries(&self) -> impl Deref<Target = [ReferenceEntry]> + '_ {
        RwLockReadGuard::map(self.state.read(), |state| state.entries.as_slice())
    }

    /// Appends an entry to the end of the list.
    ///
    /// If the model was empty and the policy is [`InitialSelection::FirstEntry`],
    /// the new entry becomes selected. The selection observer is not notified.
    pub fn add_entry(&self, entry: ReferenceEntry) {
        let (row, auto_selected) = {
            let mut state = self.state.write();
            state.entries.push(entry);
            let row = state.entries.len() - 1;
            let auto_selected = row == 0
                && state.selected.is_none()
                && self.policy == InitialSelection::FirstEntry;
            if auto_selected {
                state.selected = Some(0);
            }
            (row, auto_selected)
        };

        tracing::debug!(target: targets::MODEL, row, auto_selected, "entry added");
        self.entry_added.emit(row);
    }

    /// Builds an entry from `name` and `target` and appends it.
    ///
    /// Fails with [`Error::InvalidArgument`] if `name` is empty, leaving the
    /// model untouched.
    pub fn add_entry_named(
        &self,
        name: impl Into<String>,
        target: impl Into<String>,
    ) -> Result<()> {
        let entry = ReferenceEntry::new(name, target).inspect_err(|err| {
            tracing::warn!(target: targets::MODEL, %err, "rejected entry");
        })?;
        self.add_entry(entry);
        Ok(())
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Returns the selected index, or `None` when nothing is selected.
    pub fn selected_index(&self) -> Option<usize> {
        self.state.read().selected
    }

    /// Returns the selected row, or [`NO_SELECTION`].
    pub fn selected_row(&self) -> i64 {
        // Selected indices are below `Vec::len`, which never exceeds `isize::MAX`.
        self.selected_index().map_or(NO_SELECTION, |index| index as i64)
    }

    /// Returns the selected entry, or `None` when nothing is selected.
    pub fn selected_entry(&self) -> Option<ReferenceEntry> {
        let state = self.state.read();
        state.selected.and_then(|index| state.entries.get(index).cloned())
    }

    /// Sets the selection and notifies the selection observer.
    ///
    /// `None` clears the selection and always succeeds. `Some(index)` fails
    /// with [`Error::OutOfRange`] if `index >= count()`; on failure the
    /// selection is unchanged and nobody is notified.
    ///
    /// The observer is called synchronously before this returns, also when
    /// the new value equals the old one.
    pub fn set_selected_index(&self, index: Option<usize>) -> Result<()> {
        {
            let mut state = self.state.write();
            if let Some(index) = index {
                let count = state.entries.len();
                if index >= count {
                    tracing::warn!(target: targets::MODEL, index, count, "selection out of range");
                    return Err(Error::out_of_range(index, count));
                }
            }
            state.selected = index;
        }

        tracing::debug!(target: targets::MODEL, selected = ?index, "selection changed");
        self.selection_changed.emit(index);
        Ok(())
    }

    /// Sets the selection from a signed `row`.
    ///
    /// [`NO_SELECTION`] clears the selection; any other negative row fails
    /// with [`Error::OutOfRange`].
    pub fn select_row(&self, row: i64) -> Result<()> {
        if row == NO_SELECTION {
            return self.set_selected_index(None);
        }
        let index = usize::try_from(row).map_err(|_| Error::out_of_range(row, self.count()))?;
        self.set_selected_index(Some(index))
    }

    // =========================================================================
    // Selection observer
    // =========================================================================

    /// Registers the selection observer.
    ///
    /// A model has one observer slot. Fails with
    /// [`Error::ObserverAlreadyBound`] if it is taken.
    pub fn set_selection_observer<F>(&self, observer: F) -> Result<ConnectionId>
    where
        F: Fn(Option<usize>) + Send + Sync + 'static,
    {
        let mut slot = self.observer.lock();
        if slot.is_some() {
            return Err(Error::ObserverAlreadyBound);
        }
        let id = self
            .selection_changed
            .connect(move |selection| observer(*selection));
        *slot = Some(id);
        Ok(id)
    }

    /// Releases the observer slot if it is held by `id`.
    ///
    /// Returns `true` if the observer was removed.
    pub fn release_selection_observer(&self, id: ConnectionId) -> bool {
        let mut slot = self.observer.lock();
        if *slot != Some(id) {
            return false;
        }
        *slot = None;
        self.selection_changed.disconnect(id)
    }

    /// Removes whichever observer is registered.
    ///
    /// Returns `true` if there was one.
    pub fn clear_selection_observer(&self) -> bool {
        match self.observer.lock().take() {
            Some(id) => self.selection_changed.disconnect(id),
            None => false,
        }
    }

    /// Returns `true` if a selection observer is registered.
    pub fn has_selection_observer(&self) -> bool {
        self.observer.lock().is_some()
    }

    /// Returns `true` if the observer slot is held by `id`.
    pub fn holds_selection_observer(&self, id: ConnectionId) -> bool {
        *self.observer.lock() == Some(id)
    }
}

impl std::fmt::Debug for ReferenceModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("ReferenceModel")
            .field("entries", &state.entries)
            .field("selected", &state.selected)
            .field("policy", &self.policy)
            .finish()
    }
}

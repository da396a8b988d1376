//! Filter state store

use std::fmt;

use tracing::{debug, trace};

use crate::filters::{FilterSelection, summary::ActiveFilterEntry};

/// Owner of the current [`FilterSelection`].
///
/// Presentation code reads the selection, derives its summary and dispatches removal intents
/// back through [`FilterStore::set_selection`].
pub trait FilterStore {
    /// Current selection.
    fn selection(&self) -> &FilterSelection;

    /// Replace the selection with `selection`.
    fn set_selection(&mut self, selection: FilterSelection);
}

/// Receives the selection after every change made through a [`MemoryFilterStore`].
pub trait FilterObserver {
    /// Called once per change with the complete new selection.
    fn on_selection_change(&mut self, selection: &FilterSelection);
}

impl<F> FilterObserver for F
where
    F: FnMut(&FilterSelection),
{
    fn on_selection_change(&mut self, selection: &FilterSelection) {
        self(selection);
    }
}

/// In-process filter store that notifies subscribers when the selection changes.
#[derive(Default)]
pub struct MemoryFilterStore {
    selection: FilterSelection,
    observers: Vec<Box<dyn FilterObserver>>,
}

impl fmt::Debug for MemoryFilterStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryFilterStore")
            .field("selection", &self.selection)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl MemoryFilterStore {
    /// Create a store holding `selection`.
    pub fn new(selection: FilterSelection) -> Self {
        Self {
            selection,
            observers: Vec::new(),
        }
    }

    /// Register an observer for subsequent changes.
    pub fn subscribe(&mut self, observer: impl FilterObserver + 'static) {
        self.observers.push(Box::new(observer));
    }
}

impl FilterStore for MemoryFilterStore {
    fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    fn set_selection(&mut self, selection: FilterSelection) {
        if selection == self.selection {
            trace!("filter selection unchanged");
            return;
        }

        self.selection = selection;

        debug!(
            cleared = self.selection.is_cleared(),
            observers = self.observers.len(),
            "filter selection replaced"
        );

        for observer in &mut self.observers {
            observer.on_selection_change(&self.selection);
        }
    }
}

/// Remove one active filter from the store's selection.
pub fn remove_active<S: FilterStore + ?Sized>(store: &mut S, entry: &ActiveFilterEntry) {
    let next = store.selection().remove(entry);
    store.set_selection(next);
}

/// Reset the store's selection in a single update.
pub fn clear_filters<S: FilterStore + ?Sized>(store: &mut S) {
    let next = store.selection().clear_all();
    store.set_selection(next);
}

//! Owned-state container that applies table actions and fans events out to subscribers.

use std::sync::Arc;

use crate::model::{ColumnDef, Record, TableOptions, TableRow};
use crate::reducer::{reduce_table, TableAction, TableError, TableEvent, TableState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Handle returned by [`TableStore::subscribe`].
pub struct SubscriptionId(u64);

type Listener<R> = Box<dyn FnMut(&TableEvent<R>, &TableState<R>)>;

/// Table state, column definitions, and event listeners for one table instance.
///
/// Dispatch applies the action first and then hands every produced event, in order, to each
/// listener together with the updated state.
pub struct TableStore<R = Record> {
    state: TableState<R>,
    columns: Vec<ColumnDef<R>>,
    listeners: Vec<(SubscriptionId, Listener<R>)>,
    next_id: u64,
}

impl<R: TableRow> TableStore<R> {
    /// Creates a store over `rows`.
    pub fn new(rows: Vec<R>, columns: Vec<ColumnDef<R>>, options: TableOptions) -> Self {
        Self {
            state: TableState::new(rows, options),
            columns,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Current row snapshot.
    pub fn snapshot(&self) -> Arc<Vec<R>> {
        self.state.rows().clone()
    }

    /// Full table state.
    pub fn state(&self) -> &TableState<R> {
        &self.state
    }

    /// Caller column definitions.
    pub fn columns(&self) -> &[ColumnDef<R>] {
        &self.columns
    }

    /// Replaces the column definitions.
    pub fn set_columns(&mut self, columns: Vec<ColumnDef<R>>) {
        self.columns = columns;
    }

    /// Applies `action` and notifies listeners of the resulting events.
    ///
    /// # Errors
    ///
    /// Propagates [`TableError`] from the reducer; listeners are not called in that case.
    pub fn dispatch(&mut self, action: TableAction<R>) -> Result<Vec<TableEvent<R>>, TableError> {
        let events = reduce_table(&mut self.state, &self.columns, action)?;
        for event in &events {
            for (_, listener) in self.listeners.iter_mut() {
                listener(event, &self.state);
            }
        }
        Ok(events)
    }

    /// Registers a listener for every future event.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&TableEvent<R>, &TableState<R>) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }
}

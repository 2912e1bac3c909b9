//! The generic registry — keyed entries with order-sorted iteration,
//! protect/ban guards, and synchronous change notification.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use lattice_core::{AppError, AppResult};

use crate::history::{HistoryRecord, RegistryAction, RetentionMode};

/// One entry in a [`Registry`].
#[derive(Debug, Clone)]
pub struct RegistryEntry<T> {
    /// Unique key for this entry.
    pub id: String,
    /// The stored value.
    pub value: T,
    /// Sort order; lower values list first.
    pub order: i32,
    /// Whether the entry is immune to removal and overwrite.
    pub protected: bool,
    /// Insertion sequence, the tie-break for equal orders.
    seq: u64,
}

/// Handle returned by [`Registry::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type ChangeCallback<T> = Box<dyn Fn(&Registry<T>) + Send + Sync>;

struct Subscriber<T> {
    id: SubscriberId,
    callback: ChangeCallback<T>,
}

/// Generic, order-sorted, keyed collection of entries.
///
/// Mutations are synchronous; subscribers are notified within the same call
/// stack, after the mutation has been applied. The `&mut self` mutation API
/// makes re-entrant mutation during notification unrepresentable. Share a
/// registry across subsystems by wrapping it in a lock, as
/// `lattice-plugin`'s plugin registry does.
pub struct Registry<T> {
    label: String,
    mode: RetentionMode,
    entries: HashMap<String, RegistryEntry<T>>,
    banned: HashSet<String>,
    history: Vec<HistoryRecord>,
    subscribers: Vec<Subscriber<T>>,
    next_seq: u64,
    next_subscriber: u64,
}

impl<T> Registry<T> {
    /// Creates an empty registry.
    ///
    /// The label identifies the registry in log output only.
    pub fn new(label: impl Into<String>, mode: RetentionMode) -> Self {
        Self {
            label: label.into(),
            mode,
            entries: HashMap::new(),
            banned: HashSet::new(),
            history: Vec::new(),
            subscribers: Vec::new(),
            next_seq: 0,
            next_subscriber: 0,
        }
    }

    /// Returns the registry's label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the retention mode.
    pub fn mode(&self) -> RetentionMode {
        self.mode
    }

    /// Inserts or overwrites the entry at `id`.
    ///
    /// Overwriting keeps the entry's original insertion position for
    /// equal-order tie-breaks. Fails if `id` is banned or the existing entry
    /// is protected.
    pub fn register(&mut self, id: impl Into<String>, value: T, order: i32) -> AppResult<()> {
        let id = id.into();

        if self.banned.contains(&id) {
            return Err(AppError::banned(format!(
                "'{}' is banned from registry '{}'",
                id, self.label
            )));
        }

        let seq = match self.entries.get(&id) {
            Some(existing) if existing.protected => {
                return Err(AppError::protected(format!(
                    "'{}' is protected in registry '{}'",
                    id, self.label
                )));
            }
            Some(existing) => existing.seq,
            None => {
                let seq = self.next_seq;
                self.next_seq += 1;
                seq
            }
        };

        debug!(registry = %self.label, id = %id, order, "Entry registered");

        self.entries.insert(
            id.clone(),
            RegistryEntry {
                id: id.clone(),
                value,
                order,
                protected: false,
                seq,
            },
        );

        self.record(RegistryAction::Register, &id);
        self.notify();
        Ok(())
    }

    /// Removes the entry at `id`.
    ///
    /// Unknown ids are a no-op, not an error. Fails if the entry is
    /// protected.
    pub fn unregister(&mut self, id: &str) -> AppResult<()> {
        match self.entries.get(id) {
            None => return Ok(()),
            Some(entry) if entry.protected => {
                return Err(AppError::protected(format!(
                    "'{}' is protected in registry '{}'",
                    id, self.label
                )));
            }
            Some(_) => {}
        }

        self.entries.remove(id);
        debug!(registry = %self.label, id = %id, "Entry unregistered");

        self.record(RegistryAction::Unregister, id);
        self.notify();
        Ok(())
    }

    /// Marks an existing entry as immune to removal and overwrite.
    pub fn protect(&mut self, id: &str) -> AppResult<()> {
        let label = self.label.clone();
        let entry = self.entries.get_mut(id).ok_or_else(|| {
            AppError::not_found(format!("'{}' not found in registry '{}'", id, label))
        })?;
        entry.protected = true;

        self.record(RegistryAction::Protect, id);
        self.notify();
        Ok(())
    }

    /// Lifts removal/overwrite immunity from an existing entry.
    pub fn unprotect(&mut self, id: &str) -> AppResult<()> {
        let label = self.label.clone();
        let entry = self.entries.get_mut(id).ok_or_else(|| {
            AppError::not_found(format!("'{}' not found in registry '{}'", id, label))
        })?;
        entry.protected = false;

        self.record(RegistryAction::Unprotect, id);
        self.notify();
        Ok(())
    }

    /// Bans `id` from any future registration.
    ///
    /// Distinct from [`protect`](Self::protect), which guards an existing
    /// live entry: a banned id never holds a live entry, so a currently
    /// registered unprotected entry is evicted. Fails if the live entry is
    /// protected; banning an already banned id is a no-op.
    pub fn ban(&mut self, id: &str) -> AppResult<()> {
        if self.banned.contains(id) {
            return Ok(());
        }

        if let Some(entry) = self.entries.get(id) {
            if entry.protected {
                return Err(AppError::protected(format!(
                    "'{}' is protected in registry '{}'",
                    id, self.label
                )));
            }
            self.entries.remove(id);
        }

        self.banned.insert(id.to_string());
        debug!(registry = %self.label, id = %id, "Id banned");

        self.record(RegistryAction::Ban, id);
        self.notify();
        Ok(())
    }

    /// Returns whether `id` is banned.
    pub fn is_banned(&self, id: &str) -> bool {
        self.banned.contains(id)
    }

    /// Returns whether the entry at `id` exists and is protected.
    pub fn is_protected(&self, id: &str) -> bool {
        self.entries.get(id).map(|e| e.protected).unwrap_or(false)
    }

    /// Gets the entry at `id`.
    pub fn get(&self, id: &str) -> Option<&RegistryEntry<T>> {
        self.entries.get(id)
    }

    /// Returns all entries sorted ascending by order, ties broken by
    /// insertion sequence.
    pub fn list(&self) -> Vec<&RegistryEntry<T>> {
        let mut entries: Vec<&RegistryEntry<T>> = self.entries.values().collect();
        entries.sort_by_key(|e| (e.order, e.seq));
        entries
    }

    /// Returns the number of live entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the registry holds no live entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Subscribes to change notifications.
    ///
    /// The callback is invoked synchronously with a reference to the registry
    /// after every mutating call.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriberId
    where
        F: Fn(&Registry<T>) + Send + Sync + 'static,
    {
        let id = SubscriberId(self.next_subscriber);
        self.next_subscriber += 1;
        self.subscribers.push(Subscriber {
            id,
            callback: Box::new(callback),
        });
        id
    }

    /// Removes a subscription. Returns whether it existed.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|s| s.id != id);
        self.subscribers.len() != before
    }

    /// Returns the audit log. Always empty in Clean mode.
    pub fn history(&self) -> &[HistoryRecord] {
        &self.history
    }

    fn record(&mut self, action: RegistryAction, id: &str) {
        if self.mode == RetentionMode::History {
            self.history.push(HistoryRecord::new(action, id));
        }
    }

    fn notify(&self) {
        for subscriber in &self.subscribers {
            (subscriber.callback)(self);
        }
    }
}

impl<T> std::fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("label", &self.label)
            .field("mode", &self.mode)
            .field("entries", &self.entries.len())
            .field("banned", &self.banned.len())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

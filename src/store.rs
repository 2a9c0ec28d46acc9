use serde::Serialize;

use crate::error::AdminError;

/// A flat record managed by a [`Collection`]. Ids are strings, assigned at
/// creation time and stable for the record's lifetime.
pub trait Record: Clone {
    fn id(&self) -> &str;

    /// Protected records (default site, home page) are exempt from deletion.
    fn is_protected(&self) -> bool {
        false
    }

    /// Reason reported when a delete on a protected record is rejected.
    fn protected_reason(&self) -> &'static str {
        "record is protected"
    }
}

/// Records carrying a visibility flag, independent of display order.
pub trait Activatable: Record {
    fn is_active(&self) -> bool;
    fn set_active(&mut self, active: bool);
}

/// Records ranked by `display_order`. Only relative order matters; ranks
/// need not be contiguous.
pub trait Orderable: Record {
    fn display_order(&self) -> i64;
    fn set_display_order(&mut self, order: i64);
}

/// Ordered in-memory list of one entity type, the source of truth for a
/// management screen. Every mutation rebuilds the backing list as a new
/// value and bumps `version`, so observers detect change by version
/// comparison rather than by diffing records.
#[derive(Debug, Clone)]
pub struct Collection<T: Record> {
    records: Vec<T>,
    version: u64,
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Collection::new()
    }
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Collection { records: Vec::new(), version: 0 }
    }

    pub fn from_records(records: Vec<T>) -> Self {
        Collection { records, version: 0 }
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    fn commit(&mut self, next: Vec<T>) {
        self.records = next;
        self.version += 1;
    }

    /// Append a record. The id must not already be present.
    pub fn add(&mut self, record: T) -> Result<(), AdminError> {
        if self.contains(record.id()) {
            return Err(AdminError::validation(
                "id",
                &format!("id '{}' already exists", record.id()),
            ));
        }
        let mut next = self.records.clone();
        next.push(record);
        self.commit(next);
        Ok(())
    }

    /// Replace the record with the given id wholesale, keeping its position.
    pub fn replace(&mut self, id: &str, record: T) -> Result<(), AdminError> {
        let idx = self.index_of(id).ok_or_else(|| AdminError::not_found(id))?;
        let mut next = self.records.clone();
        next[idx] = record;
        self.commit(next);
        Ok(())
    }

    /// Patch one record in place via closure (replace-by-id semantics; the
    /// closure sees a copy and the whole list is republished).
    pub fn update_with(&mut self, id: &str, patch: impl FnOnce(&mut T)) -> Result<(), AdminError> {
        let idx = self.index_of(id).ok_or_else(|| AdminError::not_found(id))?;
        let mut next = self.records.clone();
        patch(&mut next[idx]);
        self.commit(next);
        Ok(())
    }

    /// Remove by id, returning the removed record. Rejected for protected
    /// records; unknown ids are a no-op with a not-found error.
    pub fn remove(&mut self, id: &str) -> Result<T, AdminError> {
        let idx = self.index_of(id).ok_or_else(|| AdminError::not_found(id))?;
        if self.records[idx].is_protected() {
            let reason = self.records[idx].protected_reason();
            return Err(AdminError::protected(id, reason));
        }
        let mut next = self.records.clone();
        let removed = next.remove(idx);
        self.commit(next);
        Ok(removed)
    }

    /// Replace the whole list.
    pub fn set_all(&mut self, records: Vec<T>) {
        self.commit(records);
    }
}

impl<T: Record + Serialize> Collection<T> {
    /// JSON snapshot of the records, for export or persistence handoff.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.records)
    }
}

impl<T: Activatable> Collection<T> {
    /// Flip one record's active flag. Returns the new state.
    pub fn toggle_active(&mut self, id: &str) -> Result<bool, AdminError> {
        let mut state = false;
        self.update_with(id, |r| {
            state = !r.is_active();
            r.set_active(state);
        })?;
        Ok(state)
    }
}

impl<T: Orderable> Collection<T> {
    /// Default rank for a newly created record: one past the current maximum.
    pub fn next_display_order(&self) -> i64 {
        self.records
            .iter()
            .map(|r| r.display_order())
            .max()
            .unwrap_or(0)
            + 1
    }

    /// Swap display orders with the sibling holding the next-lower rank.
    /// Returns `Ok(false)` when the record is already at the top (ignored
    /// no-op, matching the disabled arrow button).
    pub fn move_up(&mut self, id: &str) -> Result<bool, AdminError> {
        let idx = self.index_of(id).ok_or_else(|| AdminError::not_found(id))?;
        let current = self.records[idx].display_order();
        let mut below: Option<usize> = None;
        for (i, r) in self.records.iter().enumerate() {
            if i == idx || r.display_order() >= current {
                continue;
            }
            // strict > keeps the first sibling in list order on rank ties
            if below.map_or(true, |j| r.display_order() > self.records[j].display_order()) {
                below = Some(i);
            }
        }
        let Some(other) = below else {
            return Ok(false);
        };
        self.swap_orders(idx, other);
        Ok(true)
    }

    /// Swap display orders with the sibling holding the next-higher rank.
    /// Returns `Ok(false)` at the bottom of the range.
    pub fn move_down(&mut self, id: &str) -> Result<bool, AdminError> {
        let idx = self.index_of(id).ok_or_else(|| AdminError::not_found(id))?;
        let current = self.records[idx].display_order();
        let mut above: Option<usize> = None;
        for (i, r) in self.records.iter().enumerate() {
            if i == idx || r.display_order() <= current {
                continue;
            }
            if above.map_or(true, |j| r.display_order() < self.records[j].display_order()) {
                above = Some(i);
            }
        }
        let Some(other) = above else {
            return Ok(false);
        };
        self.swap_orders(idx, other);
        Ok(true)
    }

    fn swap_orders(&mut self, a: usize, b: usize) {
        let mut next = self.records.clone();
        let order_a = next[a].display_order();
        let order_b = next[b].display_order();
        next[a].set_display_order(order_b);
        next[b].set_display_order(order_a);
        self.commit(next);
    }
}

/// Mints record ids: a monotonic counter, unique for the process lifetime.
/// Seeding past any numeric ids already present keeps seeded collections
/// ("1", "2", ...) collision-free.
#[derive(Debug, Clone)]
pub struct IdGen {
    next: u64,
}

impl Default for IdGen {
    fn default() -> Self {
        IdGen::new()
    }
}

impl IdGen {
    pub fn new() -> Self {
        IdGen { next: 1 }
    }

    pub fn seeded_from<T: Record>(collection: &Collection<T>) -> Self {
        let max = collection
            .records()
            .iter()
            .filter_map(|r| r.id().parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        IdGen { next: max + 1 }
    }

    pub fn mint(&mut self) -> String {
        let id = self.next;
        self.next += 1;
        id.to_string()
    }
}

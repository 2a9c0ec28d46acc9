use crate::error::AdminError;
use crate::store::{Collection, Record};

/// A form buffer that can be reconciled into a [`Collection`]. Each entity
/// pairs its record with one of these (mirroring the record's editable
/// fields; upload references and other externally-owned fields stay out).
pub trait EntityForm: Clone {
    type Entity: Record;

    /// Empty defaults for the create flow. The collection is available so
    /// orderable entities can default their rank to one past the maximum.
    fn default_for(collection: &Collection<Self::Entity>) -> Self;

    /// Deep copy of an existing record for the edit flow. Edits to the
    /// buffer never touch the collection until commit.
    fn from_record(record: &Self::Entity) -> Self;

    fn validate(&self) -> Result<(), AdminError>;

    /// Build a brand-new record from the buffer.
    fn build(&self, id: String) -> Self::Entity;

    /// Merge the buffer into an existing record. Fields the buffer does not
    /// carry are left unchanged; blank secret fields keep the stored value.
    fn apply_to(&self, record: &mut Self::Entity);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Idle,
    Create,
    Edit(String),
}

/// Transient edit buffer for one screen: idle, creating, or editing one
/// record by id. Cancel discards the buffer with no effect on the store.
#[derive(Debug, Clone)]
pub struct FormBinding<F> {
    mode: FormMode,
    buffer: Option<F>,
}

impl<F: EntityForm> Default for FormBinding<F> {
    fn default() -> Self {
        FormBinding::new()
    }
}

impl<F: EntityForm> FormBinding<F> {
    pub fn new() -> Self {
        FormBinding { mode: FormMode::Idle, buffer: None }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode != FormMode::Idle
    }

    pub fn buffer(&self) -> Option<&F> {
        self.buffer.as_ref()
    }

    pub fn open_create(&mut self, collection: &Collection<F::Entity>) {
        self.mode = FormMode::Create;
        self.buffer = Some(F::default_for(collection));
    }

    pub fn open_edit(&mut self, record: &F::Entity) {
        self.mode = FormMode::Edit(record.id().to_string());
        self.buffer = Some(F::from_record(record));
    }

    /// Field-level update. Returns false when no form is open.
    pub fn edit(&mut self, update: impl FnOnce(&mut F)) -> bool {
        match self.buffer.as_mut() {
            Some(buffer) => {
                update(buffer);
                true
            }
            None => false,
        }
    }

    pub fn cancel(&mut self) {
        self.mode = FormMode::Idle;
        self.buffer = None;
    }

    pub(crate) fn close(&mut self) {
        self.cancel();
    }
}

/// Operations on list-valued sub-fields (service feature lists). Untouched
/// entries keep their order; out-of-range indices are ignored.
pub mod list_field {
    /// Append a blank entry for the user to fill in.
    pub fn add(items: &mut Vec<String>) {
        items.push(String::new());
    }

    pub fn update_at(items: &mut [String], index: usize, value: &str) -> bool {
        match items.get_mut(index) {
            Some(slot) => {
                *slot = value.to_string();
                true
            }
            None => false,
        }
    }

    pub fn remove_at(items: &mut Vec<String>, index: usize) -> bool {
        if index < items.len() {
            items.remove(index);
            true
        } else {
            false
        }
    }
}

use std::rc::Rc;

use crate::error::AdminError;
use crate::form::{EntityForm, FormBinding, FormMode};
use crate::notify::{LogNotifier, Notifier};
use crate::project::{project, project_ordered, Criteria, Projectable};
use crate::store::{Activatable, Collection, IdGen, Orderable};

/// One management screen: a collection, its filter criteria, and a form
/// buffer, wired to a notification sink. The management screens (team,
/// services, testimonials, posts, pages, sites) are instances of this with
/// different entity types.
pub struct Screen<F: EntityForm> {
    label: &'static str,
    collection: Collection<F::Entity>,
    form: FormBinding<F>,
    criteria: Criteria,
    ids: IdGen,
    notifier: Rc<dyn Notifier>,
}

impl<F: EntityForm> Screen<F>
where
    F::Entity: Projectable,
{
    /// `label` is the human name used in notices ("Team member", "Service").
    pub fn new(label: &'static str, records: Vec<F::Entity>) -> Self {
        let collection = Collection::from_records(records);
        let ids = IdGen::seeded_from(&collection);
        Screen {
            label,
            collection,
            form: FormBinding::new(),
            criteria: Criteria::all(),
            ids,
            notifier: Rc::new(LogNotifier),
        }
    }

    pub fn with_notifier(mut self, notifier: Rc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn collection(&self) -> &Collection<F::Entity> {
        &self.collection
    }

    pub fn collection_mut(&mut self) -> &mut Collection<F::Entity> {
        &mut self.collection
    }

    pub fn form(&self) -> &FormBinding<F> {
        &self.form
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    pub fn set_status_filter(&mut self, status: Option<&str>) {
        self.criteria.status = status.map(str::to_string);
    }

    pub fn set_query(&mut self, query: Option<&str>) {
        self.criteria.query = query.map(str::to_string);
    }

    /// Projection of the store under the current criteria, in stored order.
    /// Screens for orderable entities should render [`Self::visible_ordered`]
    /// instead, which sorts by display order.
    pub fn visible(&self) -> Vec<F::Entity> {
        project(self.collection.records(), &self.criteria)
    }

    pub fn open_create(&mut self) {
        self.form.open_create(&self.collection);
    }

    pub fn open_edit(&mut self, id: &str) -> Result<(), AdminError> {
        match self.collection.get(id).cloned() {
            Some(record) => {
                self.form.open_edit(&record);
                Ok(())
            }
            None => {
                let err = AdminError::not_found(id);
                self.notifier.error(&err.to_string());
                Err(err)
            }
        }
    }

    /// Field-level update of the open buffer; ignored when idle.
    pub fn edit(&mut self, update: impl FnOnce(&mut F)) -> bool {
        self.form.edit(update)
    }

    pub fn cancel(&mut self) {
        self.form.cancel();
    }

    /// Reconcile the buffer into the collection: Create mints a fresh id,
    /// Edit merges by id. On failure the buffer stays open so the caller can
    /// correct it. Returns the affected record's id.
    pub fn commit(&mut self) -> Result<String, AdminError> {
        let mode = self.form.mode().clone();
        match self.try_commit(&mode) {
            Ok(id) => {
                self.form.close();
                let verb = match mode {
                    FormMode::Edit(_) => "updated",
                    _ => "added",
                };
                self.notifier
                    .success(&format!("{} {} successfully", self.label, verb));
                Ok(id)
            }
            Err(err) => {
                self.notifier.error(&err.to_string());
                Err(err)
            }
        }
    }

    fn try_commit(&mut self, mode: &FormMode) -> Result<String, AdminError> {
        let buffer = self
            .form
            .buffer()
            .cloned()
            .ok_or_else(|| AdminError::validation("form", "no form is open"))?;
        buffer.validate()?;
        match mode {
            FormMode::Idle => Err(AdminError::validation("form", "no form is open")),
            FormMode::Create => {
                let id = self.ids.mint();
                self.collection.add(buffer.build(id.clone()))?;
                Ok(id)
            }
            FormMode::Edit(id) => {
                self.collection.update_with(id, |record| buffer.apply_to(record))?;
                Ok(id.clone())
            }
        }
    }

    pub fn delete(&mut self, id: &str) -> Result<F::Entity, AdminError> {
        match self.collection.remove(id) {
            Ok(removed) => {
                self.notifier
                    .success(&format!("{} deleted successfully", self.label));
                Ok(removed)
            }
            Err(err) => {
                self.notifier.error(&err.to_string());
                Err(err)
            }
        }
    }
}

impl<F: EntityForm> Screen<F>
where
    F::Entity: Projectable + Activatable,
{
    pub fn toggle_active(&mut self, id: &str) -> Result<bool, AdminError> {
        match self.collection.toggle_active(id) {
            Ok(state) => {
                self.notifier
                    .success(&format!("{} status updated", self.label));
                Ok(state)
            }
            Err(err) => {
                self.notifier.error(&err.to_string());
                Err(err)
            }
        }
    }
}

impl<F: EntityForm> Screen<F>
where
    F::Entity: Projectable + Orderable,
{
    /// Projection sorted ascending by display order.
    pub fn visible_ordered(&self) -> Vec<F::Entity> {
        project_ordered(self.collection.records(), &self.criteria)
    }

    pub fn move_up(&mut self, id: &str) -> Result<bool, AdminError> {
        self.reorder(id, Collection::move_up)
    }

    pub fn move_down(&mut self, id: &str) -> Result<bool, AdminError> {
        self.reorder(id, Collection::move_down)
    }

    fn reorder(
        &mut self,
        id: &str,
        op: fn(&mut Collection<F::Entity>, &str) -> Result<bool, AdminError>,
    ) -> Result<bool, AdminError> {
        match op(&mut self.collection, id) {
            Ok(true) => {
                self.notifier.success("Order updated");
                Ok(true)
            }
            // boundary: silently ignored, like the disabled arrow button
            Ok(false) => Ok(false),
            Err(err) => {
                self.notifier.error(&err.to_string());
                Err(err)
            }
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::error::AdminError;
use crate::form::EntityForm;
use crate::project::Projectable;
use crate::store::{Activatable, Collection, Orderable, Record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub description: String,
    pub short_description: String,
    /// Free-form price copy ("Starting at $2,500", "$150/hour").
    pub price: String,
    pub features: Vec<String>,
    pub category: String,
    pub display_order: i64,
    pub is_active: bool,
}

impl Record for Service {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Activatable for Service {
    fn is_active(&self) -> bool {
        self.is_active
    }

    fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }
}

impl Orderable for Service {
    fn display_order(&self) -> i64 {
        self.display_order
    }

    fn set_display_order(&mut self, order: i64) {
        self.display_order = order;
    }
}

impl Projectable for Service {
    fn search_text(&self) -> Vec<&str> {
        vec![&self.name, &self.short_description]
    }
}

/// Edit buffer for the services screen. `features` is the list-valued
/// sub-field driven by [`crate::form::list_field`]; blank entries are
/// dropped on commit, not while the buffer is open.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceForm {
    pub name: String,
    pub description: String,
    pub short_description: String,
    pub price: String,
    pub features: Vec<String>,
    pub category: String,
    pub display_order: i64,
    pub is_active: bool,
}

impl ServiceForm {
    fn kept_features(&self) -> Vec<String> {
        self.features
            .iter()
            .filter(|f| !f.trim().is_empty())
            .cloned()
            .collect()
    }
}

impl EntityForm for ServiceForm {
    type Entity = Service;

    fn default_for(collection: &Collection<Service>) -> Self {
        ServiceForm {
            name: String::new(),
            description: String::new(),
            short_description: String::new(),
            price: String::new(),
            features: vec![String::new()],
            category: String::new(),
            display_order: collection.next_display_order(),
            is_active: true,
        }
    }

    fn from_record(service: &Service) -> Self {
        let features = if service.features.is_empty() {
            vec![String::new()]
        } else {
            service.features.clone()
        };
        ServiceForm {
            name: service.name.clone(),
            description: service.description.clone(),
            short_description: service.short_description.clone(),
            price: service.price.clone(),
            features,
            category: service.category.clone(),
            display_order: service.display_order,
            is_active: service.is_active,
        }
    }

    fn validate(&self) -> Result<(), AdminError> {
        if self.name.trim().is_empty() {
            return Err(AdminError::validation("name", "service name is required"));
        }
        Ok(())
    }

    fn build(&self, id: String) -> Service {
        Service {
            id,
            name: self.name.clone(),
            description: self.description.clone(),
            short_description: self.short_description.clone(),
            price: self.price.clone(),
            features: self.kept_features(),
            category: self.category.clone(),
            display_order: self.display_order,
            is_active: self.is_active,
        }
    }

    fn apply_to(&self, service: &mut Service) {
        service.name = self.name.clone();
        service.description = self.description.clone();
        service.short_description = self.short_description.clone();
        service.price = self.price.clone();
        service.features = self.kept_features();
        service.category = self.category.clone();
        service.display_order = self.display_order;
        service.is_active = self.is_active;
    }
}

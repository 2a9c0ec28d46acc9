use serde::{Deserialize, Serialize};

use crate::error::AdminError;
use crate::form::EntityForm;
use crate::project::Projectable;
use crate::store::{Activatable, Collection, Orderable, Record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub client_name: String,
    pub company: String,
    pub quote: String,
    /// 1-5 stars.
    pub rating: u8,
    pub photo: Option<String>,
    pub display_order: i64,
    pub is_active: bool,
}

impl Record for Testimonial {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Activatable for Testimonial {
    fn is_active(&self) -> bool {
        self.is_active
    }

    fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }
}

impl Orderable for Testimonial {
    fn display_order(&self) -> i64 {
        self.display_order
    }

    fn set_display_order(&mut self, order: i64) {
        self.display_order = order;
    }
}

impl Projectable for Testimonial {
    fn search_text(&self) -> Vec<&str> {
        vec![&self.client_name, &self.company]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestimonialForm {
    pub client_name: String,
    pub company: String,
    pub quote: String,
    pub rating: u8,
    pub display_order: i64,
    pub is_active: bool,
}

impl EntityForm for TestimonialForm {
    type Entity = Testimonial;

    fn default_for(collection: &Collection<Testimonial>) -> Self {
        TestimonialForm {
            client_name: String::new(),
            company: String::new(),
            quote: String::new(),
            rating: 5,
            display_order: collection.next_display_order(),
            is_active: true,
        }
    }

    fn from_record(testimonial: &Testimonial) -> Self {
        TestimonialForm {
            client_name: testimonial.client_name.clone(),
            company: testimonial.company.clone(),
            quote: testimonial.quote.clone(),
            rating: testimonial.rating,
            display_order: testimonial.display_order,
            is_active: testimonial.is_active,
        }
    }

    fn validate(&self) -> Result<(), AdminError> {
        if self.client_name.trim().is_empty() {
            return Err(AdminError::validation("client_name", "client name is required"));
        }
        if !(1..=5).contains(&self.rating) {
            return Err(AdminError::validation("rating", "rating must be between 1 and 5"));
        }
        Ok(())
    }

    fn build(&self, id: String) -> Testimonial {
        Testimonial {
            id,
            client_name: self.client_name.clone(),
            company: self.company.clone(),
            quote: self.quote.clone(),
            rating: self.rating,
            photo: None,
            display_order: self.display_order,
            is_active: self.is_active,
        }
    }

    fn apply_to(&self, testimonial: &mut Testimonial) {
        testimonial.client_name = self.client_name.clone();
        testimonial.company = self.company.clone();
        testimonial.quote = self.quote.clone();
        testimonial.rating = self.rating;
        testimonial.display_order = self.display_order;
        testimonial.is_active = self.is_active;
    }
}

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AdminError;
use crate::form::EntityForm;
use crate::project::Projectable;
use crate::store::{Collection, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageStatus {
    Draft,
    Published,
}

impl PageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageStatus::Draft => "draft",
            PageStatus::Published => "published",
        }
    }

    pub fn parse(value: &str) -> Result<Self, AdminError> {
        match value {
            "draft" => Ok(PageStatus::Draft),
            "published" => Ok(PageStatus::Published),
            other => Err(AdminError::validation(
                "status",
                &format!("unknown page status '{}'", other),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    pub title: String,
    pub url: String,
    pub content: String,
    pub meta_title: String,
    pub meta_description: String,
    pub featured_image: Option<String>,
    /// The home page cannot be deleted.
    pub is_home: bool,
    pub status: PageStatus,
    pub last_modified: NaiveDateTime,
}

impl Record for Page {
    fn id(&self) -> &str {
        &self.id
    }

    fn is_protected(&self) -> bool {
        self.is_home
    }

    fn protected_reason(&self) -> &'static str {
        "the home page cannot be deleted"
    }
}

impl Projectable for Page {
    fn status_key(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.title, &self.url]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageForm {
    pub title: String,
    pub url: String,
    pub content: String,
    pub meta_title: String,
    pub meta_description: String,
    pub published: bool,
}

impl PageForm {
    fn status(&self) -> PageStatus {
        if self.published {
            PageStatus::Published
        } else {
            PageStatus::Draft
        }
    }
}

impl EntityForm for PageForm {
    type Entity = Page;

    fn default_for(_collection: &Collection<Page>) -> Self {
        PageForm {
            title: String::new(),
            url: String::new(),
            content: String::new(),
            meta_title: String::new(),
            meta_description: String::new(),
            published: false,
        }
    }

    fn from_record(page: &Page) -> Self {
        PageForm {
            title: page.title.clone(),
            url: page.url.clone(),
            content: page.content.clone(),
            meta_title: page.meta_title.clone(),
            meta_description: page.meta_description.clone(),
            published: page.status == PageStatus::Published,
        }
    }

    fn validate(&self) -> Result<(), AdminError> {
        if self.title.trim().is_empty() {
            return Err(AdminError::validation("title", "page title is required"));
        }
        if !self.url.starts_with('/') {
            return Err(AdminError::validation("url", "url must start with '/'"));
        }
        Ok(())
    }

    fn build(&self, id: String) -> Page {
        Page {
            id,
            title: self.title.clone(),
            url: self.url.clone(),
            content: self.content.clone(),
            meta_title: self.meta_title.clone(),
            meta_description: self.meta_description.clone(),
            featured_image: None,
            is_home: false,
            status: self.status(),
            last_modified: Utc::now().naive_utc(),
        }
    }

    fn apply_to(&self, page: &mut Page) {
        page.title = self.title.clone();
        page.url = self.url.clone();
        page.content = self.content.clone();
        page.meta_title = self.meta_title.clone();
        page.meta_description = self.meta_description.clone();
        page.status = self.status();
        page.last_modified = Utc::now().naive_utc();
        // is_home and featured_image are not form-bound
    }
}

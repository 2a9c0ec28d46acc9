use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AdminError;
use crate::form::EntityForm;
use crate::project::Projectable;
use crate::store::{Collection, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteStatus {
    Active,
    Inactive,
    Maintenance,
}

impl SiteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SiteStatus::Active => "active",
            SiteStatus::Inactive => "inactive",
            SiteStatus::Maintenance => "maintenance",
        }
    }

    pub fn parse(value: &str) -> Result<Self, AdminError> {
        match value {
            "active" => Ok(SiteStatus::Active),
            "inactive" => Ok(SiteStatus::Inactive),
            "maintenance" => Ok(SiteStatus::Maintenance),
            other => Err(AdminError::validation(
                "status",
                &format!("unknown site status '{}'", other),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub id: String,
    pub name: String,
    pub domain: String,
    pub description: String,
    pub status: SiteStatus,
    /// The default site cannot be deleted.
    pub is_default: bool,
    pub created_at: NaiveDate,
    pub last_modified: NaiveDate,
    pub pages: i64,
    pub visits: i64,
    pub leads: i64,
}

impl Record for Site {
    fn id(&self) -> &str {
        &self.id
    }

    fn is_protected(&self) -> bool {
        self.is_default
    }

    fn protected_reason(&self) -> &'static str {
        "the default site cannot be deleted"
    }
}

impl Projectable for Site {
    fn status_key(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.name, &self.domain]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteForm {
    pub name: String,
    pub domain: String,
    pub description: String,
    pub status: SiteStatus,
}

impl EntityForm for SiteForm {
    type Entity = Site;

    fn default_for(_collection: &Collection<Site>) -> Self {
        SiteForm {
            name: String::new(),
            domain: String::new(),
            description: String::new(),
            status: SiteStatus::Active,
        }
    }

    fn from_record(site: &Site) -> Self {
        SiteForm {
            name: site.name.clone(),
            domain: site.domain.clone(),
            description: site.description.clone(),
            status: site.status,
        }
    }

    fn validate(&self) -> Result<(), AdminError> {
        if self.name.trim().is_empty() {
            return Err(AdminError::validation("name", "site name is required"));
        }
        if self.domain.trim().is_empty() {
            return Err(AdminError::validation("domain", "domain is required"));
        }
        Ok(())
    }

    fn build(&self, id: String) -> Site {
        let today = Utc::now().date_naive();
        Site {
            id,
            name: self.name.clone(),
            domain: self.domain.clone(),
            description: self.description.clone(),
            status: self.status,
            is_default: false,
            created_at: today,
            last_modified: today,
            pages: 0,
            visits: 0,
            leads: 0,
        }
    }

    fn apply_to(&self, site: &mut Site) {
        site.name = self.name.clone();
        site.domain = self.domain.clone();
        site.description = self.description.clone();
        site.last_modified = Utc::now().date_naive();
        // status changes go through change_status, is_default through set_default
    }
}

/// Make `id` the default site and clear the flag everywhere else.
pub fn set_default(sites: &mut Collection<Site>, id: &str) -> Result<(), AdminError> {
    if !sites.contains(id) {
        return Err(AdminError::not_found(id));
    }
    let mut next = sites.records().to_vec();
    for site in &mut next {
        site.is_default = site.id == id;
    }
    sites.set_all(next);
    Ok(())
}

pub fn change_status(
    sites: &mut Collection<Site>,
    id: &str,
    status: SiteStatus,
) -> Result<(), AdminError> {
    sites.update_with(id, |site| {
        site.status = status;
        site.last_modified = Utc::now().date_naive();
    })
}

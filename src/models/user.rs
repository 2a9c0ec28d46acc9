use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::auth::{Identity, Role};
use crate::error::AdminError;
use crate::form::EntityForm;
use crate::project::Projectable;
use crate::store::{Activatable, Collection, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        }
    }

    pub fn parse(value: &str) -> Result<Self, AdminError> {
        match value {
            "active" => Ok(UserStatus::Active),
            "inactive" => Ok(UserStatus::Inactive),
            other => Err(AdminError::validation(
                "status",
                &format!("unknown user status '{}'", other),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Secret field: a blank edit buffer never overwrites the stored value.
    pub password: String,
    pub role: Role,
    pub status: UserStatus,
    pub last_login: Option<NaiveDateTime>,
    /// Site slugs this account may manage; `["all"]` grants everything.
    pub sites_access: Vec<String>,
}

impl AdminUser {
    pub fn has_site_access(&self, site: &str) -> bool {
        self.sites_access.iter().any(|s| s == "all" || s == site)
    }
}

impl Record for AdminUser {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Activatable for AdminUser {
    fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }

    fn set_active(&mut self, active: bool) {
        self.status = if active { UserStatus::Active } else { UserStatus::Inactive };
    }
}

impl Projectable for AdminUser {
    fn status_key(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.name, &self.email]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    /// Blank on edit means "keep current password".
    pub password: String,
    pub role: Role,
    pub status: UserStatus,
    pub sites_access: Vec<String>,
}

impl EntityForm for UserForm {
    type Entity = AdminUser;

    fn default_for(_collection: &Collection<AdminUser>) -> Self {
        UserForm {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            role: Role::Editor,
            status: UserStatus::Active,
            sites_access: vec!["main-site".to_string()],
        }
    }

    fn from_record(user: &AdminUser) -> Self {
        UserForm {
            name: user.name.clone(),
            email: user.email.clone(),
            password: String::new(),
            role: user.role,
            status: user.status,
            sites_access: user.sites_access.clone(),
        }
    }

    fn validate(&self) -> Result<(), AdminError> {
        if self.name.trim().is_empty() {
            return Err(AdminError::validation("name", "name is required"));
        }
        if self.email.trim().is_empty() {
            return Err(AdminError::validation("email", "email is required"));
        }
        Ok(())
    }

    fn build(&self, id: String) -> AdminUser {
        AdminUser {
            id,
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            role: self.role,
            status: self.status,
            last_login: None,
            sites_access: self.sites_access.clone(),
        }
    }

    fn apply_to(&self, user: &mut AdminUser) {
        user.name = self.name.clone();
        user.email = self.email.clone();
        if !self.password.is_empty() {
            user.password = self.password.clone();
        }
        user.role = self.role;
        user.status = self.status;
        user.sites_access = self.sites_access.clone();
        // last_login untouched
    }
}

/// Delete a user account. The signed-in account cannot delete itself.
pub fn delete_user(
    users: &mut Collection<AdminUser>,
    current: &Identity,
    id: &str,
) -> Result<AdminUser, AdminError> {
    if current.id == id {
        return Err(AdminError::protected(id, "you cannot delete your own account"));
    }
    users.remove(id)
}

/// Flip active/inactive. The signed-in account cannot deactivate itself.
pub fn toggle_user_status(
    users: &mut Collection<AdminUser>,
    current: &Identity,
    id: &str,
) -> Result<UserStatus, AdminError> {
    if current.id == id {
        return Err(AdminError::protected(id, "you cannot deactivate your own account"));
    }
    let active = users.toggle_active(id)?;
    Ok(if active { UserStatus::Active } else { UserStatus::Inactive })
}

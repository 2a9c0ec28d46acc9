use serde::{Deserialize, Serialize};

use crate::error::AdminError;

/// Role claim carried by the external identity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    Admin,
    Editor,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::Admin => "admin",
            Role::Editor => "editor",
        }
    }

    pub fn parse(value: &str) -> Result<Self, AdminError> {
        match value {
            "super_admin" => Ok(Role::SuperAdmin),
            "admin" => Ok(Role::Admin),
            "editor" => Ok(Role::Editor),
            other => Err(AdminError::validation(
                "role",
                &format!("unknown role '{}'", other),
            )),
        }
    }

    /// Only super admins may manage user accounts.
    pub fn can_manage_users(self) -> bool {
        matches!(self, Role::SuperAdmin)
    }

    pub fn can_manage_sites(self) -> bool {
        matches!(self, Role::SuperAdmin)
    }

    pub fn can_edit_content(self) -> bool {
        true
    }

    pub fn description(&self) -> &'static str {
        match self {
            Role::SuperAdmin => {
                "Full access to everything including user management and system settings"
            }
            Role::Admin => "Content management, form submissions, cannot manage users or sites",
            Role::Editor => "Limited content editing, can view form submissions",
        }
    }
}

/// Opaque identity supplied by the external provider. The core never
/// validates credentials; it only consumes the claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub display_name: String,
    pub email: String,
    pub role: Role,
}

/// Role mapping applied when the provider carries no explicit role claim.
pub fn role_for_email(email: &str) -> Role {
    if email.contains("admin") {
        Role::SuperAdmin
    } else if email.contains("manager") {
        Role::Admin
    } else {
        Role::Editor
    }
}

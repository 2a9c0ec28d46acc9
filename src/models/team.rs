use serde::{Deserialize, Serialize};

use crate::error::AdminError;
use crate::form::EntityForm;
use crate::project::Projectable;
use crate::store::{Activatable, Collection, Orderable, Record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub position: String,
    pub bio: String,
    /// Opaque reference into external image storage.
    pub photo: Option<String>,
    pub display_order: i64,
    pub is_active: bool,
}

impl Record for TeamMember {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Activatable for TeamMember {
    fn is_active(&self) -> bool {
        self.is_active
    }

    fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }
}

impl Orderable for TeamMember {
    fn display_order(&self) -> i64 {
        self.display_order
    }

    fn set_display_order(&mut self, order: i64) {
        self.display_order = order;
    }
}

impl Projectable for TeamMember {
    fn search_text(&self) -> Vec<&str> {
        vec![&self.name, &self.position]
    }
}

/// Edit buffer for the team screen. The photo is not form-bound: uploads go
/// through external storage and land on the record as an opaque reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMemberForm {
    pub name: String,
    pub position: String,
    pub bio: String,
    pub display_order: i64,
    pub is_active: bool,
}

impl EntityForm for TeamMemberForm {
    type Entity = TeamMember;

    fn default_for(collection: &Collection<TeamMember>) -> Self {
        TeamMemberForm {
            name: String::new(),
            position: String::new(),
            bio: String::new(),
            display_order: collection.next_display_order(),
            is_active: true,
        }
    }

    fn from_record(member: &TeamMember) -> Self {
        TeamMemberForm {
            name: member.name.clone(),
            position: member.position.clone(),
            bio: member.bio.clone(),
            display_order: member.display_order,
            is_active: member.is_active,
        }
    }

    fn validate(&self) -> Result<(), AdminError> {
        if self.name.trim().is_empty() {
            return Err(AdminError::validation("name", "name is required"));
        }
        if self.position.trim().is_empty() {
            return Err(AdminError::validation("position", "position is required"));
        }
        Ok(())
    }

    fn build(&self, id: String) -> TeamMember {
        TeamMember {
            id,
            name: self.name.clone(),
            position: self.position.clone(),
            bio: self.bio.clone(),
            photo: None,
            display_order: self.display_order,
            is_active: self.is_active,
        }
    }

    fn apply_to(&self, member: &mut TeamMember) {
        member.name = self.name.clone();
        member.position = self.position.clone();
        member.bio = self.bio.clone();
        member.display_order = self.display_order;
        member.is_active = self.is_active;
        // photo untouched: managed by the upload flow
    }
}

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::AdminError;
use crate::project::Projectable;
use crate::store::{Collection, Record};

/// Coarse, forward-biased workflow. No transition graph is enforced: any
/// value may be set at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    New,
    Read,
    Converted,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::New => "new",
            SubmissionStatus::Read => "read",
            SubmissionStatus::Converted => "converted",
        }
    }

    pub fn parse(value: &str) -> Result<Self, AdminError> {
        match value {
            "new" => Ok(SubmissionStatus::New),
            "read" => Ok(SubmissionStatus::Read),
            "converted" => Ok(SubmissionStatus::Converted),
            other => Err(AdminError::validation(
                "status",
                &format!("unknown submission status '{}'", other),
            )),
        }
    }
}

/// A lead captured by one of the public site's forms. Submissions arrive
/// from outside the admin; the screens only triage, never create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// "Contact", "Quote Request", "Newsletter", ...
    pub form_type: String,
    pub message: String,
    /// Page the form was submitted from.
    pub source: String,
    pub submitted_at: NaiveDateTime,
    pub status: SubmissionStatus,
}

impl Record for Submission {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Projectable for Submission {
    fn status_key(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.name, &self.email, &self.phone]
    }
}

pub fn set_status(
    submissions: &mut Collection<Submission>,
    id: &str,
    status: SubmissionStatus,
) -> Result<(), AdminError> {
    submissions.update_with(id, |s| s.status = status)
}

/// One step forward: new becomes read, anything else becomes converted
/// (the check-mark quick action on the list screen). Returns the new status.
pub fn advance_status(
    submissions: &mut Collection<Submission>,
    id: &str,
) -> Result<SubmissionStatus, AdminError> {
    let mut next = SubmissionStatus::Converted;
    submissions.update_with(id, |s| {
        next = match s.status {
            SubmissionStatus::New => SubmissionStatus::Read,
            _ => SubmissionStatus::Converted,
        };
        s.status = next;
    })?;
    Ok(next)
}

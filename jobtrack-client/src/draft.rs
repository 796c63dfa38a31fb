use shared_types::{CreateJobRequest, JobStatus};

pub const REQUIRED_FIELDS_MESSAGE: &str = "Company and title are required";

/// Unsaved new-job form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub company: String,
    pub title: String,
    pub status: JobStatus,
    pub notes: String,
}

impl Draft {
    /// Company and title are the only required fields. Any non-empty text
    /// counts, whitespace included.
    pub fn is_complete(&self) -> bool {
        !self.company.is_empty() && !self.title.is_empty()
    }

    pub fn reset(&mut self) {
        *self = Draft::default();
    }

    pub fn to_request(&self) -> CreateJobRequest {
        CreateJobRequest {
            company: self.company.clone(),
            title: self.title.clone(),
            status: self.status,
            notes: self.notes.clone(),
        }
    }
}

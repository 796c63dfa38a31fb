use serde::{Deserialize, Serialize};
use std::str::FromStr;
use ts_rs::TS;

/// Where an application currently stands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    #[default]
    Applied,
    Interview,
    Offer,
    Rejected,
    Accepted,
}

impl JobStatus {
    /// All statuses in display order.
    pub const ALL: [JobStatus; 5] = [
        JobStatus::Applied,
        JobStatus::Interview,
        JobStatus::Offer,
        JobStatus::Rejected,
        JobStatus::Accepted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Applied => "APPLIED",
            JobStatus::Interview => "INTERVIEW",
            JobStatus::Offer => "OFFER",
            JobStatus::Rejected => "REJECTED",
            JobStatus::Accepted => "ACCEPTED",
        }
    }

    /// Human readable label, e.g. for filter chips
    pub fn label(&self) -> &'static str {
        match self {
            JobStatus::Applied => "Applied",
            JobStatus::Interview => "Interview",
            JobStatus::Offer => "Offer",
            JobStatus::Rejected => "Rejected",
            JobStatus::Accepted => "Accepted",
        }
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown job status '{0}', expected one of APPLIED, INTERVIEW, OFFER, REJECTED, ACCEPTED")]
pub struct StatusParseError(pub String);

impl FromStr for JobStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        JobStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| StatusParseError(s.to_string()))
    }
}

/// A tracked job application as stored by the jobs service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[ts(type = "number")]
    pub id: i64,
    pub company: String,
    pub title: String,
    pub status: JobStatus,
    #[serde(default)]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub updated_at: Option<String>,
}

impl Job {
    /// Full-record replacement of this job with only the status changed.
    pub fn with_status(&self, status: JobStatus) -> UpdateJobRequest {
        UpdateJobRequest {
            company: self.company.clone(),
            title: self.title.clone(),
            status,
            notes: self.notes.clone(),
        }
    }
}

/// Request to create a new job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CreateJobRequest {
    pub company: String,
    pub title: String,
    pub status: JobStatus,
    pub notes: String,
}

/// Request to replace an existing job; the service has no partial update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UpdateJobRequest {
    pub company: String,
    pub title: String,
    pub status: JobStatus,
    pub notes: String,
}

use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub mod job;

pub use job::{CreateJobRequest, Job, JobStatus, StatusParseError, UpdateJobRequest};

/// Error body returned by the jobs service
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ErrorResponse {
    pub error: String,
}

//! Job Store Synchronizer.
//!
//! Owns the local job collection and its status flags. The collection is
//! only ever replaced wholesale by a successful `GET /jobs`; mutations never
//! patch it, they reload it once the service has confirmed the change.

use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use shared_types::{Job, JobStatus};

use crate::api::JobsApi;
use crate::draft::{Draft, REQUIRED_FIELDS_MESSAGE};
use crate::error::Operation;
use crate::prompt::{UserPrompt, DELETE_CONFIRMATION};

/// Snapshot of everything the list and form render from.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncState {
    pub jobs: Vec<Job>,
    pub loading: bool,
    pub list_error: Option<String>,
    pub submitting: bool,
    pub submit_error: Option<String>,
}

impl Default for SyncState {
    // Nothing has been fetched yet, so the list starts out loading.
    fn default() -> Self {
        Self {
            jobs: Vec::new(),
            loading: true,
            list_error: None,
            submitting: false,
            submit_error: None,
        }
    }
}

/// How a single user-initiated operation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// Nothing was sent: declined, stale id, or a submit already in flight.
    Skipped,
    Failed,
}

/// Cloning shares the same state, so operations can be spawned as separate
/// tasks and overlap.
#[derive(Clone)]
pub struct JobStore {
    api: Arc<dyn JobsApi>,
    prompt: Arc<dyn UserPrompt>,
    state: Arc<Mutex<SyncState>>,
}

impl JobStore {
    pub fn new(api: Arc<dyn JobsApi>, prompt: Arc<dyn UserPrompt>) -> Self {
        Self {
            api,
            prompt,
            state: Arc::new(Mutex::new(SyncState::default())),
        }
    }

    pub async fn snapshot(&self) -> SyncState {
        self.state.lock().await.clone()
    }

    /// Start-up load. Await the handle before the first interactive use.
    pub fn spawn_initial_refresh(&self) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            store.refresh().await;
        })
    }

    /// Replace the local collection with the service's current one.
    ///
    /// On failure the previous collection is kept and `list_error` is set.
    /// `loading` is cleared however the request ends.
    pub async fn refresh(&self) -> Outcome {
        {
            let mut state = self.state.lock().await;
            state.loading = true;
            state.list_error = None;
        }

        let result = self.api.list_jobs().await;

        let mut state = self.state.lock().await;
        state.loading = false;
        match result {
            Ok(jobs) => {
                tracing::debug!("Loaded {} jobs", jobs.len());
                state.jobs = jobs;
                Outcome::Completed
            }
            Err(e) => {
                tracing::warn!("Failed to load jobs: {}", e);
                state.list_error = Some(e.user_message(Operation::Load));
                Outcome::Failed
            }
        }
    }

    /// Submit `draft` as a new job.
    ///
    /// The draft is reset only after the service accepted it and the list has
    /// been reloaded; on failure it is left as entered next to `submit_error`.
    pub async fn create(&self, draft: &mut Draft) -> Outcome {
        {
            let mut state = self.state.lock().await;
            if state.submitting {
                tracing::debug!("Submit already in flight, ignoring");
                return Outcome::Skipped;
            }
            if !draft.is_complete() {
                state.submit_error = Some(REQUIRED_FIELDS_MESSAGE.to_string());
                return Outcome::Failed;
            }
            state.submit_error = None;
            state.submitting = true;
        }

        let outcome = match self.api.create_job(&draft.to_request()).await {
            Ok(()) => {
                tracing::info!("Created job {} at {}", draft.title, draft.company);
                self.refresh().await;
                draft.reset();
                Outcome::Completed
            }
            Err(e) => {
                tracing::warn!("Failed to create job: {}", e);
                self.state.lock().await.submit_error = Some(e.user_message(Operation::Create));
                Outcome::Failed
            }
        };

        self.state.lock().await.submitting = false;
        outcome
    }

    /// Move job `id` to `status` by replacing the whole record.
    ///
    /// An id missing from the local snapshot means the snapshot is stale;
    /// that is not an error and nothing is sent.
    pub async fn update_status(&self, id: i64, status: JobStatus) -> Outcome {
        let job = {
            let state = self.state.lock().await;
            state.jobs.iter().find(|job| job.id == id).cloned()
        };
        let Some(job) = job else {
            tracing::debug!("Job {} not in local snapshot, skipping status update", id);
            return Outcome::Skipped;
        };

        match self.api.update_job(id, &job.with_status(status)).await {
            Ok(()) => {
                tracing::info!("Job {} moved from {} to {}", id, job.status, status);
                self.refresh().await;
                Outcome::Completed
            }
            Err(e) => {
                tracing::warn!("Failed to update job {}: {}", id, e);
                self.prompt.notify(&e.user_message(Operation::Update));
                Outcome::Failed
            }
        }
    }

    /// Delete job `id` after the user confirms.
    pub async fn remove(&self, id: i64) -> Outcome {
        let prompt = self.prompt.clone();
        let confirmed = tokio::task::spawn_blocking(move || prompt.confirm(DELETE_CONFIRMATION))
            .await
            .unwrap_or_else(|e| {
                tracing::warn!("Delete confirmation for job {} did not complete: {}", id, e);
                false
            });
        if !confirmed {
            tracing::debug!("Delete of job {} declined", id);
            return Outcome::Skipped;
        }

        match self.api.delete_job(id).await {
            Ok(()) => {
                tracing::info!("Deleted job {}", id);
                self.refresh().await;
                Outcome::Completed
            }
            Err(e) => {
                tracing::warn!("Failed to delete job {}: {}", id, e);
                self.prompt.notify(&e.user_message(Operation::Delete));
                Outcome::Failed
            }
        }
    }
}

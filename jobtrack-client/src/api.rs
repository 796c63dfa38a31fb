//! REST client for the jobs service.
//!
//! The service exposes a single resource collection at `/jobs` with
//! whole-record create, replace and delete. [`JobsApi`] is the seam the
//! synchronizer talks to; [`HttpJobsApi`] is the [`reqwest`] backed
//! implementation.

use async_trait::async_trait;
use shared_types::{CreateJobRequest, Job, UpdateJobRequest};

use crate::error::ApiError;

#[async_trait]
pub trait JobsApi: Send + Sync {
    /// `GET /jobs`, the full collection in server order.
    async fn list_jobs(&self) -> Result<Vec<Job>, ApiError>;

    /// `POST /jobs`. The created record in the response is ignored; callers
    /// reload the collection instead.
    async fn create_job(&self, request: &CreateJobRequest) -> Result<(), ApiError>;

    /// `PUT /jobs/{id}` with the complete record.
    async fn update_job(&self, id: i64, request: &UpdateJobRequest) -> Result<(), ApiError>;

    /// `DELETE /jobs/{id}`.
    async fn delete_job(&self, id: i64) -> Result<(), ApiError>;
}

/// HTTP client for one jobs service.
pub struct HttpJobsApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpJobsApi {
    /// * `base_url` - e.g. `http://localhost:8080`; a trailing slash is ignored.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/jobs", self.base_url)
    }

    fn job_url(&self, id: i64) -> String {
        format!("{}/jobs/{}", self.base_url, id)
    }

    /// Turn a non-2xx response into [`ApiError::Status`], keeping the body
    /// text so a server message can be surfaced.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl JobsApi for HttpJobsApi {
    async fn list_jobs(&self) -> Result<Vec<Job>, ApiError> {
        let response = self.client.get(self.collection_url()).send().await?;
        let response = Self::check_status(response).await?;
        Ok(response.json::<Vec<Job>>().await?)
    }

    async fn create_job(&self, request: &CreateJobRequest) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.collection_url())
            .json(request)
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn update_job(&self, id: i64, request: &UpdateJobRequest) -> Result<(), ApiError> {
        let response = self
            .client
            .put(self.job_url(id))
            .json(request)
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn delete_job(&self, id: i64) -> Result<(), ApiError> {
        let response = self.client.delete(self.job_url(id)).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }
}

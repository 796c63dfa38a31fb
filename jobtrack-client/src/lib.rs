pub mod api;
pub mod config;
pub mod draft;
pub mod error;
pub mod filter;
pub mod prompt;
pub mod store;
pub mod view;

pub use api::{HttpJobsApi, JobsApi};
pub use draft::Draft;
pub use error::{ApiError, Operation};
pub use filter::StatusFilter;
pub use prompt::{TerminalPrompt, UserPrompt};
pub use store::{JobStore, Outcome, SyncState};

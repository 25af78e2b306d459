//! Hiring domain module: organizations, job postings, job templates.
//!
//! This crate contains the job lifecycle rules, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod job;
pub mod organization;
pub mod template;

pub use job::{Job, JobStatus, LifecycleEvent, transition_target};
pub use organization::Organization;
pub use template::{JobTemplate, USAGE_DELETE_LIMIT};

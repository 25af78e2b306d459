//! Persistence collaborator contracts.
//!
//! Every read and write is keyed by organization: a lookup with the wrong
//! organization behaves exactly like a missing row, so tenant existence never
//! leaks through the storage layer.

use thiserror::Error;

use hireflow_core::{JobId, OrganizationId, TemplateId};
use hireflow_hiring::{Job, JobStatus, JobTemplate};

/// Infrastructure failure in a storage backend.
///
/// Deterministic business outcomes (missing rows, lost races) are modeled in
/// the method signatures, not here.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Outcome of a compare-and-swap transition write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The stored status matched the expectation and the row was replaced.
    Applied,
    /// The stored status had already moved; nothing was written.
    StaleStatus { found: JobStatus },
}

/// Job persistence contract.
pub trait JobStore: Send + Sync {
    fn insert(&self, job: &Job) -> Result<(), StoreError>;

    /// Organization-scoped lookup. A cross-tenant id and a missing id are the
    /// same `None`.
    fn find(&self, organization_id: OrganizationId, id: JobId) -> Result<Option<Job>, StoreError>;

    /// Full-record replace for content edits (last-writer-wins).
    fn update(&self, job: &Job) -> Result<(), StoreError>;

    /// Conditional write for lifecycle transitions: replace the row with
    /// `updated` only if the stored status still equals `expected`. The guard
    /// closes the read-validate-write race between concurrent transitions.
    fn transition(
        &self,
        organization_id: OrganizationId,
        id: JobId,
        expected: JobStatus,
        updated: &Job,
    ) -> Result<TransitionOutcome, StoreError>;

    fn delete(&self, organization_id: OrganizationId, id: JobId) -> Result<(), StoreError>;

    fn list(&self, organization_id: OrganizationId) -> Result<Vec<Job>, StoreError>;
}

/// Template persistence contract.
pub trait TemplateStore: Send + Sync {
    fn insert(&self, template: &JobTemplate) -> Result<(), StoreError>;

    fn find(
        &self,
        organization_id: OrganizationId,
        id: TemplateId,
    ) -> Result<Option<JobTemplate>, StoreError>;

    fn update(&self, template: &JobTemplate) -> Result<(), StoreError>;

    fn delete(&self, organization_id: OrganizationId, id: TemplateId) -> Result<(), StoreError>;

    fn list(&self, organization_id: OrganizationId) -> Result<Vec<JobTemplate>, StoreError>;
}

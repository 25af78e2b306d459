use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use hireflow_core::{DomainError, DomainResult, Entity, JobId, OrganizationId, UserId};

/// Job posting status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Draft,
    Published,
    Closed,
    Archived,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Draft => "draft",
            JobStatus::Published => "published",
            JobStatus::Closed => "closed",
            JobStatus::Archived => "archived",
        }
    }
}

impl core::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle event requested against a job posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleEvent {
    Publish,
    Close,
    Reopen,
    Archive,
    Unarchive,
}

impl LifecycleEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleEvent::Publish => "publish",
            LifecycleEvent::Close => "close",
            LifecycleEvent::Reopen => "reopen",
            LifecycleEvent::Archive => "archive",
            LifecycleEvent::Unarchive => "unarchive",
        }
    }
}

impl core::fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Explicit transition table: (event, allowed from-status, resulting status).
///
/// This table is the single authority on transition legality. Side effects
/// (timestamps) are applied only after a lookup succeeds.
const TRANSITIONS: &[(LifecycleEvent, JobStatus, JobStatus)] = &[
    (LifecycleEvent::Publish, JobStatus::Draft, JobStatus::Published),
    (LifecycleEvent::Close, JobStatus::Published, JobStatus::Closed),
    (LifecycleEvent::Reopen, JobStatus::Closed, JobStatus::Published),
    (LifecycleEvent::Archive, JobStatus::Draft, JobStatus::Archived),
    (LifecycleEvent::Archive, JobStatus::Published, JobStatus::Archived),
    (LifecycleEvent::Archive, JobStatus::Closed, JobStatus::Archived),
    (LifecycleEvent::Unarchive, JobStatus::Archived, JobStatus::Draft),
];

/// Resolve the target status for `event` from `from`, if the transition is legal.
pub fn transition_target(event: LifecycleEvent, from: JobStatus) -> Option<JobStatus> {
    TRANSITIONS
        .iter()
        .find(|(e, f, _)| *e == event && *f == from)
        .map(|(_, _, to)| *to)
}

/// A job posting, owned by exactly one organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    id: JobId,
    organization_id: OrganizationId,
    hiring_manager: Option<UserId>,
    title: String,
    description: String,
    status: JobStatus,
    published_at: Option<DateTime<Utc>>,
    view_count: u64,
    created_at: DateTime<Utc>,
}

impl Job {
    /// Create a new job posting in `draft`.
    ///
    /// Title and description may be blank while drafting; the publishable
    /// predicate gates them at publish time, not here.
    pub fn new(
        id: JobId,
        organization_id: OrganizationId,
        hiring_manager: Option<UserId>,
        title: impl Into<String>,
        description: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            organization_id,
            hiring_manager,
            title: title.into(),
            description: description.into(),
            status: JobStatus::Draft,
            published_at: None,
            view_count: 0,
            created_at,
        }
    }

    pub fn organization_id(&self) -> OrganizationId {
        self.organization_id
    }

    pub fn hiring_manager(&self) -> Option<UserId> {
        self.hiring_manager
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> JobStatus {
        self.status
    }

    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.published_at
    }

    pub fn view_count(&self) -> u64 {
        self.view_count
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Content fields that must be non-blank before the job can be published.
    ///
    /// Evaluated independently of the current status.
    pub fn missing_publish_fields(&self) -> Vec<String> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title".to_string());
        }
        if self.description.trim().is_empty() {
            missing.push("description".to_string());
        }
        missing
    }

    pub fn is_publishable(&self) -> bool {
        self.missing_publish_fields().is_empty()
    }

    /// Apply a lifecycle event, mutating status and timestamps on success.
    ///
    /// Legality is decided by a single lookup in the transition table. Publish
    /// additionally requires the publishable predicate; its failure is reported
    /// as `NotPublishable` so callers can tell "wrong state" from "not ready".
    /// `published_at` is set on the first entry into `published` only and is
    /// never cleared afterwards.
    pub fn apply_event(
        &mut self,
        event: LifecycleEvent,
        now: DateTime<Utc>,
    ) -> DomainResult<JobStatus> {
        let Some(target) = transition_target(event, self.status) else {
            return Err(DomainError::invalid_transition(event, self.status));
        };

        if event == LifecycleEvent::Publish {
            let missing = self.missing_publish_fields();
            if !missing.is_empty() {
                return Err(DomainError::not_publishable(missing));
            }
        }

        self.status = target;
        if target == JobStatus::Published && self.published_at.is_none() {
            self.published_at = Some(now);
        }

        Ok(target)
    }

    /// Replace title and description (allowed in any status).
    pub fn update_content(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.title = title.into();
        self.description = description.into();
    }

    pub fn assign_hiring_manager(&mut self, user_id: UserId) {
        self.hiring_manager = Some(user_id);
    }

    /// Bump the monotonic view counter.
    pub fn record_view(&mut self) -> u64 {
        self.view_count += 1;
        self.view_count
    }
}

impl Entity for Job {
    type Id = JobId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

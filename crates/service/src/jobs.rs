//! Job application service: authorization gate in front of the lifecycle
//! machine, with a conditional write per transition.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use hireflow_auth::{Actor, JobAction, can_manage, can_perform, scope_for};
use hireflow_core::{DomainError, Entity, JobId, UserId};
use hireflow_hiring::{Job, LifecycleEvent};

use crate::error::ServiceResult;
use crate::hooks::{AuditTrail, NotificationSink};
use crate::store::{JobStore, TransitionOutcome};

/// Input for creating a job posting.
#[derive(Debug, Clone)]
pub struct NewJob {
    pub title: String,
    pub description: String,
    /// Owner of the posting. Defaults to the creating actor when `None`.
    pub hiring_manager: Option<UserId>,
}

pub struct JobService<S: JobStore> {
    store: S,
    notifications: Arc<dyn NotificationSink>,
    audit: Arc<dyn AuditTrail>,
}

impl<S: JobStore> JobService<S> {
    pub fn new(
        store: S,
        notifications: Arc<dyn NotificationSink>,
        audit: Arc<dyn AuditTrail>,
    ) -> Self {
        Self {
            store,
            notifications,
            audit,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Organization-scoped load: a cross-tenant id and a missing id both
    /// surface as `NotFound`.
    fn load(&self, actor: &Actor, id: JobId) -> ServiceResult<Job> {
        self.store
            .find(actor.organization_id, id)?
            .ok_or_else(|| DomainError::not_found().into())
    }

    fn record_audit(&self, action: &str, actor: &Actor, record_id: Uuid) {
        if let Err(err) = self.audit.record(action, actor, record_id) {
            warn!(action, %record_id, error = %err, "audit trail rejected record");
        }
    }

    pub fn create(&self, actor: &Actor, input: NewJob) -> ServiceResult<Job> {
        let job = Job::new(
            JobId::new(),
            actor.organization_id,
            input.hiring_manager.or(Some(actor.user_id)),
            input.title,
            input.description,
            Utc::now(),
        );
        if !can_perform(actor, JobAction::Create, &job) {
            return Err(DomainError::unauthorized().into());
        }
        self.store.insert(&job)?;
        info!(job_id = %job.id(), "job created");
        self.record_audit("job.create", actor, (*job.id()).into());
        Ok(job)
    }

    pub fn get(&self, actor: &Actor, id: JobId) -> ServiceResult<Job> {
        let job = self.load(actor, id)?;
        if !can_perform(actor, JobAction::Show, &job) {
            return Err(DomainError::unauthorized().into());
        }
        Ok(job)
    }

    /// Jobs in the actor's organization, filtered by their role's scope.
    ///
    /// Scoping never errors: what the role may not see is silently absent.
    pub fn list(&self, actor: &Actor) -> ServiceResult<Vec<Job>> {
        let scope = scope_for(actor);
        let jobs = self
            .store
            .list(actor.organization_id)?
            .into_iter()
            .filter(|job| scope.allows(actor, job))
            .collect();
        Ok(jobs)
    }

    pub fn update_content(
        &self,
        actor: &Actor,
        id: JobId,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> ServiceResult<Job> {
        let mut job = self.load(actor, id)?;
        if !can_perform(actor, JobAction::Update, &job) {
            return Err(DomainError::unauthorized().into());
        }
        job.update_content(title, description);
        self.store.update(&job)?;
        self.record_audit("job.update", actor, (*job.id()).into());
        Ok(job)
    }

    /// Shared transition path: authorize the mutation, run the state machine
    /// on a copy, then commit it with a compare-and-swap on the status that
    /// was read. A lost race reads as `InvalidTransition`, exactly like an
    /// illegal from-state.
    fn transition(&self, actor: &Actor, id: JobId, event: LifecycleEvent) -> ServiceResult<Job> {
        let job = self.load(actor, id)?;
        if !can_manage(actor, &job) {
            return Err(DomainError::unauthorized().into());
        }

        let expected = job.status();
        let mut updated = job;
        updated.apply_event(event, Utc::now())?;

        match self
            .store
            .transition(actor.organization_id, id, expected, &updated)?
        {
            TransitionOutcome::Applied => {}
            TransitionOutcome::StaleStatus { found } => {
                return Err(DomainError::invalid_transition(event, found).into());
            }
        }

        info!(job_id = %id, event = %event, status = %updated.status(), "job transition applied");

        if let Err(err) = self.notifications.notify(event.as_str(), actor, &updated) {
            warn!(job_id = %id, event = %event, error = %err, "notification sink failed");
        }
        self.record_audit(&format!("job.{event}"), actor, id.into());

        Ok(updated)
    }

    pub fn publish(&self, actor: &Actor, id: JobId) -> ServiceResult<Job> {
        self.transition(actor, id, LifecycleEvent::Publish)
    }

    pub fn close(&self, actor: &Actor, id: JobId) -> ServiceResult<Job> {
        self.transition(actor, id, LifecycleEvent::Close)
    }

    pub fn reopen(&self, actor: &Actor, id: JobId) -> ServiceResult<Job> {
        self.transition(actor, id, LifecycleEvent::Reopen)
    }

    pub fn archive(&self, actor: &Actor, id: JobId) -> ServiceResult<Job> {
        self.transition(actor, id, LifecycleEvent::Archive)
    }

    pub fn unarchive(&self, actor: &Actor, id: JobId) -> ServiceResult<Job> {
        self.transition(actor, id, LifecycleEvent::Unarchive)
    }

    /// Delete a job posting.
    ///
    /// `has_applications` is supplied by the request layer from the (external)
    /// applications collaborator; a job with dependent applications must not
    /// be destroyed.
    pub fn destroy(&self, actor: &Actor, id: JobId, has_applications: bool) -> ServiceResult<()> {
        let job = self.load(actor, id)?;
        if !can_perform(actor, JobAction::Destroy, &job) {
            return Err(DomainError::unauthorized().into());
        }
        if has_applications {
            return Err(DomainError::validation("job has dependent applications").into());
        }
        self.store.delete(actor.organization_id, id)?;
        self.record_audit("job.destroy", actor, id.into());
        Ok(())
    }

    /// Bump the monotonic view counter for an in-organization job.
    pub fn record_view(&self, actor: &Actor, id: JobId) -> ServiceResult<u64> {
        let mut job = self.load(actor, id)?;
        if !can_perform(actor, JobAction::Show, &job) {
            return Err(DomainError::unauthorized().into());
        }
        let count = job.record_view();
        self.store.update(&job)?;
        Ok(count)
    }

    /// Yes/no permission probe for the request layer (analytics panels,
    /// application management buttons, etc.).
    pub fn authorize(&self, actor: &Actor, action: JobAction, id: JobId) -> ServiceResult<()> {
        let job = self.load(actor, id)?;
        if can_perform(actor, action, &job) {
            Ok(())
        } else {
            Err(DomainError::unauthorized().into())
        }
    }
}

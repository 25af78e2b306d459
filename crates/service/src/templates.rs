//! Template application service: reusable job content, duplicate lineage,
//! and the usage-count deletion guard.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use hireflow_auth::{
    Actor, TemplateAction, can_manage_template, can_perform_template, template_delete_blocked,
};
use hireflow_core::{DomainError, Entity, JobId, TemplateId, UserId};
use hireflow_hiring::{Job, JobTemplate, USAGE_DELETE_LIMIT};

use crate::error::ServiceResult;
use crate::hooks::AuditTrail;
use crate::store::{JobStore, TemplateStore};

/// Input for creating a job template.
#[derive(Debug, Clone)]
pub struct NewTemplate {
    pub name: String,
    pub title: String,
    pub body: String,
}

pub struct TemplateService<T: TemplateStore, J: JobStore> {
    templates: T,
    jobs: J,
    audit: Arc<dyn AuditTrail>,
}

impl<T: TemplateStore, J: JobStore> TemplateService<T, J> {
    pub fn new(templates: T, jobs: J, audit: Arc<dyn AuditTrail>) -> Self {
        Self {
            templates,
            jobs,
            audit,
        }
    }

    fn load(&self, actor: &Actor, id: TemplateId) -> ServiceResult<JobTemplate> {
        self.templates
            .find(actor.organization_id, id)?
            .ok_or_else(|| DomainError::not_found().into())
    }

    fn record_audit(&self, action: &str, actor: &Actor, record_id: Uuid) {
        if let Err(err) = self.audit.record(action, actor, record_id) {
            tracing::warn!(action, %record_id, error = %err, "audit trail rejected record");
        }
    }

    /// Create a template. New templates are active immediately.
    pub fn create(&self, actor: &Actor, input: NewTemplate) -> ServiceResult<JobTemplate> {
        let template = JobTemplate::new(
            TemplateId::new(),
            actor.organization_id,
            actor.user_id,
            input.name,
            input.title,
            input.body,
            Utc::now(),
        )?;
        if !can_perform_template(actor, TemplateAction::Create, &template) {
            return Err(DomainError::unauthorized().into());
        }
        self.templates.insert(&template)?;
        self.record_audit("template.create", actor, (*template.id()).into());
        Ok(template)
    }

    pub fn get(&self, actor: &Actor, id: TemplateId) -> ServiceResult<JobTemplate> {
        let template = self.load(actor, id)?;
        if !can_perform_template(actor, TemplateAction::Show, &template) {
            return Err(DomainError::unauthorized().into());
        }
        Ok(template)
    }

    /// Templates in the actor's organization. Visible to any in-org actor.
    pub fn list(&self, actor: &Actor) -> ServiceResult<Vec<JobTemplate>> {
        Ok(self.templates.list(actor.organization_id)?)
    }

    /// Copy a template into a fresh, inactive one owned by the actor, with
    /// lineage back to the source.
    pub fn duplicate(&self, actor: &Actor, id: TemplateId) -> ServiceResult<JobTemplate> {
        let source = self.load(actor, id)?;
        let copy = source.duplicate(TemplateId::new(), actor.user_id, Utc::now());
        if !can_perform_template(actor, TemplateAction::Create, &copy) {
            return Err(DomainError::unauthorized().into());
        }
        self.templates.insert(&copy)?;
        self.record_audit("template.duplicate", actor, (*copy.id()).into());
        Ok(copy)
    }

    /// Create a draft job from an active template, bumping its usage count.
    ///
    /// The usage bump is a plain update: usage_count only ever grows, so
    /// last-writer-wins is acceptable here (unlike status transitions).
    pub fn instantiate(
        &self,
        actor: &Actor,
        id: TemplateId,
        hiring_manager: Option<UserId>,
    ) -> ServiceResult<Job> {
        let mut template = self.load(actor, id)?;
        if !can_perform_template(actor, TemplateAction::Instantiate, &template) {
            return Err(DomainError::unauthorized().into());
        }

        let job = Job::new(
            JobId::new(),
            actor.organization_id,
            hiring_manager.or(Some(actor.user_id)),
            template.title(),
            template.body(),
            Utc::now(),
        );

        template.record_usage();
        self.templates.update(&template)?;
        self.jobs.insert(&job)?;

        info!(template_id = %id, job_id = %job.id(), "job created from template");
        self.record_audit("template.instantiate", actor, id.into());
        self.record_audit("job.create", actor, (*job.id()).into());
        Ok(job)
    }

    pub fn activate(&self, actor: &Actor, id: TemplateId) -> ServiceResult<JobTemplate> {
        self.set_active(actor, id, true)
    }

    pub fn deactivate(&self, actor: &Actor, id: TemplateId) -> ServiceResult<JobTemplate> {
        self.set_active(actor, id, false)
    }

    fn set_active(&self, actor: &Actor, id: TemplateId, active: bool) -> ServiceResult<JobTemplate> {
        let mut template = self.load(actor, id)?;
        if !can_manage_template(actor, &template) {
            return Err(DomainError::unauthorized().into());
        }
        if active {
            template.activate();
        } else {
            template.deactivate();
        }
        self.templates.update(&template)?;
        self.record_audit(
            if active { "template.activate" } else { "template.deactivate" },
            actor,
            id.into(),
        );
        Ok(template)
    }

    /// Delete a template.
    ///
    /// Ownership is checked first (`Unauthorized`), then the usage guard: a
    /// non-admin creator may not delete a template used [`USAGE_DELETE_LIMIT`]
    /// or more times (`UsageGuard`). The two denials stay distinguishable.
    pub fn destroy(&self, actor: &Actor, id: TemplateId) -> ServiceResult<()> {
        let template = self.load(actor, id)?;
        if !can_manage_template(actor, &template) {
            return Err(DomainError::unauthorized().into());
        }
        if template_delete_blocked(actor, &template) {
            return Err(DomainError::UsageGuard {
                usage_count: template.usage_count(),
                limit: USAGE_DELETE_LIMIT,
            }
            .into());
        }
        self.templates.delete(actor.organization_id, id)?;
        self.record_audit("template.destroy", actor, id.into());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hireflow_auth::Role;
    use hireflow_core::OrganizationId;
    use hireflow_hiring::JobStatus;

    use crate::hooks::NoopAudit;
    use crate::memory::{InMemoryJobStore, InMemoryTemplateStore};
    use crate::store::JobStore as _;

    fn service() -> TemplateService<InMemoryTemplateStore, InMemoryJobStore> {
        TemplateService::new(
            InMemoryTemplateStore::new(),
            InMemoryJobStore::new(),
            Arc::new(NoopAudit),
        )
    }

    fn manager(org: OrganizationId) -> Actor {
        Actor::new(UserId::new(), org, Role::HiringManager)
    }

    fn new_template(name: &str) -> NewTemplate {
        NewTemplate {
            name: name.to_string(),
            title: "Backend Engineer".to_string(),
            body: "You will build services.".to_string(),
        }
    }

    #[test]
    fn create_yields_an_active_template_owned_by_the_actor() {
        let svc = service();
        let actor = manager(OrganizationId::new());
        let tpl = svc.create(&actor, new_template("Backend role")).unwrap();
        assert!(tpl.is_active());
        assert_eq!(tpl.created_by(), actor.user_id);
    }

    #[test]
    fn duplicate_is_inactive_with_lineage() {
        let svc = service();
        let org = OrganizationId::new();
        let creator = manager(org);
        let source = svc.create(&creator, new_template("Backend role")).unwrap();

        let duplicator = manager(org);
        let copy = svc.duplicate(&duplicator, *source.id()).unwrap();
        assert!(!copy.is_active());
        assert_eq!(copy.parent_template(), Some(*source.id()));
        assert_eq!(copy.created_by(), duplicator.user_id);
    }

    #[test]
    fn instantiate_creates_a_draft_job_and_bumps_usage() {
        let svc = service();
        let actor = manager(OrganizationId::new());
        let tpl = svc.create(&actor, new_template("Backend role")).unwrap();

        let job = svc.instantiate(&actor, *tpl.id(), None).unwrap();
        assert_eq!(job.status(), JobStatus::Draft);
        assert_eq!(job.title(), "Backend Engineer");
        assert_eq!(job.hiring_manager(), Some(actor.user_id));

        assert_eq!(svc.get(&actor, *tpl.id()).unwrap().usage_count(), 1);
        // The job actually landed in the job store.
        assert!(
            svc.jobs
                .find(actor.organization_id, *job.id())
                .unwrap()
                .is_some()
        );
    }

    #[test]
    fn instantiate_refuses_inactive_templates() {
        let svc = service();
        let actor = manager(OrganizationId::new());
        let tpl = svc.create(&actor, new_template("Backend role")).unwrap();
        svc.deactivate(&actor, *tpl.id()).unwrap();

        let err = svc.instantiate(&actor, *tpl.id(), None).unwrap_err();
        assert!(matches!(err.as_domain(), Some(DomainError::Unauthorized)));
    }

    #[test]
    fn destroy_usage_guard_blocks_creator_but_not_admin() {
        let svc = service();
        let org = OrganizationId::new();
        let creator = manager(org);
        let tpl = svc.create(&creator, new_template("Backend role")).unwrap();
        for _ in 0..USAGE_DELETE_LIMIT {
            svc.instantiate(&creator, *tpl.id(), None).unwrap();
        }

        let err = svc.destroy(&creator, *tpl.id()).unwrap_err();
        match err.as_domain() {
            Some(DomainError::UsageGuard { usage_count, limit }) => {
                assert_eq!(*usage_count, USAGE_DELETE_LIMIT);
                assert_eq!(*limit, USAGE_DELETE_LIMIT);
            }
            other => panic!("expected UsageGuard, got {other:?}"),
        }

        let admin = Actor::new(UserId::new(), org, Role::Admin);
        svc.destroy(&admin, *tpl.id()).unwrap();
        let err = svc.get(&creator, *tpl.id()).unwrap_err();
        assert!(matches!(err.as_domain(), Some(DomainError::NotFound)));
    }

    #[test]
    fn cross_tenant_template_reads_as_not_found() {
        let svc = service();
        let creator = manager(OrganizationId::new());
        let tpl = svc.create(&creator, new_template("Backend role")).unwrap();

        let outsider = Actor::new(UserId::new(), OrganizationId::new(), Role::Admin);
        let err = svc.get(&outsider, *tpl.id()).unwrap_err();
        assert!(matches!(err.as_domain(), Some(DomainError::NotFound)));
    }

    #[test]
    fn non_creator_cannot_toggle_activation() {
        let svc = service();
        let org = OrganizationId::new();
        let creator = manager(org);
        let tpl = svc.create(&creator, new_template("Backend role")).unwrap();

        let peer = manager(org);
        let err = svc.deactivate(&peer, *tpl.id()).unwrap_err();
        assert!(matches!(err.as_domain(), Some(DomainError::Unauthorized)));
    }
}

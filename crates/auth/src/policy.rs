//! Per-action authorization predicates for jobs and templates.
//!
//! Every decision is two-layered, in order:
//!
//! 1. **Tenancy**: actor and record must share an organization. A mismatch is
//!    an unconditional deny — no role overrides it.
//! 2. **Role/ownership**: a per-action predicate over the actor's role and
//!    whether they own the record.
//!
//! All functions here are pure: no IO, no panics, no hidden state.

use hireflow_hiring::{Job, JobStatus, JobTemplate, USAGE_DELETE_LIMIT};

use crate::{Actor, Role};

/// Actions an actor may request on a job posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobAction {
    Index,
    Show,
    Create,
    Update,
    Destroy,
    Publish,
    Close,
    Reopen,
    Archive,
    Unarchive,
    ViewAnalytics,
    ManageApplications,
}

/// Actions an actor may request on a job template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateAction {
    Index,
    Show,
    Create,
    Update,
    Destroy,
    Instantiate,
}

fn in_org(actor: &Actor, organization: hireflow_core::OrganizationId) -> bool {
    actor.organization_id == organization
}

fn owns_job(actor: &Actor, job: &Job) -> bool {
    job.hiring_manager() == Some(actor.user_id)
}

/// Admin, or the job's recorded hiring manager — tenancy checked first.
///
/// This is the mutation predicate shared by update, destroy, and every
/// lifecycle transition.
pub fn can_manage(actor: &Actor, job: &Job) -> bool {
    in_org(actor, job.organization_id()) && (actor.role == Role::Admin || owns_job(actor, job))
}

/// Decide whether `actor` may perform `action` on `job`.
pub fn can_perform(actor: &Actor, action: JobAction, job: &Job) -> bool {
    if !in_org(actor, job.organization_id()) {
        return false;
    }
    match action {
        JobAction::Index | JobAction::Show => true,
        JobAction::Create => actor.role.can_create_jobs(),
        JobAction::Update | JobAction::Destroy | JobAction::Archive => can_manage(actor, job),
        JobAction::Publish => can_manage(actor, job) && job.is_publishable(),
        JobAction::Close => can_manage(actor, job) && job.status() == JobStatus::Published,
        JobAction::Reopen => can_manage(actor, job) && job.status() == JobStatus::Closed,
        JobAction::Unarchive => can_manage(actor, job) && job.status() == JobStatus::Archived,
        JobAction::ViewAnalytics => actor.role.can_view_analytics(),
        JobAction::ManageApplications => can_manage(actor, job) || actor.role.can_recruit(),
    }
}

/// The subset of an organization's jobs a role may see in listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobScope {
    /// Every job in the organization.
    All,
    /// Only jobs whose status is in the given set.
    Statuses(&'static [JobStatus]),
}

impl JobScope {
    /// Whether `job` is visible to `actor` under this scope.
    ///
    /// Re-checks tenancy even though listings are already organization-keyed;
    /// a cross-tenant record is never visible.
    pub fn allows(&self, actor: &Actor, job: &Job) -> bool {
        if !in_org(actor, job.organization_id()) {
            return false;
        }
        match self {
            JobScope::All => true,
            JobScope::Statuses(statuses) => statuses.contains(&job.status()),
        }
    }
}

/// Listing scope per role. The match is exhaustive, so an unhandled role can
/// never fall through to "see everything".
pub fn scope_for(actor: &Actor) -> JobScope {
    match actor.role {
        Role::Admin | Role::HiringManager => JobScope::All,
        Role::Recruiter => JobScope::Statuses(&[JobStatus::Published, JobStatus::Closed]),
        Role::Interviewer | Role::Coordinator => JobScope::Statuses(&[JobStatus::Published]),
    }
}

fn owns_template(actor: &Actor, template: &JobTemplate) -> bool {
    template.created_by() == actor.user_id
}

/// Admin, or the template's creator — tenancy checked first.
pub fn can_manage_template(actor: &Actor, template: &JobTemplate) -> bool {
    in_org(actor, template.organization_id())
        && (actor.role == Role::Admin || owns_template(actor, template))
}

/// A creator (non-admin) may not delete a template once its usage count has
/// reached [`USAGE_DELETE_LIMIT`]. Admins are exempt.
pub fn template_delete_blocked(actor: &Actor, template: &JobTemplate) -> bool {
    actor.role != Role::Admin && template.usage_count() >= USAGE_DELETE_LIMIT
}

/// Decide whether `actor` may perform `action` on `template`.
pub fn can_perform_template(actor: &Actor, action: TemplateAction, template: &JobTemplate) -> bool {
    if !in_org(actor, template.organization_id()) {
        return false;
    }
    match action {
        TemplateAction::Index | TemplateAction::Show => true,
        TemplateAction::Create => actor.role.can_create_jobs(),
        TemplateAction::Update => can_manage_template(actor, template),
        TemplateAction::Destroy => {
            can_manage_template(actor, template) && !template_delete_blocked(actor, template)
        }
        TemplateAction::Instantiate => actor.role.can_create_jobs() && template.is_active(),
    }
}

//! Post-mutation collaborators: notifications and the audit trail.
//!
//! Both are best-effort. The services call them after a successful write and
//! log failures at `warn`; a collaborator error never rolls back or fails the
//! operation itself.

use uuid::Uuid;

use hireflow_auth::Actor;
use hireflow_hiring::Job;

/// Notification collaborator, invoked after a successful lifecycle transition.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, event: &str, actor: &Actor, job: &Job) -> anyhow::Result<()>;
}

/// Audit/activity collaborator, invoked after successful mutating operations.
pub trait AuditTrail: Send + Sync {
    fn record(&self, action: &str, actor: &Actor, record_id: Uuid) -> anyhow::Result<()>;
}

/// Discards notifications. Useful default for tests and tooling.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifications;

impl NotificationSink for NoopNotifications {
    fn notify(&self, _event: &str, _actor: &Actor, _job: &Job) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Discards audit records.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopAudit;

impl AuditTrail for NoopAudit {
    fn record(&self, _action: &str, _actor: &Actor, _record_id: Uuid) -> anyhow::Result<()> {
        Ok(())
    }
}

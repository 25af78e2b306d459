//! Application services: authorization gate + lifecycle machine composed
//! against pluggable persistence, notification, and audit collaborators.
//!
//! The flow for every mutating operation is: load (organization-scoped, so a
//! cross-tenant id reads as not-found) → authorize → apply domain logic →
//! conditional write → best-effort notify/audit.

pub mod error;
pub mod hooks;
pub mod jobs;
pub mod memory;
pub mod store;
pub mod templates;


pub use error::{ServiceError, ServiceResult};
pub use hooks::{AuditTrail, NoopAudit, NoopNotifications, NotificationSink};
pub use jobs::{JobService, NewJob};
pub use memory::{InMemoryJobStore, InMemoryTemplateStore};
pub use store::{JobStore, StoreError, TemplateStore, TransitionOutcome};
pub use templates::{NewTemplate, TemplateService};

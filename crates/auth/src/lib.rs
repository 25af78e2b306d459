//! `hireflow-auth` — pure authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: the request
//! layer establishes identity and hands us an [`Actor`]; every decision here
//! is a pure function over (actor, action, record).

pub mod actor;
pub mod policy;
pub mod roles;

pub use actor::Actor;
pub use policy::{
    JobAction, JobScope, TemplateAction, can_manage, can_manage_template, can_perform,
    can_perform_template, scope_for, template_delete_blocked,
};
pub use roles::Role;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use hireflow_core::{DomainError, DomainResult, Entity, OrganizationId, TemplateId, UserId};

/// A creator may delete their own template only while it has been used fewer
/// than this many times. Admins are exempt.
pub const USAGE_DELETE_LIMIT: u64 = 5;

/// Reusable job content owned by an organization.
///
/// The active flag gates whether the template can seed new jobs; it is a
/// plain boolean gate, entirely independent of the job lifecycle machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobTemplate {
    id: TemplateId,
    organization_id: OrganizationId,
    created_by: UserId,
    name: String,
    title: String,
    body: String,
    is_active: bool,
    usage_count: u64,
    parent_template: Option<TemplateId>,
    created_at: DateTime<Utc>,
}

impl JobTemplate {
    /// Create a fresh template. Active by default.
    pub fn new(
        id: TemplateId,
        organization_id: OrganizationId,
        created_by: UserId,
        name: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("template name must not be blank"));
        }
        Ok(Self {
            id,
            organization_id,
            created_by,
            name,
            title: title.into(),
            body: body.into(),
            is_active: true,
            usage_count: 0,
            parent_template: None,
            created_at,
        })
    }

    /// Copy this template for the given creator, recording lineage.
    ///
    /// Duplicates start inactive with a zeroed usage count; the copy is a
    /// staging area until someone reviews and activates it.
    pub fn duplicate(
        &self,
        new_id: TemplateId,
        created_by: UserId,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: new_id,
            organization_id: self.organization_id,
            created_by,
            name: format!("{} (copy)", self.name),
            title: self.title.clone(),
            body: self.body.clone(),
            is_active: false,
            usage_count: 0,
            parent_template: Some(self.id),
            created_at,
        }
    }

    pub fn organization_id(&self) -> OrganizationId {
        self.organization_id
    }

    pub fn created_by(&self) -> UserId {
        self.created_by
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn usage_count(&self) -> u64 {
        self.usage_count
    }

    pub fn parent_template(&self) -> Option<TemplateId> {
        self.parent_template
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Bump the monotonic usage counter (called once per job created from
    /// this template).
    pub fn record_usage(&mut self) -> u64 {
        self.usage_count += 1;
        self.usage_count
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }
}

impl Entity for JobTemplate {
    type Id = TemplateId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_template() -> JobTemplate {
        JobTemplate::new(
            TemplateId::new(),
            OrganizationId::new(),
            UserId::new(),
            "Backend role",
            "Backend Engineer",
            "You will build services.",
            Utc::now(),
        )
        .unwrap()
    }

    #[test]
    fn new_template_is_active_with_no_lineage() {
        let tpl = test_template();
        assert!(tpl.is_active());
        assert_eq!(tpl.usage_count(), 0);
        assert_eq!(tpl.parent_template(), None);
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = JobTemplate::new(
            TemplateId::new(),
            OrganizationId::new(),
            UserId::new(),
            "",
            "Title",
            "Body",
            Utc::now(),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn duplicate_starts_inactive_and_records_lineage() {
        let mut original = test_template();
        original.record_usage();
        original.record_usage();

        let duplicator = UserId::new();
        let copy = original.duplicate(TemplateId::new(), duplicator, Utc::now());

        assert!(!copy.is_active());
        assert_eq!(copy.usage_count(), 0);
        assert_eq!(copy.parent_template(), Some(*original.id()));
        assert_eq!(copy.created_by(), duplicator);
        assert_eq!(copy.organization_id(), original.organization_id());
        assert_eq!(copy.title(), original.title());
        assert_eq!(copy.body(), original.body());
    }

    #[test]
    fn usage_count_is_monotonic() {
        let mut tpl = test_template();
        assert_eq!(tpl.record_usage(), 1);
        assert_eq!(tpl.record_usage(), 2);
    }

    #[test]
    fn active_flag_toggles_independently_of_usage() {
        let mut tpl = test_template();
        tpl.record_usage();
        tpl.deactivate();
        assert!(!tpl.is_active());
        assert_eq!(tpl.usage_count(), 1);
        tpl.activate();
        assert!(tpl.is_active());
    }
}

use serde::{Deserialize, Serialize};

use hireflow_core::{DomainError, DomainResult, Entity, OrganizationId};

/// Tenant root. Every job, template, and user belongs to exactly one
/// organization; nothing crosses that boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    id: OrganizationId,
    name: String,
    active: bool,
}

impl Organization {
    pub fn new(id: OrganizationId, name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("organization name must not be blank"));
        }
        Ok(Self {
            id,
            name,
            active: true,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn activate(&mut self) {
        self.active = true;
    }
}

impl Entity for Organization {
    type Id = OrganizationId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_organization_is_active() {
        let org = Organization::new(OrganizationId::new(), "Acme").unwrap();
        assert!(org.is_active());
        assert_eq!(org.name(), "Acme");
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = Organization::new(OrganizationId::new(), "   ").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}

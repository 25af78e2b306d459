use core::str::FromStr;

use serde::{Deserialize, Serialize};

use hireflow_core::DomainError;

/// Role of a user within their organization.
///
/// A flat enumeration with capability lookups — roles are business data, not
/// a hierarchy. The policy layer combines these capabilities with ownership
/// checks per action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    HiringManager,
    Recruiter,
    Interviewer,
    Coordinator,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::HiringManager => "hiring_manager",
            Role::Recruiter => "recruiter",
            Role::Interviewer => "interviewer",
            Role::Coordinator => "coordinator",
        }
    }

    /// Roles allowed to create job postings and templates.
    pub fn can_create_jobs(self) -> bool {
        matches!(self, Role::Admin | Role::HiringManager)
    }

    /// General recruiting capability (candidate pipeline / applications).
    ///
    /// Hiring managers are deliberately excluded: they reach applications
    /// through ownership of the job, never across the whole organization.
    pub fn can_recruit(self) -> bool {
        matches!(self, Role::Admin | Role::Recruiter)
    }

    /// Roles allowed to see job analytics (view counts etc.).
    pub fn can_view_analytics(self) -> bool {
        matches!(self, Role::Admin | Role::HiringManager | Role::Recruiter)
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "hiring_manager" => Ok(Role::HiringManager),
            "recruiter" => Ok(Role::Recruiter),
            "interviewer" => Ok(Role::Interviewer),
            "coordinator" => Ok(Role::Coordinator),
            other => Err(DomainError::validation(format!("unknown role '{other}'"))),
        }
    }
}

use serde::{Deserialize, Serialize};

use hireflow_core::{OrganizationId, UserId};

use crate::Role;

/// The authenticated principal for authorization decisions.
///
/// Constructed by the request/session layer; this crate never establishes
/// identity itself. The organization is carried explicitly — there is no
/// ambient "current tenant" anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub user_id: UserId,
    pub organization_id: OrganizationId,
    pub role: Role,
}

impl Actor {
    pub fn new(user_id: UserId, organization_id: OrganizationId, role: Role) -> Self {
        Self {
            user_id,
            organization_id,
            role,
        }
    }
}

//! In-memory store implementations.
//!
//! Intended for tests/dev. Not optimized for performance.

use std::collections::HashMap;
use std::sync::RwLock;

use hireflow_core::{Entity, JobId, OrganizationId, TemplateId};
use hireflow_hiring::{Job, JobStatus, JobTemplate};

use crate::store::{JobStore, StoreError, TemplateStore, TransitionOutcome};

fn poisoned() -> StoreError {
    StoreError::Backend("lock poisoned".to_string())
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
struct RowKey<I> {
    organization_id: OrganizationId,
    id: I,
}

/// In-memory job store keyed by (organization, job).
#[derive(Debug, Default)]
pub struct InMemoryJobStore {
    rows: RwLock<HashMap<RowKey<JobId>, Job>>,
}

impl InMemoryJobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl JobStore for InMemoryJobStore {
    fn insert(&self, job: &Job) -> Result<(), StoreError> {
        let key = RowKey {
            organization_id: job.organization_id(),
            id: *job.id(),
        };
        let mut rows = self.rows.write().map_err(|_| poisoned())?;
        rows.insert(key, job.clone());
        Ok(())
    }

    fn find(&self, organization_id: OrganizationId, id: JobId) -> Result<Option<Job>, StoreError> {
        let rows = self.rows.read().map_err(|_| poisoned())?;
        Ok(rows.get(&RowKey { organization_id, id }).cloned())
    }

    fn update(&self, job: &Job) -> Result<(), StoreError> {
        let key = RowKey {
            organization_id: job.organization_id(),
            id: *job.id(),
        };
        let mut rows = self.rows.write().map_err(|_| poisoned())?;
        match rows.get_mut(&key) {
            Some(existing) => {
                *existing = job.clone();
                Ok(())
            }
            None => Err(StoreError::Backend(format!(
                "update of missing job {}",
                job.id()
            ))),
        }
    }

    fn transition(
        &self,
        organization_id: OrganizationId,
        id: JobId,
        expected: JobStatus,
        updated: &Job,
    ) -> Result<TransitionOutcome, StoreError> {
        let mut rows = self.rows.write().map_err(|_| poisoned())?;
        let Some(existing) = rows.get_mut(&RowKey { organization_id, id }) else {
            return Err(StoreError::Backend(format!("transition of missing job {id}")));
        };
        if existing.status() != expected {
            return Ok(TransitionOutcome::StaleStatus {
                found: existing.status(),
            });
        }
        *existing = updated.clone();
        Ok(TransitionOutcome::Applied)
    }

    fn delete(&self, organization_id: OrganizationId, id: JobId) -> Result<(), StoreError> {
        let mut rows = self.rows.write().map_err(|_| poisoned())?;
        rows.remove(&RowKey { organization_id, id });
        Ok(())
    }

    fn list(&self, organization_id: OrganizationId) -> Result<Vec<Job>, StoreError> {
        let rows = self.rows.read().map_err(|_| poisoned())?;
        let mut jobs: Vec<Job> = rows
            .iter()
            .filter(|(key, _)| key.organization_id == organization_id)
            .map(|(_, job)| job.clone())
            .collect();
        jobs.sort_by_key(|job| job.created_at());
        Ok(jobs)
    }
}

/// In-memory template store keyed by (organization, template).
#[derive(Debug, Default)]
pub struct InMemoryTemplateStore {
    rows: RwLock<HashMap<RowKey<TemplateId>, JobTemplate>>,
}

impl InMemoryTemplateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TemplateStore for InMemoryTemplateStore {
    fn insert(&self, template: &JobTemplate) -> Result<(), StoreError> {
        let key = RowKey {
            organization_id: template.organization_id(),
            id: *template.id(),
        };
        let mut rows = self.rows.write().map_err(|_| poisoned())?;
        rows.insert(key, template.clone());
        Ok(())
    }

    fn find(
        &self,
        organization_id: OrganizationId,
        id: TemplateId,
    ) -> Result<Option<JobTemplate>, StoreError> {
        let rows = self.rows.read().map_err(|_| poisoned())?;
        Ok(rows.get(&RowKey { organization_id, id }).cloned())
    }

    fn update(&self, template: &JobTemplate) -> Result<(), StoreError> {
        let key = RowKey {
            organization_id: template.organization_id(),
            id: *template.id(),
        };
        let mut rows = self.rows.write().map_err(|_| poisoned())?;
        match rows.get_mut(&key) {
            Some(existing) => {
                *existing = template.clone();
                Ok(())
            }
            None => Err(StoreError::Backend(format!(
                "update of missing template {}",
                template.id()
            ))),
        }
    }

    fn delete(&self, organization_id: OrganizationId, id: TemplateId) -> Result<(), StoreError> {
        let mut rows = self.rows.write().map_err(|_| poisoned())?;
        rows.remove(&RowKey { organization_id, id });
        Ok(())
    }

    fn list(&self, organization_id: OrganizationId) -> Result<Vec<JobTemplate>, StoreError> {
        let rows = self.rows.read().map_err(|_| poisoned())?;
        let mut templates: Vec<JobTemplate> = rows
            .iter()
            .filter(|(key, _)| key.organization_id == organization_id)
            .map(|(_, template)| template.clone())
            .collect();
        templates.sort_by_key(|template| template.created_at());
        Ok(templates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use hireflow_core::UserId;
    use hireflow_hiring::LifecycleEvent;

    fn test_job(org: OrganizationId) -> Job {
        Job::new(
            JobId::new(),
            org,
            Some(UserId::new()),
            "Engineer",
            "Build things",
            Utc::now(),
        )
    }

    #[test]
    fn find_is_organization_scoped() {
        let store = InMemoryJobStore::new();
        let org = OrganizationId::new();
        let job = test_job(org);
        store.insert(&job).unwrap();

        assert!(store.find(org, *job.id()).unwrap().is_some());
        // Same id under another organization reads as missing.
        assert!(store.find(OrganizationId::new(), *job.id()).unwrap().is_none());
    }

    #[test]
    fn transition_applies_when_status_matches() {
        let store = InMemoryJobStore::new();
        let org = OrganizationId::new();
        let job = test_job(org);
        store.insert(&job).unwrap();

        let mut updated = job.clone();
        updated.apply_event(LifecycleEvent::Publish, Utc::now()).unwrap();

        let outcome = store
            .transition(org, *job.id(), JobStatus::Draft, &updated)
            .unwrap();
        assert_eq!(outcome, TransitionOutcome::Applied);
        assert_eq!(
            store.find(org, *job.id()).unwrap().unwrap().status(),
            JobStatus::Published
        );
    }

    #[test]
    fn transition_detects_a_lost_race() {
        let store = InMemoryJobStore::new();
        let org = OrganizationId::new();
        let job = test_job(org);
        store.insert(&job).unwrap();

        // A competing writer publishes first.
        let mut published = job.clone();
        published.apply_event(LifecycleEvent::Publish, Utc::now()).unwrap();
        store
            .transition(org, *job.id(), JobStatus::Draft, &published)
            .unwrap();

        // The stale writer's expectation no longer holds; nothing is written.
        let mut archived = job.clone();
        archived.apply_event(LifecycleEvent::Archive, Utc::now()).unwrap();
        let outcome = store
            .transition(org, *job.id(), JobStatus::Draft, &archived)
            .unwrap();
        assert_eq!(
            outcome,
            TransitionOutcome::StaleStatus {
                found: JobStatus::Published
            }
        );
        assert_eq!(
            store.find(org, *job.id()).unwrap().unwrap().status(),
            JobStatus::Published
        );
    }

    #[test]
    fn list_returns_only_the_given_organization() {
        let store = InMemoryJobStore::new();
        let org_a = OrganizationId::new();
        let org_b = OrganizationId::new();
        store.insert(&test_job(org_a)).unwrap();
        store.insert(&test_job(org_a)).unwrap();
        store.insert(&test_job(org_b)).unwrap();

        assert_eq!(store.list(org_a).unwrap().len(), 2);
        assert_eq!(store.list(org_b).unwrap().len(), 1);
    }
}

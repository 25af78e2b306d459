use thiserror::Error;

use hireflow_core::DomainError;

use crate::store::StoreError;

/// Result type used across the service layer.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service-level error.
///
/// `Domain` carries the expected, recoverable failures the request layer
/// renders to the actor. `Storage` is opaque infrastructure failure — the
/// operation aborts and, thanks to the conditional write, no partial
/// transition is ever observable.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("storage failure")]
    Storage(#[source] anyhow::Error),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        Self::Storage(anyhow::Error::new(err))
    }
}

impl ServiceError {
    /// The domain error, if this is an expected failure.
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            Self::Domain(err) => Some(err),
            Self::Storage(_) => None,
        }
    }
}

//! List Assessments use case.
//!
//! Owner-scoped history query: authenticate, then return the caller's
//! records in ascending creation order (the store contract).

use crate::ports::assessment_store::{AssessmentStore, StoreError};
use crate::ports::identity::{IdentityError, IdentityProvider};
use mentor_domain::AssessmentRecord;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while listing assessments.
#[derive(Error, Debug)]
pub enum ListAssessmentsError {
    #[error("No valid caller identity")]
    Unauthorized,

    #[error("No profile found for this account")]
    ProfileNotFound,

    #[error("Failed to load assessments: {0}")]
    Store(#[from] StoreError),
}

impl From<IdentityError> for ListAssessmentsError {
    fn from(error: IdentityError) -> Self {
        match error {
            IdentityError::Unauthorized => ListAssessmentsError::Unauthorized,
            IdentityError::ProfileNotFound => ListAssessmentsError::ProfileNotFound,
        }
    }
}

/// Use case for fetching the caller's past assessments.
pub struct ListAssessmentsUseCase {
    identity: Arc<dyn IdentityProvider>,
    store: Arc<dyn AssessmentStore>,
}

impl ListAssessmentsUseCase {
    pub fn new(identity: Arc<dyn IdentityProvider>, store: Arc<dyn AssessmentStore>) -> Self {
        Self { identity, store }
    }

    pub async fn execute(&self) -> Result<Vec<AssessmentRecord>, ListAssessmentsError> {
        let caller = self.identity.authenticate().await?;
        let records = self.store.list_for_owner(caller.as_str()).await?;
        debug!("Loaded {} assessments for {}", records.len(), caller);
        Ok(records)
    }
}

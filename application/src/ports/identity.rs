//! Identity and profile port
//!
//! Authentication and profile resolution are external concerns; the
//! application only needs an opaque caller id and the read-only profile
//! attached to it. Both checks run before any generation work.

use async_trait::async_trait;
use mentor_domain::Profile;
use std::fmt;
use thiserror::Error;

/// Opaque identifier of the authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerId(String);

impl CallerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CallerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors produced by the identity collaborator.
#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("No valid caller identity")]
    Unauthorized,

    #[error("No profile found for this account")]
    ProfileNotFound,
}

/// Resolves the caller identity and its profile.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn authenticate(&self) -> Result<CallerId, IdentityError>;

    async fn profile(&self, caller: &CallerId) -> Result<Profile, IdentityError>;
}

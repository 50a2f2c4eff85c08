//! Identity adapter backed by configuration.
//!
//! A single-user CLI has no auth server; the caller token and profile come
//! from the loaded configuration. An absent token is an unauthenticated
//! caller, an absent or blank professional domain is a missing profile.

use crate::config::FileProfileConfig;
use async_trait::async_trait;
use mentor_application::ports::identity::{CallerId, IdentityError, IdentityProvider};
use mentor_domain::Profile;

/// Identity provider resolving a fixed caller from configuration.
pub struct StaticIdentityProvider {
    token: Option<String>,
    profile: Option<Profile>,
}

impl StaticIdentityProvider {
    pub fn new(token: Option<String>, profile: Option<Profile>) -> Self {
        Self { token, profile }
    }

    pub fn from_config(config: &FileProfileConfig) -> Self {
        let profile = config
            .domain
            .as_ref()
            .and_then(|domain| Profile::try_new(domain.clone()))
            .map(|profile| {
                profile
                    .with_skills(config.skills.clone())
                    .with_experience_years(config.experience_years)
            });
        Self {
            token: config.token.clone(),
            profile,
        }
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn authenticate(&self) -> Result<CallerId, IdentityError> {
        self.token
            .clone()
            .map(CallerId::new)
            .ok_or(IdentityError::Unauthorized)
    }

    async fn profile(&self, _caller: &CallerId) -> Result<Profile, IdentityError> {
        self.profile.clone().ok_or(IdentityError::ProfileNotFound)
    }
}

//! Candidate profile value object

use serde::{Deserialize, Serialize};

/// Professional profile of the person being assessed (Value Object)
///
/// Supplied by the identity collaborator and treated as read-only input.
/// Drives the wording of every generation prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    domain: String,
    #[serde(default)]
    skills: Vec<String>,
    #[serde(default)]
    experience_years: u32,
}

impl Profile {
    /// Create a new profile
    ///
    /// # Panics
    /// Panics if the professional domain is empty or only whitespace
    pub fn new(domain: impl Into<String>) -> Self {
        let domain = domain.into();
        assert!(
            !domain.trim().is_empty(),
            "Profile domain cannot be empty"
        );
        Self {
            domain,
            skills: Vec::new(),
            experience_years: 0,
        }
    }

    /// Try to create a new profile, returning None if the domain is invalid
    pub fn try_new(domain: impl Into<String>) -> Option<Self> {
        let domain = domain.into();
        if domain.trim().is_empty() {
            None
        } else {
            Some(Self {
                domain,
                skills: Vec::new(),
                experience_years: 0,
            })
        }
    }

    pub fn with_skills(mut self, skills: Vec<String>) -> Self {
        self.skills = skills;
        self
    }

    pub fn with_experience_years(mut self, years: u32) -> Self {
        self.experience_years = years;
        self
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn experience_years(&self) -> u32 {
        self.experience_years
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_creation() {
        let profile = Profile::new("Software Engineering")
            .with_skills(vec!["Rust".to_string(), "SQL".to_string()])
            .with_experience_years(4);
        assert_eq!(profile.domain(), "Software Engineering");
        assert_eq!(profile.skills().len(), 2);
        assert_eq!(profile.experience_years(), 4);
    }

    #[test]
    fn test_experience_defaults_to_zero() {
        let profile = Profile::new("Data Science");
        assert_eq!(profile.experience_years(), 0);
        assert!(profile.skills().is_empty());
    }

    #[test]
    #[should_panic]
    fn test_empty_domain_panics() {
        Profile::new("   ");
    }

    #[test]
    fn test_try_new_empty() {
        assert!(Profile::try_new("").is_none());
        assert!(Profile::try_new("Marketing").is_some());
    }
}

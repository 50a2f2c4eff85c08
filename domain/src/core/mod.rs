//! Core domain concepts shared across all subdomains.
//!
//! - [`profile::Profile`] — the candidate profile driving prompt wording
//! - [`mode::AssessmentMode`] — quiz vs. interview flow selection
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod mode;
pub mod profile;

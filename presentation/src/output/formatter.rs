//! Output formatter trait

use mentor_domain::AssessmentRecord;

/// Trait for formatting assessment records
pub trait OutputFormatter {
    /// Format the complete record, question by question
    fn format(&self, record: &AssessmentRecord) -> String;

    /// Format as JSON
    fn format_json(&self, record: &AssessmentRecord) -> String;

    /// Format summary scores only (concise output)
    fn format_summary(&self, record: &AssessmentRecord) -> String;
}

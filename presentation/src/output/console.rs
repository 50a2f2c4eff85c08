//! Console output formatter for assessment records

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use mentor_domain::{AssessmentRecord, QuestionResult};

/// Formats assessment records for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete record
    pub fn format(record: &AssessmentRecord) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Assessment Results"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}    {} {}\n",
            "Category:".cyan().bold(),
            record.category,
            "Taken:".cyan().bold(),
            record.created_at.format("%Y-%m-%d %H:%M UTC")
        ));
        output.push_str(&Self::score_lines(record));

        output.push_str(&Self::section_header("Questions"));
        for (index, question) in record.questions.iter().enumerate() {
            output.push_str(&Self::question_block(index, question));
        }

        if !record.strengths.is_empty() {
            output.push_str(&format!("\n{}\n", "Strengths:".green().bold()));
            for strength in &record.strengths {
                output.push_str(&format!("  * {}\n", strength));
            }
        }

        if !record.improvement_areas.is_empty() {
            output.push_str(&format!("\n{}\n", "Areas to Improve:".yellow().bold()));
            for area in &record.improvement_areas {
                output.push_str(&format!("  * {}\n", area));
            }
        }

        if let Some(tip) = &record.improvement_tip {
            output.push_str(&format!("\n{} {}\n", "Tip:".cyan().bold(), tip));
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(record: &AssessmentRecord) -> String {
        serde_json::to_string_pretty(record).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format summary scores only (concise output)
    pub fn format_summary(record: &AssessmentRecord) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n\n",
            format!("=== {} Assessment ===", record.category).cyan().bold()
        ));
        output.push_str(&Self::score_lines(record));
        if let Some(tip) = &record.improvement_tip {
            output.push_str(&format!("\n{} {}\n", "Tip:".cyan().bold(), tip));
        }

        output
    }

    /// Format a history listing as JSON
    pub fn format_history_json(records: &[AssessmentRecord]) -> String {
        serde_json::to_string_pretty(records).unwrap_or_else(|_| "[]".to_string())
    }

    /// Format a history listing, one line per record
    pub fn format_history(records: &[AssessmentRecord]) -> String {
        if records.is_empty() {
            return "No assessments recorded yet.".dimmed().to_string();
        }

        let mut output = String::new();
        for record in records {
            output.push_str(&format!(
                "{}  {:<12}  {}\n",
                record.created_at.format("%Y-%m-%d %H:%M"),
                record.category.to_string(),
                format!("{:.1}%", record.quiz_score_percent).bold()
            ));
        }
        output.push_str(&format!(
            "\n{} assessment(s) on record\n",
            records.len().to_string().bold()
        ));
        output
    }

    fn score_lines(record: &AssessmentRecord) -> String {
        let mut output = format!(
            "{} {}\n",
            "Overall Score:".cyan().bold(),
            Self::colored_score(record.quiz_score_percent)
        );
        if let Some(technical) = record.technical_score_percent {
            output.push_str(&format!(
                "{} {}\n",
                "Technical:".cyan().bold(),
                Self::colored_score(technical)
            ));
        }
        if let Some(communication) = record.communication_score_percent {
            output.push_str(&format!(
                "{} {}\n",
                "Communication:".cyan().bold(),
                Self::colored_score(communication)
            ));
        }
        output
    }

    fn question_block(index: usize, question: &QuestionResult) -> String {
        match question {
            QuestionResult::Choice {
                question,
                answer,
                user_answer,
                is_correct,
                explanation,
            } => {
                let marker = if *is_correct {
                    "v".green().bold()
                } else {
                    "x".red().bold()
                };
                let mut block = format!("\n{} [{}] {}\n", marker, index + 1, question.bold());
                block.push_str(&format!("    Your answer: {}\n", user_answer));
                if !is_correct {
                    block.push_str(&format!("    Correct answer: {}\n", answer.green()));
                    if !explanation.is_empty() {
                        block.push_str(&format!("    {}\n", explanation.dimmed()));
                    }
                }
                block
            }
            QuestionResult::Open {
                question,
                kind,
                user_answer,
                evaluation,
            } => {
                let mut block = format!(
                    "\n[{}] {} {}\n",
                    index + 1,
                    question.bold(),
                    format!("({})", kind).dimmed()
                );
                block.push_str(&format!("    Your answer: {}\n", user_answer));
                block.push_str(&format!(
                    "    Score: {}  (technical {:.0}, clarity {:.0}, completeness {:.0})\n",
                    Self::colored_score(evaluation.overall_score),
                    evaluation.technical_accuracy,
                    evaluation.communication_clarity,
                    evaluation.completeness
                ));
                if !evaluation.feedback.is_empty() {
                    block.push_str(&format!("    {}\n", evaluation.feedback.dimmed()));
                }
                block
            }
        }
    }

    fn colored_score(score: f64) -> String {
        let text = format!("{:.1}%", score);
        if score >= 80.0 {
            text.green().bold().to_string()
        } else if score >= 50.0 {
            text.yellow().bold().to_string()
        } else {
            text.red().bold().to_string()
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, record: &AssessmentRecord) -> String {
        Self::format(record)
    }

    fn format_json(&self, record: &AssessmentRecord) -> String {
        Self::format_json(record)
    }

    fn format_summary(&self, record: &AssessmentRecord) -> String {
        Self::format_summary(record)
    }
}

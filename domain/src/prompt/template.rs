//! Prompt templates for the assessment flow

use crate::core::profile::Profile;
use crate::feedback::WrongAnswer;
use crate::question::OpenQuestion;

/// Templates for generating prompts at each stage.
///
/// Deterministic string construction only; the JSON schemas embedded here
/// are the wire contract the decode functions validate against.
pub struct PromptTemplate;

impl PromptTemplate {
    fn expertise_clause(profile: &Profile) -> String {
        if profile.skills().is_empty() {
            String::new()
        } else {
            format!(" with expertise in {}", profile.skills().join(", "))
        }
    }

    /// Prompt eliciting fixed-choice quiz questions.
    pub fn quiz_generation(profile: &Profile, count: usize) -> String {
        format!(
            r#"Generate {count} technical interview questions for a {domain} professional{expertise}.

Each question should be multiple choice with 4 options.

Return the response in this JSON format only, no additional text:
{{
  "questions": [
    {{
      "question": "string",
      "options": ["string", "string", "string", "string"],
      "correctAnswer": "string",
      "explanation": "string"
    }}
  ]
}}"#,
            count = count,
            domain = profile.domain(),
            expertise = Self::expertise_clause(profile),
        )
    }

    /// Prompt eliciting open-ended interview questions.
    pub fn interview_generation(profile: &Profile, count: usize) -> String {
        format!(
            r#"Generate {count} behavioral and technical interview questions for a {domain} professional{expertise} and {years} years of experience.

The questions should assess both technical knowledge and soft skills.
Include a mix of behavioral, problem-solving, and technical questions.

Return the response in this JSON format only, no additional text:
{{
  "questions": [
    {{
      "question": "string",
      "type": "behavioral|technical",
      "evaluationCriteria": ["string"],
      "keyPoints": ["string"]
    }}
  ]
}}"#,
            count = count,
            domain = profile.domain(),
            expertise = Self::expertise_clause(profile),
            years = profile.experience_years(),
        )
    }

    /// Prompt grading one open-ended answer.
    pub fn answer_evaluation(question: &OpenQuestion, answer: &str) -> String {
        format!(
            r#"You are an expert interviewer evaluating a candidate's response.

Question: "{prompt}"
Candidate's Answer: "{answer}"
Question Type: {kind}
Key Points Expected: {key_points}
Evaluation Criteria: {criteria}

Provide a detailed evaluation in this exact JSON format:
{{
  "score": A number from 0-100 representing overall quality,
  "detailedFeedback": "Specific, constructive feedback about the answer",
  "keyStrengths": ["List 2-3 specific strong points"],
  "improvementAreas": ["List 2-3 specific areas to improve"],
  "modelAnswer": "A concise example of an excellent answer",
  "technicalAccuracy": A number from 0-100 for technical questions only,
  "communicationClarity": A number from 0-100,
  "completeness": A number from 0-100
}}

When evaluating:
1. Consider both technical accuracy and communication clarity
2. Check if all key points were addressed
3. Assess the structure and completeness of the answer
4. Evaluate practical examples or experience mentioned
5. Consider the depth of technical understanding shown"#,
            prompt = question.prompt,
            answer = answer,
            kind = question.kind,
            key_points = question.key_points.join(", "),
            criteria = question.evaluation_criteria.join(", "),
        )
    }

    /// Prompt requesting a short encouraging tip from the wrong answers.
    pub fn improvement_tip(domain: &str, misses: &[WrongAnswer]) -> String {
        let wrong_questions = misses
            .iter()
            .map(|miss| {
                format!(
                    "Question: \"{}\"\nCorrect Answer: \"{}\"\nUser Answer: \"{}\"",
                    miss.question, miss.correct_answer, miss.user_answer
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n");

        format!(
            r#"The user got the following {domain} technical interview questions wrong:

{wrong_questions}

Based on these mistakes, provide a concise, specific improvement tip.
Focus on the knowledge gaps revealed by these wrong answers.
Keep the response under 2 sentences and make it encouraging.
Don't explicitly mention the mistakes, instead focus on what to learn/practice."#,
            domain = domain,
            wrong_questions = wrong_questions,
        )
    }
}

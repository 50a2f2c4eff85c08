//! Offline demo content.
//!
//! Preloads the scripted generator with well-formed backend responses so
//! the whole flow can be tried without an API key. The responses are
//! deliberately fenced the way real model output tends to arrive.

use mentor_application::ScriptedTextGenerator;
use mentor_domain::{AssessmentMode, Profile};

pub fn profile() -> Profile {
    Profile::new("Software Engineering")
        .with_skills(vec!["APIs".to_string(), "Databases".to_string()])
        .with_experience_years(3)
}

pub fn scripted_generator(mode: AssessmentMode) -> ScriptedTextGenerator {
    match mode {
        AssessmentMode::Quiz => {
            ScriptedTextGenerator::new(vec![quiz_generation(), improvement_tip()])
        }
        AssessmentMode::Interview => {
            let mut responses = vec![interview_generation()];
            responses.extend(evaluations());
            ScriptedTextGenerator::new(responses)
        }
    }
}

fn fenced(value: serde_json::Value) -> String {
    format!("```json\n{}\n```", value)
}

fn quiz_generation() -> String {
    fenced(serde_json::json!({
        "questions": [
            {
                "question": "Which HTTP status code means a resource was created?",
                "options": ["200", "201", "301", "404"],
                "correctAnswer": "201",
                "explanation": "201 Created signals a successful creation."
            },
            {
                "question": "What does an SQL index primarily improve?",
                "options": ["Write speed", "Read speed", "Storage size", "Durability"],
                "correctAnswer": "Read speed",
                "explanation": "Indexes trade write cost and space for faster lookups."
            },
            {
                "question": "Which property is NOT part of ACID?",
                "options": ["Atomicity", "Consistency", "Idempotency", "Durability"],
                "correctAnswer": "Idempotency",
                "explanation": "ACID is atomicity, consistency, isolation, durability."
            },
            {
                "question": "What does a load balancer distribute?",
                "options": ["Disk space", "Incoming requests", "Database schemas", "DNS records"],
                "correctAnswer": "Incoming requests",
                "explanation": "It spreads traffic across backend instances."
            },
            {
                "question": "Which data structure backs a typical LRU cache?",
                "options": ["Heap", "Hash map + linked list", "B-tree", "Trie"],
                "correctAnswer": "Hash map + linked list",
                "explanation": "The map finds entries, the list tracks recency."
            },
            {
                "question": "What is the main benefit of idempotent endpoints?",
                "options": ["Safe retries", "Lower latency", "Smaller payloads", "Stronger auth"],
                "correctAnswer": "Safe retries",
                "explanation": "Repeating the call cannot change the outcome."
            },
            {
                "question": "Which isolation level allows dirty reads?",
                "options": ["Read uncommitted", "Read committed", "Repeatable read", "Serializable"],
                "correctAnswer": "Read uncommitted",
                "explanation": "It exposes uncommitted changes from other transactions."
            },
            {
                "question": "What does CI in CI/CD stand for?",
                "options": ["Code inspection", "Continuous integration", "Container image", "Change isolation"],
                "correctAnswer": "Continuous integration",
                "explanation": "Merging and testing changes continuously."
            },
            {
                "question": "Which tool records why a request was slow across services?",
                "options": ["Linter", "Distributed tracing", "Formatter", "Feature flag"],
                "correctAnswer": "Distributed tracing",
                "explanation": "Traces follow one request across service boundaries."
            },
            {
                "question": "What does eventual consistency guarantee?",
                "options": [
                    "Reads always see the latest write",
                    "Replicas converge given no new writes",
                    "Writes never conflict",
                    "Transactions are serializable"
                ],
                "correctAnswer": "Replicas converge given no new writes",
                "explanation": "Convergence is guaranteed, immediacy is not."
            }
        ]
    }))
}

fn improvement_tip() -> String {
    "Solidify your grasp of database fundamentals like isolation levels and indexing, \
     and the rest will follow quickly."
        .to_string()
}

fn interview_generation() -> String {
    fenced(serde_json::json!({
        "questions": [
            {
                "question": "Tell me about a time you disagreed with a teammate on a technical decision.",
                "type": "behavioral",
                "evaluationCriteria": ["conflict resolution", "communication"],
                "keyPoints": ["the disagreement", "how it was resolved", "the outcome"]
            },
            {
                "question": "How would you design a rate limiter for a public API?",
                "type": "technical",
                "evaluationCriteria": ["correctness", "tradeoff awareness"],
                "keyPoints": ["token bucket or sliding window", "distributed state", "limits per client"]
            },
            {
                "question": "Describe a production incident you handled and what you changed afterwards.",
                "type": "behavioral",
                "evaluationCriteria": ["ownership", "postmortem thinking"],
                "keyPoints": ["detection", "mitigation", "prevention"]
            },
            {
                "question": "When would you choose a message queue over a direct HTTP call?",
                "type": "technical",
                "evaluationCriteria": ["architecture judgment"],
                "keyPoints": ["decoupling", "burst absorption", "delivery guarantees"]
            },
            {
                "question": "How do you approach reviewing a large pull request?",
                "type": "behavioral",
                "evaluationCriteria": ["collaboration", "rigor"],
                "keyPoints": ["scoping", "feedback tone", "when to pair instead"]
            }
        ]
    }))
}

fn evaluations() -> Vec<String> {
    let canned = [
        (78, "Clear story, though the resolution could be more concrete.", "structure", "specific examples"),
        (84, "Good design instincts and sensible tradeoffs.", "tradeoff awareness", "distributed edge cases"),
        (73, "Honest incident walkthrough, light on prevention detail.", "ownership", "prevention follow-through"),
        (88, "Strong judgment on queueing and its costs.", "architecture judgment", "delivery guarantee nuances"),
        (80, "Practical review approach with a collaborative tone.", "collaboration", "specific examples"),
    ];
    canned
        .iter()
        .map(|(score, feedback, strength, improvement)| {
            fenced(serde_json::json!({
                "score": score,
                "detailedFeedback": feedback,
                "keyStrengths": [strength],
                "improvementAreas": [improvement],
                "modelAnswer": "A strong answer would cover each expected key point with a concrete example.",
                "technicalAccuracy": score - 3,
                "communicationClarity": score + 2,
                "completeness": score - 5
            }))
        })
        .collect()
}

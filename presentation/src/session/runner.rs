//! Interactive terminal loop for one assessment session.
//!
//! Shows each question, collects the answer on stdin, submits it, and
//! shows the immediate result (correctness + explanation for quiz,
//! score + feedback for interview). When an evaluation fails upstream the
//! question is simply asked again: the session was left untouched.

use colored::Colorize;
use mentor_application::ports::progress::SessionProgress;
use mentor_application::use_cases::submit_answer::{SubmitAnswerError, SubmitAnswerUseCase};
use mentor_domain::{Question, Session};
use std::io::{self, BufRead, Write};

/// Drives a session question by question on the terminal.
pub struct SessionRunner<'a> {
    submit: &'a SubmitAnswerUseCase,
    progress: &'a dyn SessionProgress,
}

impl<'a> SessionRunner<'a> {
    pub fn new(submit: &'a SubmitAnswerUseCase, progress: &'a dyn SessionProgress) -> Self {
        Self { submit, progress }
    }

    pub async fn run(&self, session: &mut Session) -> io::Result<()> {
        let total = session.len();
        while let Some(question) = session.current_question().cloned() {
            let index = session.current_index();
            println!();
            println!(
                "{}",
                format!("Question {}/{}", index + 1, total).cyan().bold()
            );
            println!("{}", question.prompt().bold());

            let answer = match &question {
                Question::Choice(q) => {
                    for (n, option) in q.options.iter().enumerate() {
                        println!("  {}. {}", n + 1, option);
                    }
                    Self::read_choice(&q.options)?
                }
                Question::Open(q) => {
                    println!(
                        "{}",
                        format!(
                            "({} question, finish your answer with an empty line)",
                            q.kind
                        )
                        .dimmed()
                    );
                    Self::read_answer()?
                }
            };

            match self.submit.execute(session, answer, self.progress).await {
                Ok(()) => self.show_result(session, index),
                Err(SubmitAnswerError::Evaluation(error)) => {
                    println!("{} {}", "Evaluation failed:".red().bold(), error);
                    println!("Your progress is unchanged, let's try that question again.");
                }
                Err(SubmitAnswerError::Transition(error)) => {
                    println!("{} {}", "Not accepted:".yellow().bold(), error);
                }
            }
        }
        Ok(())
    }

    fn show_result(&self, session: &Session, index: usize) {
        match &session.questions()[index] {
            Question::Choice(question) => {
                let answer = session.answers()[index].as_deref().unwrap_or_default();
                if question.is_correct(answer) {
                    println!("{}", "Correct!".green().bold());
                } else {
                    println!(
                        "{} The correct answer is: {}",
                        "Not quite.".red().bold(),
                        question.correct_option.green()
                    );
                    if !question.explanation.is_empty() {
                        println!("{}", question.explanation.dimmed());
                    }
                }
            }
            Question::Open(_) => {
                if let Some(evaluation) = session.evaluations()[index].as_ref() {
                    println!(
                        "{} {:.0}/100",
                        "Score:".cyan().bold(),
                        evaluation.overall_score
                    );
                    if !evaluation.feedback.is_empty() {
                        println!("{}", evaluation.feedback);
                    }
                }
            }
        }
    }

    fn read_line(prompt: &str) -> io::Result<String> {
        print!("{}", prompt);
        io::stdout().flush()?;
        let mut line = String::new();
        let bytes = io::stdin().lock().read_line(&mut line)?;
        if bytes == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before the session finished",
            ));
        }
        Ok(line.trim().to_string())
    }

    fn read_choice(options: &[String]) -> io::Result<String> {
        loop {
            let line = Self::read_line("> ")?;
            if let Ok(n) = line.parse::<usize>()
                && (1..=options.len()).contains(&n)
            {
                return Ok(options[n - 1].clone());
            }
            // Typing the option text verbatim works too
            if let Some(option) = options.iter().find(|o| o.eq_ignore_ascii_case(&line)) {
                return Ok(option.clone());
            }
            println!(
                "{}",
                format!("Pick a number between 1 and {}.", options.len()).yellow()
            );
        }
    }

    fn read_answer() -> io::Result<String> {
        let mut lines = Vec::new();
        loop {
            let line = Self::read_line(if lines.is_empty() { "> " } else { "  " })?;
            if line.is_empty() {
                break;
            }
            lines.push(line);
        }
        Ok(lines.join("\n"))
    }
}

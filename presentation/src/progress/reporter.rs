//! Progress reporting for backend calls

use indicatif::{ProgressBar, ProgressStyle};
use mentor_application::ports::progress::SessionProgress;
use mentor_domain::AssessmentMode;
use std::sync::Mutex;
use std::time::Duration;

/// Shows a spinner while the generative backend is in flight
pub struct SpinnerProgress {
    bar: Mutex<Option<ProgressBar>>,
}

impl SpinnerProgress {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
    }

    fn start(&self, message: String) {
        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::spinner_style());
        bar.set_message(message);
        bar.enable_steady_tick(Duration::from_millis(100));
        *self.bar.lock().unwrap() = Some(bar);
    }

    fn finish(&self, message: String) {
        if let Some(bar) = self.bar.lock().unwrap().take() {
            bar.finish_with_message(message);
        }
    }
}

impl Default for SpinnerProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionProgress for SpinnerProgress {
    fn on_generation_started(&self, mode: AssessmentMode) {
        self.start(format!("Generating {} questions...", mode));
    }

    fn on_generation_completed(&self, question_count: usize) {
        self.finish(format!("{} questions ready", question_count));
    }

    fn on_evaluation_started(&self, question_index: usize) {
        self.start(format!("Evaluating answer {}...", question_index + 1));
    }

    fn on_evaluation_completed(&self, question_index: usize) {
        self.finish(format!("Answer {} evaluated", question_index + 1));
    }
}

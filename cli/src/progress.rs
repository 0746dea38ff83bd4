use crate::ui;
use std::time::{Duration, Instant};

/// Named steps of a command, reported as they start and finish
pub struct ProgressTracker {
    operation_name: String,
    start_time: Instant,
    steps: Vec<&'static str>,
    current_step: usize,
}

impl ProgressTracker {
    pub fn new(operation_name: &str, steps: &[&'static str]) -> Self {
        ui::section_header(operation_name);
        Self {
            operation_name: operation_name.to_string(),
            start_time: Instant::now(),
            steps: steps.to_vec(),
            current_step: 0,
        }
    }

    pub fn start_step(&self) {
        if let Some(step) = self.steps.get(self.current_step) {
            ui::status_message(step);
        }
    }

    pub fn complete_step(&mut self) {
        if let Some(step) = self.steps.get(self.current_step) {
            ui::success_message(step);
            self.current_step += 1;
        }
    }

    pub fn skip_step(&mut self, reason: &str) {
        if let Some(step) = self.steps.get(self.current_step) {
            ui::warning_message(&format!("Skipped: {step} ({reason})"));
            self.current_step += 1;
        }
    }

    pub fn complete(&self) {
        ui::success_message(&format!(
            "{} completed in {}",
            self.operation_name,
            format_duration(self.start_time.elapsed())
        ));
    }
}

fn format_duration(duration: Duration) -> String {
    let millis = duration.as_millis();
    if millis < 1000 {
        format!("{millis} ms")
    } else {
        format!("{:.1} seconds", duration.as_secs_f64())
    }
}

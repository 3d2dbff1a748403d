//! Judging personas, the workforce orchestrator and transcript formatting.

mod personas;
mod prompts;
mod transcript;
mod worker;
mod workforce;

pub use personas::{personas, Persona};
pub use prompts::{RESEARCHER_REGISTRATION, TASK_INSTRUCTIONS};
pub use transcript::format_transcript;
pub use worker::LlmWorker;
pub use workforce::{Workforce, MAX_WORKER_ATTEMPTS};

use verdict_core::Task;

/// Builds the per-request evaluation task from the formatted project details.
pub fn evaluation_task(project_description: &str) -> Task {
    Task::new(TASK_INSTRUCTIONS, project_description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluation_task_carries_project_details() {
        let task = evaluation_task("Project name: EcoTrack\n\nDescription: farm sensors");
        assert_eq!(task.content, TASK_INSTRUCTIONS);
        assert!(task.additional_info.contains("EcoTrack"));
        assert!(!task.id.is_empty());
    }
}

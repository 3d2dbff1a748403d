//! Renders a task result into the transcript returned to the caller.

use std::fmt::Write;

use verdict_core::{AgentError, TaskResult};

/// Formats the full conversation: a header, one block per recorded step, and
/// the final synthesized narrative. A result without a final text is an
/// error; a result without steps falls back to a placeholder line.
pub fn format_transcript(result: &TaskResult) -> Result<String, AgentError> {
    let final_text = result
        .final_text
        .as_deref()
        .ok_or(AgentError::MissingFinalResult)?;

    let mut out = String::from("Project Evaluation Conversation:\n\n");

    if result.steps.is_empty() {
        out.push_str("Detailed task steps are not available.\n\n");
    } else {
        for step in &result.steps {
            // Infallible for String targets.
            let _ = write!(
                out,
                "Step: {}\nWorker: {}\nInput: {}\nOutput: {}\n\n",
                step.step_id, step.worker_name, step.input, step.output
            );
        }
    }

    out.push_str("Final Result:\n");
    out.push_str(final_text);

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdict_core::TaskStep;

    fn step(id: &str, worker: &str) -> TaskStep {
        TaskStep {
            step_id: id.to_string(),
            worker_name: worker.to_string(),
            input: format!("input for {worker}"),
            output: format!("output from {worker}"),
        }
    }

    #[test]
    fn test_transcript_renders_steps_in_order() {
        let result = TaskResult {
            task_id: "t1".into(),
            steps: vec![step("1", "Researcher"), step("2", "El-VC (Judge)")],
            final_text: Some("Everyone liked it.".into()),
        };

        let text = format_transcript(&result).unwrap();
        assert!(text.starts_with("Project Evaluation Conversation:\n\n"));

        let researcher_at = text.find("Worker: Researcher").unwrap();
        let judge_at = text.find("Worker: El-VC (Judge)").unwrap();
        assert!(researcher_at < judge_at);

        assert!(text.contains("Input: input for El-VC (Judge)"));
        assert!(text.ends_with("Final Result:\nEveryone liked it."));
    }

    #[test]
    fn test_transcript_without_steps_keeps_final_result() {
        let result = TaskResult {
            task_id: "t1".into(),
            steps: Vec::new(),
            final_text: Some("Summary only.".into()),
        };

        let text = format_transcript(&result).unwrap();
        assert!(text.contains("Detailed task steps are not available.\n\n"));
        assert!(text.contains("Final Result:\nSummary only."));
    }

    #[test]
    fn test_transcript_without_final_text_is_an_error() {
        let result = TaskResult {
            task_id: "t1".into(),
            steps: vec![step("1", "Researcher")],
            final_text: None,
        };

        let err = format_transcript(&result).unwrap_err();
        assert!(matches!(err, AgentError::MissingFinalResult));
    }
}

use std::sync::Arc;

use futures::future::join_all;
use tracing::{error, info, warn};
use verdict_core::{AgentError, Task, TaskResult, TaskStep, Worker, WorkerRole};

use crate::prompts;

/// How many times a single worker invocation is attempted before the worker
/// is reported as unresponsive.
pub const MAX_WORKER_ATTEMPTS: usize = 2;

struct RegisteredWorker {
    description: String,
    worker: Arc<dyn Worker>,
}

/// A named pool of workers processing one task at a time. The pool is
/// assembled at startup and read-only afterwards.
pub struct Workforce {
    name: String,
    coordinator: Arc<dyn Worker>,
    workers: Vec<RegisteredWorker>,
}

impl Workforce {
    pub fn new(name: impl Into<String>, coordinator: Arc<dyn Worker>) -> Self {
        Self {
            name: name.into(),
            coordinator,
            workers: Vec::new(),
        }
    }

    /// Adds a worker to the pool. Build-time only; the description carries
    /// the worker's public identity into the final narrative.
    pub fn register(mut self, description: impl Into<String>, worker: Arc<dyn Worker>) -> Self {
        self.workers.push(RegisteredWorker {
            description: description.into(),
            worker,
        });
        self
    }

    /// Processes one task: research first, then every judge concurrently,
    /// then the coordinator's closing summary. Judges that stay unresponsive
    /// after bounded retries are reported as missing; a score is never
    /// fabricated on their behalf.
    pub async fn process(&self, task: Task) -> Result<TaskResult, AgentError> {
        info!("╔══════════════════════════════════════════════════════════════");
        info!("║ WORKFORCE: {} (task {})", self.name, task.id);
        info!("╠══════════════════════════════════════════════════════════════");

        let mut steps: Vec<TaskStep> = Vec::new();

        // Research phase. Findings must exist (or be explicitly absent)
        // before any judge runs.
        let mut findings: Option<String> = None;
        for registered in self.workers.iter().filter(|w| w.worker.role() == WorkerRole::Researcher) {
            let prompt = prompts::research_prompt(&task);
            match run_with_retry(registered.worker.as_ref(), &prompt).await {
                Ok(output) => {
                    info!("║ researcher '{}' returned findings", registered.worker.name());
                    record_step(&mut steps, registered.worker.name(), &prompt, &output);
                    findings = Some(match findings.take() {
                        Some(existing) => format!("{existing}\n\n{output}"),
                        None => output,
                    });
                }
                Err(e) => {
                    warn!("║ researcher '{}' failed, judging without findings: {}", registered.worker.name(), e);
                    record_step(
                        &mut steps,
                        registered.worker.name(),
                        &prompt,
                        &format!("No findings were gathered: {e}"),
                    );
                }
            }
        }

        // Judging phase. Judges are independent of each other and fan out
        // concurrently; only the research ordering is guaranteed.
        let judge_prompt = prompts::judge_prompt(&task, findings.as_deref());
        let judges: Vec<&RegisteredWorker> = self
            .workers
            .iter()
            .filter(|w| w.worker.role() == WorkerRole::Judge)
            .collect();

        info!("║ dispatching {} judge(s)", judges.len());

        let outcomes = join_all(judges.into_iter().map(|registered| {
            let prompt = judge_prompt.clone();
            async move {
                let outcome = run_with_retry(registered.worker.as_ref(), &prompt).await;
                (registered, outcome)
            }
        }))
        .await;

        let mut report = String::new();
        for (registered, outcome) in outcomes {
            match outcome {
                Ok(output) => {
                    info!("║ judge '{}' responded ({} chars)", registered.worker.name(), output.len());
                    record_step(&mut steps, registered.worker.name(), &judge_prompt, &output);
                    report.push_str(&format!("### {}\n{}\n\n", registered.description, output));
                }
                Err(e) => {
                    error!("║ judge '{}' unresponsive: {}", registered.worker.name(), e);
                    let note = format!(
                        "No response was received after {MAX_WORKER_ATTEMPTS} attempts; no score was recorded."
                    );
                    record_step(&mut steps, registered.worker.name(), &judge_prompt, &note);
                    report.push_str(&format!("### {}\n{}\n\n", registered.description, note));
                }
            }
        }

        // Synthesis. The per-judge listing above is already verbatim; the
        // coordinator only contributes the closing summary paragraph.
        let summary_prompt = prompts::summary_prompt(&report);
        let summary = run_with_retry(self.coordinator.as_ref(), &summary_prompt).await?;
        record_step(&mut steps, self.coordinator.name(), &summary_prompt, &summary);

        info!("║ task {} complete ({} steps)", task.id, steps.len());
        info!("╚══════════════════════════════════════════════════════════════");

        Ok(TaskResult {
            task_id: task.id,
            steps,
            final_text: Some(format!("{report}Overall Summary:\n{summary}")),
        })
    }
}

async fn run_with_retry(worker: &dyn Worker, prompt: &str) -> Result<String, AgentError> {
    for attempt in 1..=MAX_WORKER_ATTEMPTS {
        match worker.run(prompt).await {
            Ok(output) => return Ok(output),
            Err(e) => {
                warn!(
                    "worker '{}' attempt {}/{} failed: {}",
                    worker.name(),
                    attempt,
                    MAX_WORKER_ATTEMPTS,
                    e
                );
            }
        }
    }

    Err(AgentError::RetriesExhausted {
        worker: worker.name().to_string(),
        attempts: MAX_WORKER_ATTEMPTS,
    })
}

fn record_step(steps: &mut Vec<TaskStep>, worker_name: &str, input: &str, output: &str) {
    steps.push(TaskStep {
        step_id: (steps.len() + 1).to_string(),
        worker_name: worker_name.to_string(),
        input: input.to_string(),
        output: output.to_string(),
    });
}

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;
use verdict_core::{AgentError, Tool, Worker, WorkerRole};
use verdict_llm::ChatClient;

use crate::personas::Persona;
use crate::prompts;

/// The one concrete worker: a chat session bound to role instructions and an
/// optional tool set. Judges, the researcher and the coordinator differ only
/// in how they are configured.
pub struct LlmWorker {
    name: String,
    role: WorkerRole,
    instructions: String,
    client: ChatClient,
    tools: Vec<Arc<dyn Tool>>,
}

impl LlmWorker {
    pub fn judge(persona: &Persona, client: ChatClient) -> Self {
        Self {
            name: persona.worker_name.to_string(),
            role: WorkerRole::Judge,
            instructions: prompts::judge_instructions(persona),
            client,
            tools: Vec::new(),
        }
    }

    pub fn researcher(client: ChatClient, search: Arc<dyn Tool>) -> Self {
        Self {
            name: prompts::RESEARCHER_NAME.to_string(),
            role: WorkerRole::Researcher,
            instructions: prompts::RESEARCHER_INSTRUCTIONS.to_string(),
            client,
            tools: vec![search],
        }
    }

    pub fn coordinator(client: ChatClient) -> Self {
        Self {
            name: prompts::COORDINATOR_NAME.to_string(),
            role: WorkerRole::Coordinator,
            instructions: prompts::COORDINATOR_INSTRUCTIONS.to_string(),
            client,
            tools: Vec::new(),
        }
    }
}

#[async_trait]
impl Worker for LlmWorker {
    fn name(&self) -> &str {
        &self.name
    }

    fn role(&self) -> WorkerRole {
        self.role
    }

    async fn run(&self, prompt: &str) -> Result<String, AgentError> {
        let response = if self.tools.is_empty() {
            self.client.chat(&self.instructions, prompt).await?
        } else {
            self.client
                .chat_with_tools(&self.instructions, prompt, &self.tools)
                .await?
        };

        debug!(
            worker = %self.name,
            input_tokens = response.metrics.input_tokens,
            output_tokens = response.metrics.output_tokens,
            elapsed_ms = response.metrics.elapsed_ms,
            "worker completed"
        );

        Ok(response.content)
    }
}

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

// ─────────────────────────────────────────────────────────────────────────────
// Error
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Error, Debug)]
pub enum AgentError {
    #[error("LLM request failed: {0}")]
    Llm(String),

    #[error("search request failed: {0}")]
    Search(String),

    #[error("tool call failed: {0}")]
    Tool(String),

    #[error("worker '{worker}' failed: {reason}")]
    WorkerFailed { worker: String, reason: String },

    #[error("worker '{worker}' exhausted {attempts} attempts")]
    RetriesExhausted { worker: String, attempts: usize },

    #[error("task completed without a final result")]
    MissingFinalResult,

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for AgentError {
    fn from(err: serde_json::Error) -> Self {
        AgentError::Tool(err.to_string())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversation
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: MessageRole::User, content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: MessageRole::Assistant, content: content.into() }
    }
}

/// Which chat model a client should talk to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub id: String,
    pub name: String,
    pub model: String,
    pub api_base: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Task
// ─────────────────────────────────────────────────────────────────────────────

/// A unit of work submitted to the workforce. Created per request and
/// consumed exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    /// The fixed instruction describing how the task should be carried out.
    pub content: String,
    /// Request-specific details (the project name and description).
    pub additional_info: String,
}

impl Task {
    pub fn new(content: impl Into<String>, additional_info: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content: content.into(),
            additional_info: additional_info.into(),
        }
    }
}

/// One worker invocation recorded during task processing. Steps are
/// append-only while the task runs and read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskStep {
    pub step_id: String,
    pub worker_name: String,
    pub input: String,
    pub output: String,
}

/// The outcome of processing a single task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskResult {
    pub task_id: String,
    pub steps: Vec<TaskStep>,
    pub final_text: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Worker
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkerRole {
    Researcher,
    Judge,
    Coordinator,
}

/// A role-bound participant in the workforce. Workers are created once at
/// startup and must not keep state across invocations.
#[async_trait]
pub trait Worker: Send + Sync {
    /// Display identity, preserved verbatim in step traces and the final
    /// narrative.
    fn name(&self) -> &str;

    fn role(&self) -> WorkerRole;

    async fn run(&self, prompt: &str) -> Result<String, AgentError>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Tool
// ─────────────────────────────────────────────────────────────────────────────

/// A callable capability exposed to a worker's model via function calling.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// JSON Schema for the tool's arguments.
    fn parameters(&self) -> serde_json::Value;

    async fn call(&self, args: serde_json::Value) -> Result<String, AgentError>;
}

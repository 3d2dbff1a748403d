use std::sync::Arc;
use std::time::Instant;

use async_openai::config::OpenAIConfig;
use async_openai::types::{
    ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestToolMessageArgs,
    ChatCompletionRequestUserMessageArgs, ChatCompletionTool, ChatCompletionToolArgs,
    ChatCompletionToolType, CreateChatCompletionRequestArgs, CreateChatCompletionResponse,
    FunctionObjectArgs,
};
use async_openai::Client;
use tracing::{debug, warn};
use verdict_core::{AgentError, ModelConfig, Tool};

/// Upper bound on tool-call rounds within a single worker invocation. After
/// this many rounds the model is forced to answer without tools.
const MAX_TOOL_ROUNDS: usize = 4;

/// Token usage and latency for one completed exchange.
#[derive(Debug, Clone, Default)]
pub struct LlmMetrics {
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub elapsed_ms: u64,
}

#[derive(Debug, Clone)]
pub struct LlmResponse {
    pub content: String,
    pub metrics: LlmMetrics,
}

/// One chat-completion session. Each worker owns its own client so that a
/// misbehaving session can never leak state into a sibling worker.
#[derive(Debug)]
pub struct ChatClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl ChatClient {
    /// Fails when the credential is empty so that misconfiguration surfaces
    /// at startup rather than on the first request.
    pub fn new(model: &ModelConfig, api_key: &str) -> Result<Self, AgentError> {
        if api_key.trim().is_empty() {
            return Err(AgentError::Config("OpenAI API key is empty".into()));
        }

        let mut config = OpenAIConfig::new().with_api_key(api_key);
        if let Some(base) = &model.api_base {
            config = config.with_api_base(base);
        }

        Ok(Self {
            client: Client::with_config(config),
            model: model.model.clone(),
        })
    }

    /// Sends a single system + user exchange and returns the completion.
    pub async fn chat(&self, system_prompt: &str, user_input: &str) -> Result<LlmResponse, AgentError> {
        let start = Instant::now();
        let messages = initial_messages(system_prompt, user_input)?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .build()
            .map_err(|e| AgentError::Llm(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| AgentError::Llm(e.to_string()))?;

        extract_response(response, start)
    }

    /// Sends an exchange in which the model may call the given tools. Tool
    /// failures are reported back to the model as tool output so the
    /// conversation can continue with partial findings.
    pub async fn chat_with_tools(
        &self,
        system_prompt: &str,
        user_input: &str,
        tools: &[Arc<dyn Tool>],
    ) -> Result<LlmResponse, AgentError> {
        if tools.is_empty() {
            return self.chat(system_prompt, user_input).await;
        }

        let start = Instant::now();
        let definitions = tools
            .iter()
            .map(|t| tool_definition(t.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        let mut messages = initial_messages(system_prompt, user_input)?;
        let mut metrics = LlmMetrics::default();

        for round in 0..MAX_TOOL_ROUNDS {
            let request = CreateChatCompletionRequestArgs::default()
                .model(&self.model)
                .messages(messages.clone())
                .tools(definitions.clone())
                .build()
                .map_err(|e| AgentError::Llm(e.to_string()))?;

            let response = self
                .client
                .chat()
                .create(request)
                .await
                .map_err(|e| AgentError::Llm(e.to_string()))?;

            if let Some(usage) = &response.usage {
                metrics.input_tokens += usage.prompt_tokens;
                metrics.output_tokens += usage.completion_tokens;
            }

            let choice = response
                .choices
                .into_iter()
                .next()
                .ok_or_else(|| AgentError::Llm("completion returned no choices".into()))?;

            let tool_calls = choice.message.tool_calls.unwrap_or_default();
            if tool_calls.is_empty() {
                metrics.elapsed_ms = start.elapsed().as_millis() as u64;
                return Ok(LlmResponse {
                    content: choice.message.content.unwrap_or_default(),
                    metrics,
                });
            }

            debug!("tool round {}: {} call(s)", round + 1, tool_calls.len());

            messages.push(
                ChatCompletionRequestAssistantMessageArgs::default()
                    .tool_calls(tool_calls.clone())
                    .build()
                    .map_err(|e| AgentError::Llm(e.to_string()))?
                    .into(),
            );

            for call in tool_calls {
                let output = dispatch_tool_call(
                    tools,
                    &call.function.name,
                    &call.function.arguments,
                )
                .await;

                messages.push(
                    ChatCompletionRequestToolMessageArgs::default()
                        .tool_call_id(call.id)
                        .content(output)
                        .build()
                        .map_err(|e| AgentError::Llm(e.to_string()))?
                        .into(),
                );
            }
        }

        // Out of tool rounds: force a final answer from what was gathered.
        warn!("tool round limit reached, requesting final answer without tools");

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .build()
            .map_err(|e| AgentError::Llm(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| AgentError::Llm(e.to_string()))?;

        let mut final_response = extract_response(response, start)?;
        final_response.metrics.input_tokens += metrics.input_tokens;
        final_response.metrics.output_tokens += metrics.output_tokens;
        Ok(final_response)
    }
}

/// Runs one tool call, turning every failure mode into text the model can
/// read. A broken search must degrade the findings, not the evaluation.
async fn dispatch_tool_call(tools: &[Arc<dyn Tool>], name: &str, raw_args: &str) -> String {
    let Some(tool) = tools.iter().find(|t| t.name() == name) else {
        warn!("model requested unknown tool '{}'", name);
        return format!("No tool named '{name}' is available.");
    };

    let args = match serde_json::from_str(raw_args) {
        Ok(value) => value,
        Err(e) => {
            warn!("malformed arguments for tool '{}': {}", name, e);
            return format!("The arguments for '{name}' could not be parsed: {e}.");
        }
    };

    match tool.call(args).await {
        Ok(output) => output,
        Err(e) => {
            warn!("tool '{}' failed: {}", name, e);
            format!("The '{name}' tool failed ({e}). Continue with what you have and note the gap.")
        }
    }
}

fn initial_messages(
    system_prompt: &str,
    user_input: &str,
) -> Result<Vec<ChatCompletionRequestMessage>, AgentError> {
    Ok(vec![
        ChatCompletionRequestSystemMessageArgs::default()
            .content(system_prompt)
            .build()
            .map_err(|e| AgentError::Llm(e.to_string()))?
            .into(),
        ChatCompletionRequestUserMessageArgs::default()
            .content(user_input)
            .build()
            .map_err(|e| AgentError::Llm(e.to_string()))?
            .into(),
    ])
}

fn tool_definition(tool: &dyn Tool) -> Result<ChatCompletionTool, AgentError> {
    let function = FunctionObjectArgs::default()
        .name(tool.name())
        .description(tool.description())
        .parameters(tool.parameters())
        .build()
        .map_err(|e| AgentError::Llm(e.to_string()))?;

    ChatCompletionToolArgs::default()
        .r#type(ChatCompletionToolType::Function)
        .function(function)
        .build()
        .map_err(|e| AgentError::Llm(e.to_string()))
}

fn extract_response(
    response: CreateChatCompletionResponse,
    start: Instant,
) -> Result<LlmResponse, AgentError> {
    let (input_tokens, output_tokens) = response
        .usage
        .as_ref()
        .map(|u| (u.prompt_tokens, u.completion_tokens))
        .unwrap_or((0, 0));

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| AgentError::Llm("completion returned no choices".into()))?;

    Ok(LlmResponse {
        content: choice.message.content.unwrap_or_default(),
        metrics: LlmMetrics {
            input_tokens,
            output_tokens,
            elapsed_ms: start.elapsed().as_millis() as u64,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct ProbeTool;

    #[async_trait]
    impl Tool for ProbeTool {
        fn name(&self) -> &str {
            "probe"
        }

        fn description(&self) -> &str {
            "Probes something."
        }

        fn parameters(&self) -> serde_json::Value {
            serde_json::json!({
                "type": "object",
                "properties": { "target": { "type": "string" } },
                "required": ["target"]
            })
        }

        async fn call(&self, args: serde_json::Value) -> Result<String, AgentError> {
            match args.get("target").and_then(|v| v.as_str()) {
                Some(target) => Ok(format!("probed {target}")),
                None => Err(AgentError::Tool("missing target".into())),
            }
        }
    }

    fn model() -> ModelConfig {
        ModelConfig {
            id: "test".into(),
            name: "Test".into(),
            model: "gpt-4o-mini".into(),
            api_base: None,
        }
    }

    #[test]
    fn test_client_rejects_empty_api_key() {
        let err = ChatClient::new(&model(), "  ").unwrap_err();
        assert!(matches!(err, AgentError::Config(_)));
    }

    #[test]
    fn test_tool_definition_carries_schema() {
        let def = tool_definition(&ProbeTool).unwrap();
        assert_eq!(def.function.name, "probe");
        assert_eq!(def.function.description.as_deref(), Some("Probes something."));
        let params = def.function.parameters.unwrap();
        assert_eq!(params["required"][0], "target");
    }

    #[tokio::test]
    async fn test_dispatch_unknown_tool_degrades_to_text() {
        let tools: Vec<Arc<dyn Tool>> = vec![Arc::new(ProbeTool)];
        let out = dispatch_tool_call(&tools, "missing", "{}").await;
        assert!(out.contains("No tool named 'missing'"));
    }

    #[tokio::test]
    async fn test_dispatch_tool_failure_degrades_to_text() {
        let tools: Vec<Arc<dyn Tool>> = vec![Arc::new(ProbeTool)];
        let out = dispatch_tool_call(&tools, "probe", "{}").await;
        assert!(out.contains("failed"));
        assert!(out.contains("note the gap"));
    }

    #[tokio::test]
    async fn test_dispatch_runs_tool() {
        let tools: Vec<Arc<dyn Tool>> = vec![Arc::new(ProbeTool)];
        let out = dispatch_tool_call(&tools, "probe", r#"{"target":"x"}"#).await;
        assert_eq!(out, "probed x");
    }
}

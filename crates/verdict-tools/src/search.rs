//! Google Programmable Search client and its `Tool` adapter.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use verdict_core::{AgentError, Tool};

const SEARCH_API_URL: &str = "https://www.googleapis.com/customsearch/v1";

/// The search API caps `num` at 10; the researcher never needs more than 5.
const MAX_RESULTS: u8 = 5;

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    pub title: String,
    #[serde(default)]
    pub snippet: String,
    pub link: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchResult>,
}

/// Client for the Google Programmable Search JSON API.
pub struct GoogleSearchClient {
    client: Client,
    api_key: String,
    engine_id: String,
}

impl GoogleSearchClient {
    /// Fails when either credential is empty so that misconfiguration
    /// surfaces at startup rather than on the first query.
    pub fn new(api_key: &str, engine_id: &str) -> Result<Self, AgentError> {
        if api_key.trim().is_empty() {
            return Err(AgentError::Config("Google search API key is empty".into()));
        }
        if engine_id.trim().is_empty() {
            return Err(AgentError::Config("search engine id is empty".into()));
        }

        Ok(Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            engine_id: engine_id.to_string(),
        })
    }

    pub async fn search(&self, query: &str, num_results: u8) -> Result<Vec<SearchResult>, AgentError> {
        let num = num_results.clamp(1, MAX_RESULTS);
        debug!("searching for '{}' ({} results)", query, num);

        let response = self
            .client
            .get(SEARCH_API_URL)
            .query(&[
                ("key", self.api_key.as_str()),
                ("cx", self.engine_id.as_str()),
                ("q", query),
                ("num", &num.to_string()),
            ])
            .send()
            .await
            .map_err(|e| AgentError::Search(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AgentError::Search(format!("search API error {status}: {body}")));
        }

        let parsed: SearchResponse = response
            .json()
            .await
            .map_err(|e| AgentError::Search(e.to_string()))?;

        Ok(parsed.items)
    }
}

#[derive(Debug, Deserialize)]
struct SearchArgs {
    query: String,
    #[serde(default = "default_num_results")]
    num_results: u8,
}

fn default_num_results() -> u8 {
    5
}

/// The one capability exposed to the researcher worker.
pub struct SearchTool {
    client: GoogleSearchClient,
}

impl SearchTool {
    pub fn new(client: GoogleSearchClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for SearchTool {
    fn name(&self) -> &str {
        "search"
    }

    fn description(&self) -> &str {
        "Searches the web for current information and returns the top results \
         with title, snippet and link."
    }

    fn parameters(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The search query."
                },
                "num_results": {
                    "type": "integer",
                    "description": "How many results to return (1-5, default 5)."
                }
            },
            "required": ["query"]
        })
    }

    async fn call(&self, args: serde_json::Value) -> Result<String, AgentError> {
        let args: SearchArgs =
            serde_json::from_value(args).map_err(|e| AgentError::Tool(e.to_string()))?;

        let results = self.client.search(&args.query, args.num_results).await?;
        Ok(format_results(&results))
    }
}

fn format_results(results: &[SearchResult]) -> String {
    if results.is_empty() {
        return "No results were found for this query.".to_string();
    }

    results
        .iter()
        .enumerate()
        .map(|(i, r)| format!("{}. {}\n   {}\n   {}", i + 1, r.title, r.snippet, r.link))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_response() {
        let payload = r#"{
            "kind": "customsearch#search",
            "items": [
                {
                    "title": "EcoTrack raises seed round",
                    "snippet": "IoT sensors for sustainable farming...",
                    "link": "https://example.com/ecotrack"
                },
                {
                    "title": "Farm ML platforms compared",
                    "link": "https://example.com/compare"
                }
            ]
        }"#;

        let parsed: SearchResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(parsed.items.len(), 2);
        assert_eq!(parsed.items[0].title, "EcoTrack raises seed round");
        assert!(parsed.items[1].snippet.is_empty());
    }

    #[test]
    fn test_parse_search_response_without_items() {
        let parsed: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.items.is_empty());
    }

    #[test]
    fn test_format_results_numbers_entries() {
        let results = vec![
            SearchResult {
                title: "A".into(),
                snippet: "first".into(),
                link: "https://a.example".into(),
            },
            SearchResult {
                title: "B".into(),
                snippet: "second".into(),
                link: "https://b.example".into(),
            },
        ];

        let text = format_results(&results);
        assert!(text.starts_with("1. A"));
        assert!(text.contains("2. B"));
        assert!(text.contains("https://b.example"));
    }

    #[test]
    fn test_format_results_empty() {
        assert_eq!(format_results(&[]), "No results were found for this query.");
    }

    #[test]
    fn test_search_args_default_count() {
        let args: SearchArgs = serde_json::from_value(serde_json::json!({"query": "rust"})).unwrap();
        assert_eq!(args.num_results, 5);
    }

    #[test]
    fn test_client_rejects_missing_credentials() {
        assert!(GoogleSearchClient::new("", "cx").is_err());
        assert!(GoogleSearchClient::new("key", " ").is_err());
    }
}

mod config;
mod dto;
mod error;
mod handlers;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::body::Body;
use axum::http::{HeaderValue, Request, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use verdict_core::{ModelConfig, Tool};
use verdict_llm::ChatClient;
use verdict_panel::{personas, LlmWorker, Workforce, RESEARCHER_REGISTRATION};
use verdict_tools::{GoogleSearchClient, SearchTool};

use config::Config;

pub struct ServerState {
    pub workforce: Workforce,
    pub evaluation_timeout: Duration,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().unwrap()),
        )
        .compact()
        .init();

    let config = Config::from_env()?;
    let state = Arc::new(init_server_state(&config)?);

    let cors = CorsLayer::new()
        .allow_origin(config.allowed_origin.parse::<HeaderValue>()?)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
                version = ?req.version(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    let app = Router::new()
        .route("/", get(handlers::root))
        .route("/evaluate", post(handlers::evaluate))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the fixed worker pool. Every worker gets its own chat session, and
/// any construction failure aborts startup rather than deferring to the
/// first request.
fn init_server_state(config: &Config) -> Result<ServerState> {
    let model = ModelConfig {
        id: "openai-default".into(),
        name: format!("{} (OpenAI)", config.openai_model),
        model: config.openai_model.clone(),
        api_base: None,
    };

    let search_client = GoogleSearchClient::new(&config.google_api_key, &config.search_engine_id)?;
    let search_tool: Arc<dyn Tool> = Arc::new(SearchTool::new(search_client));

    let coordinator = LlmWorker::coordinator(ChatClient::new(&model, &config.openai_api_key)?);
    let mut workforce = Workforce::new("Hackathon Judges", Arc::new(coordinator));

    for persona in personas() {
        let judge = LlmWorker::judge(persona, ChatClient::new(&model, &config.openai_api_key)?);
        workforce = workforce.register(persona.registration(), Arc::new(judge));
    }

    let researcher = LlmWorker::researcher(
        ChatClient::new(&model, &config.openai_api_key)?,
        Arc::clone(&search_tool),
    );
    workforce = workforce.register(RESEARCHER_REGISTRATION, Arc::new(researcher));

    info!("workforce assembled: {} judges + researcher", personas().len());

    Ok(ServerState {
        workforce,
        evaluation_timeout: config.evaluation_timeout,
    })
}

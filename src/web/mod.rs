//! The single-page form, its results, and the CSV download.

pub mod page;

use crate::config::Config;
use crate::llm::DeepSeekClient;
use crate::pipeline::{self, AnalysisError};
use crate::report::{AnalysisReport, SourceDocument};
use crate::synthesis::Synthesizer;
use crate::utils::io::requirements_csv;
use axum::Router;
use axum::extract::{Form, Path, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use log::{error, info};
use page::PageModel;
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

pub struct AppState {
    synthesizer: Synthesizer,
    current: RwLock<Option<Arc<AnalysisReport>>>,
}

impl AppState {
    pub fn new(synthesizer: Synthesizer) -> Self {
        Self {
            synthesizer,
            current: RwLock::new(None),
        }
    }

    pub async fn current_report(&self) -> Option<Arc<AnalysisReport>> {
        self.current.read().await.clone()
    }
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeForm {
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub code: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/analyze", post(analyze))
        .route("/reports/{id}/requirements.csv", get(download_csv))
        .route("/health", get(health_check))
        .with_state(state)
}

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let client = Arc::new(DeepSeekClient::from_config(&config));
    let synthesizer = Synthesizer::new(client, config.model.clone());
    let state = Arc::new(AppState::new(synthesizer));

    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    info!("Listening on http://{}", config.bind);
    eprintln!("Open http://{} in your browser", config.bind);
    eprintln!("Press Ctrl+C to stop the server");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl+C: {}", e);
    }
}

async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let report = state.current_report().await;
    Html(page::render(&PageModel::for_report(report.as_deref())))
}

async fn analyze(State(state): State<Arc<AppState>>, Form(form): Form<AnalyzeForm>) -> Response {
    let document = SourceDocument::new(form.language, form.code);

    match pipeline::analyze(document.clone(), &state.synthesizer).await {
        Ok(report) => {
            info!(
                "Analysis {} finished with {} requirements",
                report.id,
                report.requirement_count()
            );
            *state.current.write().await = Some(Arc::new(report));
            Redirect::to("/").into_response()
        }
        Err(AnalysisError::EmptySource) => {
            let previous = state.current_report().await;
            let message = AnalysisError::EmptySource.to_string();
            let html = page::render(&PageModel {
                language_tag: &document.language_tag,
                code: &document.text,
                error: Some(&message),
                report: previous.as_deref(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response()
        }
    }
}

async fn download_csv(State(state): State<Arc<AppState>>, Path(id): Path<Uuid>) -> Response {
    let Some(report) = state.current_report().await.filter(|report| report.id == id) else {
        return (StatusCode::NOT_FOUND, "No such analysis").into_response();
    };

    match requirements_csv(&report) {
        Ok(bytes) => (
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", report.csv_file_name()),
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

async fn health_check() -> &'static str {
    "ok"
}

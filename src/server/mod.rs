//! HTTP boundary: routes requests to the catalog and page renderer.
//!
//! Requests are served on a current-thread runtime and every handler reads the
//! filesystem inline, so one request is handled to completion before the next.

pub mod port;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{debug, error, info, warn};

pub use port::{DEFAULT_PORT, PORT_ATTEMPTS, bind_available_port};

use crate::catalog::Archive;
use crate::models::{ConversationSummary, Message, Project};
use crate::render::{render_conversation, render_home, render_project};
use crate::utils::format_path_with_tilde;

#[derive(Clone)]
pub struct AppState {
    pub archive: Arc<Archive>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProjectPageQuery {
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProjectQuery {
    pub project: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConversationQuery {
    pub project: String,
    pub session: String,
}

/// Failure surfaced to the client as a 500
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!(error = ?self.0, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(error: E) -> Self {
        Self(error.into())
    }
}

pub fn build_router(archive: Archive) -> Router {
    let state = AppState { archive: Arc::new(archive) };
    Router::new()
        .route("/", get(home_page))
        .route("/index.html", get(home_page))
        .route("/project", get(project_page))
        .route("/conversation", get(conversation_page))
        .route("/api/projects", get(api_projects))
        .route("/api/conversations", get(api_conversations))
        .route("/api/messages", get(api_messages))
        .fallback(not_found)
        .with_state(state)
}

async fn home_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let projects = state.archive.list_projects()?;
    debug!(projects = projects.len(), "rendering home page");
    Ok(Html(render_home(&projects)))
}

async fn project_page(
    Query(query): Query<ProjectPageQuery>,
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    let conversations = state.archive.list_conversations(&query.name)?;
    debug!(project = %query.name, conversations = conversations.len(), "rendering project page");
    Ok(Html(render_project(&query.name, &conversations)))
}

async fn conversation_page(
    Query(query): Query<ConversationQuery>,
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    let messages = state.archive.list_messages(&query.project, &query.session)?;
    debug!(
        project = %query.project,
        session = %query.session,
        messages = messages.len(),
        "rendering conversation page"
    );
    Ok(Html(render_conversation(&query.project, &query.session, &messages)))
}

async fn api_projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>, AppError> {
    Ok(Json(state.archive.list_projects()?))
}

async fn api_conversations(
    Query(query): Query<ProjectQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<ConversationSummary>>, AppError> {
    Ok(Json(state.archive.list_conversations(&query.project)?))
}

async fn api_messages(
    Query(query): Query<ConversationQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Message>>, AppError> {
    Ok(Json(state.archive.list_messages(&query.project, &query.session)?))
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found")
}

/// Serve the viewer on an already-bound listener until the future is dropped
pub async fn serve(listener: tokio::net::TcpListener, archive: Archive) -> Result<()> {
    axum::serve(listener, build_router(archive)).await.context("HTTP server failed")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

/// Bind a port near `requested_port` and serve until interrupted
pub fn run_server(archive: Archive, requested_port: u16) -> Result<()> {
    let listener = bind_available_port(requested_port, PORT_ATTEMPTS)?;
    let port = listener.local_addr().context("Failed to read bound address")?.port();
    if port != requested_port {
        warn!(requested_port, port, "requested port is in use");
        println!("⚠️  Port {} is in use, using port {} instead", requested_port, port);
    }
    listener.set_nonblocking(true).context("Failed to configure listener")?;

    println!("🚀 Claude Code History Viewer running at http://localhost:{}", port);
    println!("📁 Reading from: {}", format_path_with_tilde(archive.projects_dir()));
    println!("Press Ctrl+C to stop");
    info!(port, projects_dir = %archive.projects_dir().display(), "server started");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::from_std(listener)
            .context("Failed to register listener with runtime")?;
        axum::serve(listener, build_router(archive))
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server failed")
    })?;

    println!("\n👋 Shutting down...");
    Ok(())
}

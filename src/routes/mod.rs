//! Route modules for the word cloud server

pub mod api;
pub mod form;
pub mod health;
pub mod page;

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::document::DocumentInput;
use crate::error::{AppError, Result};
use crate::pipeline::{self, PipelineOutput, RenderConfig};
use crate::state::AppState;

/// Build the full application router
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let body_limit = state.config().upload.max_bytes;

    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/v1/health", get(health::health_check))
        .merge(page::router())
        .nest("/api/v1", api::router())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the pipeline on a blocking thread; parsing and layout are CPU-bound
pub(crate) async fn run_pipeline(
    input: DocumentInput,
    config: RenderConfig,
) -> Result<PipelineOutput> {
    let output = tokio::task::spawn_blocking(move || pipeline::run(&input, &config))
        .await
        .map_err(|e| AppError::Internal(format!("Pipeline task failed: {}", e)))??;
    Ok(output)
}


#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;

    use crate::routes::health::HealthResponse;

    #[tokio::test]
    async fn test_health_endpoints() {
        let server = TestServer::new(app(AppState::default())).unwrap();

        for path in ["/health", "/api/v1/health"] {
            let response = server.get(path).await;
            response.assert_status_ok();
            let health: HealthResponse = response.json();
            assert_eq!(health.status, "healthy");
            assert_eq!(health.service, "wordcloud-server");
        }
    }

    #[tokio::test]
    async fn test_run_pipeline_on_blocking_thread() {
        let output = run_pipeline(
            DocumentInput::Typed("rust rust tokio".into()),
            RenderConfig::default(),
        )
        .await
        .unwrap();
        assert!(output.has_results());
    }
}

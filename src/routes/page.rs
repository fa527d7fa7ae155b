//! The interactive page
//!
//! - GET / - empty page with default settings
//! - POST / - submit the form; the whole pipeline re-runs and the page is
//!   rendered again with the results

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::Html,
    routing::get,
    Router,
};

use super::form::{self, Submission};
use super::run_pipeline;
use crate::document::DocumentInput;
use crate::error::{AppError, Result};
use crate::html::{self, FormView};
use crate::notice::Notice;
use crate::pipeline::{PipelineOutput, RenderConfig};
use crate::state::AppState;

/// Create the page router
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(show_page).post(submit_page))
}

/// GET /
async fn show_page() -> Result<Html<String>> {
    let output = run_pipeline(DocumentInput::default(), RenderConfig::default()).await?;
    Ok(Html(html::render_page(&FormView::default(), &output)))
}

/// POST /
///
/// A cloud that cannot be drawn keeps the page (and the form) and shows the
/// failure as an error notice, with a 422 status.
async fn submit_page(
    State(_state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Html<String>)> {
    let raw = form::read_multipart(multipart).await?;
    let submission = form::decode(raw)?;
    let view = form_view(&submission);

    let Submission {
        input,
        config,
        rejected_upload,
    } = submission;

    let (status, mut output) = match run_pipeline(input, config).await {
        Ok(output) => (StatusCode::OK, output),
        Err(AppError::Render(e)) => {
            tracing::warn!(error = %e, "Word cloud could not be generated");
            let output = PipelineOutput {
                notices: vec![Notice::error(e.to_string())],
                ..PipelineOutput::default()
            };
            (StatusCode::UNPROCESSABLE_ENTITY, output)
        }
        Err(e) => return Err(e),
    };

    if let Some(declared) = rejected_upload {
        output.notices.insert(
            0,
            Notice::error(format!(
                "{} files are not accepted. Please upload a PDF or DOCX file.",
                declared
            )),
        );
    }

    Ok((status, Html(html::render_page(&view, &output))))
}

fn form_view(submission: &Submission) -> FormView {
    FormView {
        mode: submission.input.mode(),
        text: submission.typed_text().to_string(),
        file_name: submission.file_name().map(str::to_string),
        config: submission.config.clone(),
    }
}

//! JSON / SVG API
//!
//! Takes the same multipart fields as the page:
//! - POST /api/v1/cloud - full pipeline output as JSON
//! - POST /api/v1/cloud.svg - the rendered cloud only

use axum::{
    extract::Multipart,
    http::header,
    response::IntoResponse,
    routing::post,
    Json, Router,
};

use super::form::{self, Submission};
use super::run_pipeline;
use crate::error::{AppError, Result};
use crate::notice::NoticeLevel;
use crate::pipeline::{PipelineOutput, EMPTY_INPUT_PROMPT};
use crate::state::AppState;

/// Create the API router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cloud", post(create_cloud))
        .route("/cloud.svg", post(create_cloud_svg))
}

async fn process(multipart: Multipart) -> Result<PipelineOutput> {
    let raw = form::read_multipart(multipart).await?;
    let Submission {
        input,
        config,
        rejected_upload,
    } = form::decode(raw)?;

    if let Some(declared) = rejected_upload {
        return Err(AppError::UnsupportedMediaType(declared));
    }

    run_pipeline(input, config).await
}

/// POST /api/v1/cloud
async fn create_cloud(multipart: Multipart) -> Result<Json<PipelineOutput>> {
    let output = process(multipart).await?;
    tracing::debug!(
        has_results = output.has_results(),
        notices = output.notices.len(),
        "Cloud request processed"
    );
    Ok(Json(output))
}

/// POST /api/v1/cloud.svg
async fn create_cloud_svg(multipart: Multipart) -> Result<impl IntoResponse> {
    let output = process(multipart).await?;

    let cloud = match output.cloud {
        Some(cloud) => cloud,
        None => {
            // an extraction error says more than the generic prompt
            let message = output
                .notices
                .into_iter()
                .find(|n| n.level == NoticeLevel::Error)
                .map(|n| n.message)
                .unwrap_or_else(|| EMPTY_INPUT_PROMPT.to_string());
            return Err(AppError::BadRequest(message));
        }
    };

    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], cloud.svg))
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use axum::http::{header, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::document::PDF_MIME;
    use crate::formats::fixtures;
    use crate::routes::app;
    use crate::routes::test_support::MultipartBody;
    use crate::state::AppState;

    async fn post(uri: &str, body: MultipartBody) -> (StatusCode, Option<String>, Vec<u8>) {
        let response = app(AppState::default())
            .oneshot(body.request(uri))
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_cloud_json() {
        let (status, _, body) = post(
            "/api/v1/cloud",
            MultipartBody::new()
                .text("mode", "type")
                .text("text", "the cat sat on the mat the cat ran")
                .text("width", "400")
                .text("height", "300"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let json: Value = serde_json::from_slice(&body).unwrap();
        let table = json["table"].as_array().unwrap();
        assert_eq!(table[0]["word"], "cat");
        assert_eq!(table[0]["count"], 2);
        assert!(table.iter().all(|row| row["word"] != "the"));
        assert!(table.iter().any(|row| row["word"] == "on" && row["count"] == 1));

        assert_eq!(json["cloud"]["width"], 400);
        assert_eq!(json["cloud"]["height"], 300);
        assert_eq!(json["cloud"]["background"], "white");
        assert!(json["cloud"]["svg"].as_str().unwrap().starts_with("<svg"));
        assert!(json["notices"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_cloud_json_without_text() {
        let (status, _, body) = post("/api/v1/cloud", MultipartBody::new().text("mode", "upload")).await;
        assert_eq!(status, StatusCode::OK);

        let json: Value = serde_json::from_slice(&body).unwrap();
        assert!(json["cloud"].is_null());
        assert!(json["table"].is_null());
        assert_eq!(json["notices"][0]["level"], "info");
    }

    #[tokio::test]
    async fn test_cloud_rejects_unsupported_upload() {
        let (status, _, body) = post(
            "/api/v1/cloud",
            MultipartBody::new()
                .text("mode", "upload")
                .file("file", "photo.png", "image/png", b"\x89PNG\r\n"),
        )
        .await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);

        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "unsupported_media_type");
    }

    #[tokio::test]
    async fn test_cloud_svg() {
        let pdf = fixtures::pdf_with_pages(&[Some("rust rust cargo crate")]);
        let (status, content_type, body) = post(
            "/api/v1/cloud.svg",
            MultipartBody::new()
                .text("mode", "upload")
                .text("background", "black")
                .file("file", "talk.pdf", PDF_MIME, &pdf),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("image/svg+xml"));

        let svg = String::from_utf8(body).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"fill="black""#));
        assert!(svg.contains(">rust</text>"));
    }

    #[tokio::test]
    async fn test_cloud_svg_without_text_is_bad_request() {
        let (status, _, body) = post(
            "/api/v1/cloud.svg",
            MultipartBody::new().text("mode", "type").text("text", "   "),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Please upload a file or enter some text to begin.");
    }

    #[tokio::test]
    async fn test_cloud_svg_corrupt_upload_reports_extraction_error() {
        let (status, _, body) = post(
            "/api/v1/cloud.svg",
            MultipartBody::new()
                .text("mode", "upload")
                .file("file", "broken.pdf", PDF_MIME, b"not a pdf at all"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let json: Value = serde_json::from_slice(&body).unwrap();
        assert!(json["message"].as_str().unwrap().starts_with("PDF error:"));
    }
}

use crate::error::{Result, ServiceError};
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};
use folio::Node;

/// Converts the posted node array into a PDF and returns it as a download.
///
/// The body is decoded here rather than through the `Json` extractor so that
/// every malformed body is reported as `400 InvalidRequest`.
pub async fn generate_pdf(State(state): State<AppState>, body: Bytes) -> Result<impl IntoResponse> {
    let nodes: Vec<Node> = serde_json::from_slice(&body)
        .map_err(|e| ServiceError::InvalidRequest(format!("Invalid JSON: {}", e)))?;
    tracing::info!("Generation request with {} top-level node(s)", nodes.len());

    let _permit = state
        .conversion_semaphore
        .clone()
        .acquire_owned()
        .await
        .map_err(|_| ServiceError::ServiceOverloaded)?;

    let converter = state.converter.clone();
    let pdf_bytes = tokio::task::spawn_blocking(move || converter.convert(&nodes))
        .await
        .map_err(|e| ServiceError::Internal(format!("Conversion task failed: {}", e)))?
        .map_err(|e| {
            tracing::warn!("Conversion failed ({:?}): {}", e.kind(), e);
            ServiceError::GenerationFailed(e.to_string())
        })?;

    tracing::info!("Generation completed ({} bytes)", pdf_bytes.len());

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (header::CONTENT_DISPOSITION, "attachment; filename=document.pdf"),
        ],
        pdf_bytes,
    ))
}

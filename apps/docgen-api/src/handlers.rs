//! HTTP handlers for the document generator API

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use docgen_core::{render_html, DocumentType};
use render_engine::render_pdf;

use crate::error::ApiError;
use crate::identity::Owner;
use crate::models::*;
use crate::state::AppState;

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

/// Serve the raw template HTML for a document type name. Unknown names
/// fall back to the default template rather than erroring.
pub async fn get_template(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<(StatusCode, [(String, String); 1], String), ApiError> {
    let document_type = DocumentType::resolve(&name);
    let html = state.templates.get(document_type)?;

    Ok((
        StatusCode::OK,
        [(
            "Content-Type".to_string(),
            "text/html; charset=utf-8".to_string(),
        )],
        html,
    ))
}

/// Generate a PDF from a document type plus field context.
///
/// Persistence is best-effort and happens only when the request carries an
/// identity: a store failure is logged and the rendered bytes are still
/// delivered to the caller.
pub async fn generate(
    State(state): State<Arc<AppState>>,
    owner: Option<Owner>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<(StatusCode, [(String, String); 2], Vec<u8>), ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;

    let document_type = DocumentType::resolve(&req.document_type);
    let context = req.render_context();

    let html = render_html(&state.templates, document_type, &context)?;

    // PDF conversion is CPU-bound; keep it off the async runtime.
    let base_url = state.asset_base_url.clone();
    let pdf_data = tokio::task::spawn_blocking(move || render_pdf(&html, base_url.as_deref()))
        .await
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("render task panicked: {}", e)))??;

    // Filename keeps the raw requested type string, even when it fell back
    // to the default template.
    let filename = format!("{}_agreement.pdf", req.document_type);

    if let Some(Owner(owner_id)) = owner {
        if let Err(e) = persist_document(&state, &owner_id, document_type, &filename, &pdf_data).await
        {
            // A successful render is delivered regardless of store health.
            tracing::error!("Failed to persist document for {}: {}", owner_id, e);
        }
    }

    Ok((
        StatusCode::OK,
        [
            ("Content-Type".to_string(), "application/pdf".to_string()),
            (
                "Content-Disposition".to_string(),
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        pdf_data,
    ))
}

async fn persist_document(
    state: &AppState,
    owner_id: &str,
    document_type: DocumentType,
    filename: &str,
    pdf_data: &[u8],
) -> Result<String, sqlx::Error> {
    let id = Uuid::new_v4().to_string();

    sqlx::query(
        r#"
        INSERT INTO documents (id, owner_id, document_type, filename, pdf_data, created_at)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(owner_id)
    .bind(document_type.as_str())
    .bind(filename)
    .bind(pdf_data)
    .bind(Utc::now().to_rfc3339())
    .execute(&state.db)
    .await?;

    tracing::info!("Stored document {} for owner {}", id, owner_id);
    Ok(id)
}

/// List the caller's stored documents, newest first, without blobs.
pub async fn list_documents(
    State(state): State<Arc<AppState>>,
    Owner(owner_id): Owner,
) -> Result<Json<Vec<DocumentSummary>>, ApiError> {
    let documents: Vec<DocumentSummary> = sqlx::query_as(
        r#"
        SELECT id, document_type, filename, created_at
        FROM documents
        WHERE owner_id = ?
        ORDER BY created_at DESC
        "#,
    )
    .bind(&owner_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(documents))
}

/// Fetch one stored PDF. Owner-scoped: a document belonging to someone
/// else is indistinguishable from a missing one.
pub async fn get_document(
    State(state): State<Arc<AppState>>,
    Owner(owner_id): Owner,
    Path(id): Path<String>,
) -> Result<(StatusCode, [(String, String); 2], Vec<u8>), ApiError> {
    let document: Option<DbDocument> = sqlx::query_as(
        r#"
        SELECT id, owner_id, document_type, filename, pdf_data, created_at
        FROM documents
        WHERE id = ? AND owner_id = ?
        "#,
    )
    .bind(&id)
    .bind(&owner_id)
    .fetch_optional(&state.db)
    .await?;

    let document = document.ok_or_else(|| ApiError::DocumentNotFound(id))?;

    Ok((
        StatusCode::OK,
        [
            ("Content-Type".to_string(), "application/pdf".to_string()),
            (
                "Content-Disposition".to_string(),
                format!("attachment; filename=\"{}\"", document.filename),
            ),
        ],
        document.pdf_data,
    ))
}

/// Delete one stored document, owner-scoped.
pub async fn delete_document(
    State(state): State<Arc<AppState>>,
    Owner(owner_id): Owner,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let result = sqlx::query(
        r#"
        DELETE FROM documents
        WHERE id = ? AND owner_id = ?
        "#,
    )
    .bind(&id)
    .bind(&owner_id)
    .execute(&state.db)
    .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::DocumentNotFound(id));
    }

    tracing::info!("Deleted document {} for owner {}", id, owner_id);
    Ok(StatusCode::NO_CONTENT)
}

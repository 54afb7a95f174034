//! Data models for the document generator API

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use docgen_core::RenderContext;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// Request to generate a PDF from a template plus context.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    #[serde(default = "default_document_type")]
    pub document_type: String,
    #[serde(default)]
    pub context: HashMap<String, Value>,
}

fn default_document_type() -> String {
    "nda".to_string()
}

impl GenerateRequest {
    /// Coerce the JSON context into the string map the core consumes.
    /// Callers send whatever scalars their form state holds; nulls become
    /// empty (and therefore blank-filled), other scalars are stringified.
    pub fn render_context(&self) -> RenderContext {
        self.context
            .iter()
            .map(|(k, v)| (k.clone(), coerce_value(v)))
            .collect()
    }
}

fn coerce_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Stored document row.
#[derive(Debug, Clone, FromRow)]
pub struct DbDocument {
    pub id: String,
    pub owner_id: String,
    pub document_type: String,
    pub filename: String,
    pub pdf_data: Vec<u8>,
    pub created_at: DateTime<Utc>,
}

/// Document metadata for listings; the blob stays in the database.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct DocumentSummary {
    pub id: String,
    pub document_type: String,
    pub filename: String,
    pub created_at: DateTime<Utc>,
}

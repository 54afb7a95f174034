//! docgen-core
//!
//! The algorithmic core of the document generator: the fixed alias table,
//! context sanitization, placeholder substitution, and the file-backed
//! template store. Everything here is synchronous, deterministic, and free
//! of shared mutable state; callers inject the store and pass a context
//! per request.

pub mod aliases;
pub mod error;
pub mod sanitize;
pub mod substitute;
pub mod templates;

use std::collections::HashMap;

pub use error::TemplateError;
pub use templates::{DocumentType, TemplateStore};

/// Semantic field name -> value, as supplied by the caller.
pub type RenderContext = HashMap<String, String>;

/// Full HTML production for one request: template lookup followed by
/// placeholder substitution. PDF conversion is a separate concern
/// (`render-engine`).
pub fn render_html(
    store: &TemplateStore,
    document_type: DocumentType,
    context: &RenderContext,
) -> Result<String, TemplateError> {
    let template = store.get(document_type)?;
    Ok(substitute::substitute(&template, context))
}

//! File-backed template store.
//!
//! Templates are plain HTML files under a root directory fixed at
//! construction, read-only after process start. Unknown document type
//! names never fail resolution: they deterministically fall back to the
//! default (NDA) template. Only a missing backing file is an error.

use std::path::{Path, PathBuf};

use crate::error::TemplateError;

/// Supported document types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentType {
    Nda,
    Founders,
}

impl DocumentType {
    /// Resolve a caller-supplied type name. Anything that is not
    /// `"founders"` resolves to [`DocumentType::Nda`] — the historical
    /// default-fallback behavior, kept deliberately.
    pub fn resolve(name: &str) -> Self {
        match name {
            "founders" => DocumentType::Founders,
            _ => DocumentType::Nda,
        }
    }

    /// Backing file name under the template root.
    pub fn template_file(&self) -> &'static str {
        match self {
            DocumentType::Nda => "nda-agreement-template.html",
            DocumentType::Founders => "founders-agreement-template.html",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Nda => "nda",
            DocumentType::Founders => "founders",
        }
    }
}

/// Read-only lookup from document type to raw template HTML.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    root: PathBuf,
}

impl TemplateStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load the template body for a resolved document type.
    pub fn get(&self, document_type: DocumentType) -> Result<String, TemplateError> {
        let file_name = document_type.template_file();
        let path = self.root.join(file_name);
        if !path.exists() {
            return Err(TemplateError::NotFound(file_name.to_string()));
        }
        Ok(std::fs::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo_templates() -> TemplateStore {
        TemplateStore::new(concat!(env!("CARGO_MANIFEST_DIR"), "/../../templates"))
    }

    #[test]
    fn test_unknown_type_resolves_to_nda() {
        assert_eq!(DocumentType::resolve("nda"), DocumentType::Nda);
        assert_eq!(DocumentType::resolve("founders"), DocumentType::Founders);
        assert_eq!(DocumentType::resolve("lease"), DocumentType::Nda);
        assert_eq!(DocumentType::resolve(""), DocumentType::Nda);
        assert_eq!(DocumentType::resolve("FOUNDERS"), DocumentType::Nda);
    }

    #[test]
    fn test_known_templates_load_non_empty() {
        let store = repo_templates();
        for doc_type in [DocumentType::Nda, DocumentType::Founders] {
            let html = store.get(doc_type).unwrap();
            assert!(!html.trim().is_empty(), "{:?} template is empty", doc_type);
            assert!(html.contains("{{"), "{:?} template has no placeholders", doc_type);
        }
    }

    #[test]
    fn test_missing_backing_file_is_not_found() {
        let store = TemplateStore::new("/no/such/dir");
        match store.get(DocumentType::Founders) {
            Err(TemplateError::NotFound(name)) => {
                assert_eq!(name, "founders-agreement-template.html")
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }
}

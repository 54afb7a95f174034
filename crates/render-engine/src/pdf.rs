//! The HTML -> PDF conversion itself.

use std::collections::BTreeMap;

use printpdf::{GeneratePdfOptions, PdfDocument};

use crate::error::RenderError;
use crate::html::absolutize;

/// Convert a complete, already-substituted HTML document into PDF bytes.
///
/// `base_url`, when given, is used to resolve relative resource references
/// before conversion. The call is synchronous and stateless; callers that
/// serve requests should run it on a blocking thread.
pub fn render_pdf(html: &str, base_url: Option<&str>) -> Result<Vec<u8>, RenderError> {
    let html = match base_url {
        Some(base) => absolutize(html, base),
        None => html.to_string(),
    };

    let mut warnings = Vec::new();
    // from_html in printpdf 0.8 takes image and font maps for named
    // resources; data-URI images travel inline in the HTML itself.
    let document = PdfDocument::from_html(
        &html,
        &BTreeMap::new(),
        &BTreeMap::new(),
        &GeneratePdfOptions::default(),
        &mut warnings,
    )
    .map_err(|e| RenderError::Conversion(e.to_string()))?;

    let bytes = document.save(&Default::default(), &mut warnings);

    if !warnings.is_empty() {
        tracing::warn!(count = warnings.len(), "PDF conversion produced warnings");
        for warning in &warnings {
            tracing::debug!("pdf warning: {:?}", warning);
        }
    }

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE_DOC: &str = concat!(
        "<!DOCTYPE html><html><head><style>body { font-family: sans-serif; }</style></head>",
        "<body><h1>Agreement</h1><p>Effective 1 March 2026.</p></body></html>",
    );

    #[test]
    fn test_renders_simple_document() {
        let bytes = render_pdf(SIMPLE_DOC, None).unwrap();
        assert!(bytes.starts_with(b"%PDF"), "output is not a PDF stream");
        assert!(bytes.len() > 8, "serialized PDF is truncated");
    }

    #[test]
    fn test_rendering_is_deterministic_per_call_shape() {
        // Same input renders successfully twice; the function holds no
        // state between calls.
        let first = render_pdf(SIMPLE_DOC, None).unwrap();
        let second = render_pdf(SIMPLE_DOC, Some("http://localhost:5000")).unwrap();
        assert!(!first.is_empty());
        assert!(!second.is_empty());
    }
}

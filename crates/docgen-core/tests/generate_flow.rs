//! End-to-end substitution flow against the real shipped templates.

use std::collections::HashSet;

use docgen_core::aliases::ALIASES;
use docgen_core::sanitize::BLANK_FILL;
use docgen_core::substitute;
use docgen_core::{render_html, DocumentType, RenderContext, TemplateStore};

fn store() -> TemplateStore {
    TemplateStore::new(concat!(env!("CARGO_MANIFEST_DIR"), "/../../templates"))
}

fn full_context() -> RenderContext {
    [
        ("COMPANY_NAME", "Acme Ventures Pvt. Ltd."),
        ("COMPANY_ADDRESS", "221B Residency Road, Bengaluru"),
        ("COMPANY_SIGNATURE", "data:image/png;base64,iVBORw0KGgo="),
        ("COMPANY_SIGNATORY_NAME", "R. Iyer"),
        ("COMPANY_SIGNATORY_DESIGNATION", "Director"),
        ("FOUNDER_NAME", "Jordan Mehta"),
        ("FOUNDER_ADDRESS", "14 Lake View Lane, Pune"),
        ("FOUNDER_DESIGNATION", "Chief Technology Officer"),
        ("FOUNDER_SIGNATURE", "data:image/png;base64,AAAB"),
        ("FOUNDER_SALARY", "$120,000"),
        ("FOUNDER_SALARY_WORDS", "one hundred twenty thousand dollars"),
        ("NONCOMPETE_PERIOD", "24 months"),
        ("NOTICE_PERIOD", "60 days"),
        ("SEVERANCE_AMOUNT", "$30,000"),
        ("EFFECTIVE_DATE", "1 March 2026"),
        ("JURISDICTION_CITY", "Bengaluru"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

/// Closure property: shipped templates only ever reference aliased keys.
#[test]
fn test_templates_use_only_aliased_placeholders() {
    let keys: HashSet<&str> = ALIASES.iter().map(|a| a.placeholder).collect();
    let token = regex::Regex::new(r"\{\{\s*([A-Za-z0-9._]+)\s*\}\}").unwrap();

    for doc_type in [DocumentType::Nda, DocumentType::Founders] {
        let html = store().get(doc_type).unwrap();
        for capture in token.captures_iter(&html) {
            let key = capture[1].to_lowercase();
            assert!(
                keys.contains(key.as_str()),
                "{:?} template references unaliased key {}",
                doc_type,
                key
            );
        }
    }
}

#[test]
fn test_full_context_leaves_no_placeholders_behind() {
    let context = full_context();
    for doc_type in [DocumentType::Nda, DocumentType::Founders] {
        let html = render_html(&store(), doc_type, &context).unwrap();
        for alias in ALIASES {
            assert!(
                !substitute::contains_placeholder(&html, alias.placeholder),
                "{:?}: {} survived substitution",
                doc_type,
                alias.placeholder
            );
        }
        assert!(!html.contains(BLANK_FILL));
    }
}

/// Ampersand in the company name, signature left empty.
#[test]
fn test_nda_scenario_escapes_and_blank_fills() {
    let mut context = RenderContext::new();
    context.insert("COMPANY_NAME".into(), "Acme & Co".into());
    context.insert("FOUNDER_SIGNATURE".into(), "".into());

    let html = render_html(&store(), DocumentType::resolve("nda"), &context).unwrap();

    assert!(html.contains("Acme &amp; Co"));
    assert!(!html.contains("Acme & Co"));
    assert!(html.contains(BLANK_FILL));
    for alias in ALIASES {
        assert!(
            !substitute::contains_placeholder(&html, alias.placeholder),
            "{} survived substitution",
            alias.placeholder
        );
    }
}

#[test]
fn test_rendering_is_deterministic() {
    let context = full_context();
    let first = render_html(&store(), DocumentType::Founders, &context).unwrap();
    let second = render_html(&store(), DocumentType::Founders, &context).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_signature_images_carry_raw_data_uri() {
    let html = render_html(&store(), DocumentType::Nda, &full_context()).unwrap();
    assert!(html.contains(r#"<img src="data:image/png;base64,iVBORw0KGgo=" class="signature-image" alt="signature" />"#));
}

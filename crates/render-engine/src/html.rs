//! Pre-conversion HTML fixups.
//!
//! The converter receives a complete document with no notion of where it
//! came from, so relative `src`/`href` references (stylesheets, images
//! served next to the templates) are resolved against the caller's base
//! URL before conversion.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref URL_ATTR: Regex =
        Regex::new(r#"(?i)\b(src|href)\s*=\s*"([^"]*)""#).expect("URL attribute pattern");
}

/// True for references that must not be touched: already absolute,
/// protocol-relative, inline data, or fragment-only.
fn is_absolute(reference: &str) -> bool {
    let lower = reference.to_ascii_lowercase();
    lower.starts_with("http://")
        || lower.starts_with("https://")
        || lower.starts_with("data:")
        || lower.starts_with("//")
        || lower.starts_with('#')
        || lower.is_empty()
}

/// Resolve relative `src`/`href` attribute values against `base_url`.
pub fn absolutize(html: &str, base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    URL_ATTR
        .replace_all(html, |caps: &Captures<'_>| {
            let attr = &caps[1];
            let reference = &caps[2];
            if is_absolute(reference) {
                caps[0].to_string()
            } else {
                format!(r#"{}="{}/{}""#, attr, base, reference.trim_start_matches('/'))
            }
        })
        .into_owned()
}

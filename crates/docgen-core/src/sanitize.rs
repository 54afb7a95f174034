//! Context sanitization: turning one raw context value into the exact
//! string substituted into template HTML.

use crate::aliases::FieldAlias;
use crate::RenderContext;

/// Visible filler substituted when a field was left unfilled. Rendered as a
/// short underscore rule so the gap survives into the printed PDF.
pub const BLANK_FILL: &str = "&nbsp;&nbsp;____________________&nbsp;&nbsp;";

/// Escape `&`, `<`, `>` and nothing else. `&` goes first so entities
/// produced by the later replacements are not re-escaped. Quotes are
/// intentionally left alone; the substitution contract is limited to these
/// three characters.
pub fn escape_text(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Compute the substitution value for one alias against the context.
///
/// Absent or blank values become [`BLANK_FILL`]. A signature field whose
/// value is an embedded image (`data:` URI) becomes an inline `<img>` with
/// the raw value as its source. Everything else is escaped text.
pub fn substitution_value(alias: &FieldAlias, context: &RenderContext) -> String {
    let raw = match context.get(alias.field) {
        Some(v) => v.as_str(),
        None => "",
    };

    if raw.trim().is_empty() {
        return BLANK_FILL.to_string();
    }

    if alias.signature && raw.starts_with("data:") {
        return format!(r#"<img src="{raw}" class="signature-image" alt="signature" />"#);
    }

    escape_text(raw)
}

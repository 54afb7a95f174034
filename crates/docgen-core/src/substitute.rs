//! Placeholder substitution: replace every `{{ key }}` occurrence for each
//! aliased key with its sanitized context value.

use lazy_static::lazy_static;
use regex::{NoExpand, Regex};

use crate::aliases::{FieldAlias, ALIASES};
use crate::sanitize::substitution_value;
use crate::RenderContext;

lazy_static! {
    /// One compiled pattern per alias entry, index-aligned with `ALIASES`.
    /// `(?i)` for case-insensitive keys, `\s*` for arbitrary whitespace
    /// inside the delimiters.
    static ref PLACEHOLDER_PATTERNS: Vec<Regex> = ALIASES
        .iter()
        .map(|alias| {
            Regex::new(&format!(r"(?i)\{{\{{\s*{}\s*\}}\}}", regex::escape(alias.placeholder)))
                .expect("alias placeholder compiles to a valid pattern")
        })
        .collect();
}

fn patterns() -> impl Iterator<Item = (&'static FieldAlias, &'static Regex)> {
    ALIASES.iter().zip(PLACEHOLDER_PATTERNS.iter())
}

/// Substitute all aliased placeholders in `template` with sanitized values
/// from `context`. Placeholders with no alias entry are left verbatim.
///
/// Replacement is literal (`NoExpand`): context values containing `$`
/// (salary and severance amounts, typically) must never be interpreted as
/// capture-group references.
pub fn substitute(template: &str, context: &RenderContext) -> String {
    let mut html = template.to_string();
    for (alias, pattern) in patterns() {
        let value = substitution_value(alias, context);
        html = pattern.replace_all(&html, NoExpand(&value)).into_owned();
    }
    html
}

/// True if `html` still contains the placeholder for `key`, in any case or
/// internal-whitespace variant.
pub fn contains_placeholder(html: &str, key: &str) -> bool {
    patterns()
        .find(|(alias, _)| alias.placeholder == key)
        .map(|(_, pattern)| pattern.is_match(html))
        .unwrap_or(false)
}

//! The fixed alias table: template placeholder key -> semantic field name.
//!
//! Placeholder keys are the dotted identifiers embedded in template HTML as
//! `{{ key }}`; field names are the keys of the caller's context map. The
//! table is fixed at build time and must stay in step with the frontend
//! field names and the shipped templates.

/// One alias table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldAlias {
    /// Dotted placeholder key as written in templates (matched
    /// case-insensitively).
    pub placeholder: &'static str,
    /// Semantic field name in the render context.
    pub field: &'static str,
    /// Signature fields render data-URI values as an inline image instead
    /// of escaped text.
    pub signature: bool,
}

const fn alias(placeholder: &'static str, field: &'static str) -> FieldAlias {
    FieldAlias {
        placeholder,
        field,
        signature: false,
    }
}

const fn signature_alias(placeholder: &'static str, field: &'static str) -> FieldAlias {
    FieldAlias {
        placeholder,
        field,
        signature: true,
    }
}

/// The complete alias table. Order is irrelevant to the substitution
/// result; no entry's value may legally introduce another placeholder
/// token.
pub static ALIASES: &[FieldAlias] = &[
    alias("company.name", "COMPANY_NAME"),
    alias("company.address", "COMPANY_ADDRESS"),
    signature_alias("company.authorized_signatory.signature", "COMPANY_SIGNATURE"),
    alias("authorized.signatory.name", "COMPANY_SIGNATORY_NAME"),
    alias("authorized.signatory.designation", "COMPANY_SIGNATORY_DESIGNATION"),
    alias("founder.name", "FOUNDER_NAME"),
    alias("founder.address", "FOUNDER_ADDRESS"),
    alias("founder.designation", "FOUNDER_DESIGNATION"),
    signature_alias("founder.signature", "FOUNDER_SIGNATURE"),
    alias("founder.salary", "FOUNDER_SALARY"),
    alias("founder.salary.words", "FOUNDER_SALARY_WORDS"),
    alias("noncompete.period", "NONCOMPETE_PERIOD"),
    alias("notice.period", "NOTICE_PERIOD"),
    alias("severance.amount", "SEVERANCE_AMOUNT"),
    alias("effective.date", "EFFECTIVE_DATE"),
    alias("jurisdiction.city", "JURISDICTION_CITY"),
];

//! render-engine
//!
//! HTML -> PDF conversion for fully-substituted documents. One stateless
//! entry point per call; failures carry the underlying converter message
//! and are never retried here.

pub mod error;
pub mod html;
pub mod pdf;

pub use error::RenderError;
pub use pdf::render_pdf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("HTML to PDF conversion failed: {0}")]
    Conversion(String),
}

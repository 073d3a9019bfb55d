use thiserror::Error;

/// Errors that can occur during invoice construction or generation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InvoiceError {
    /// One or more validation rules failed. Aborts before any file is written.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Malformed or incomplete input data (JSON / spreadsheet).
    #[error("input error: {0}")]
    Input(String),

    /// Template missing or failed to render. Fatal.
    #[error("template error: {0}")]
    Render(String),

    /// Missing or inconsistent generator configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Every PDF backend in the chain failed; carries each backend's failure.
    #[error("PDF generation failed (all backends): {0}")]
    PdfGeneration(String),

    /// Underlying file or subprocess I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "items[2].price").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Join a list of validation errors into a single [`InvoiceError::Validation`].
pub fn validation_failure(errors: &[ValidationError]) -> InvoiceError {
    let msg = errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ");
    InvoiceError::Validation(msg)
}

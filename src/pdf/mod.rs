//! PDF generation via an ordered chain of renderer backends.
//!
//! The standard chain tries high-fidelity HTML conversion (wkhtmltopdf)
//! first and falls back to direct structured layout (printpdf). Backends are
//! polymorphic over [`PdfBackend`]; the pipeline iterates until one succeeds
//! or all fail, aggregating every failure into a single error. Nothing is
//! written to disk unless a backend succeeds.

mod generate;
mod layout;
mod wkhtmltopdf;

pub use generate::*;
pub use layout::LayoutBackend;
pub use wkhtmltopdf::WkhtmltopdfBackend;

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::core::{BrandingConfig, DocumentMeta, Invoice, InvoiceError, Summary};

/// Failure of a single backend attempt.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The backend cannot run on this system (e.g. missing binary).
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    /// The job lacks the input this backend needs.
    #[error("missing input: {0}")]
    MissingInput(String),

    /// The backend ran and failed.
    #[error("{0}")]
    Failed(String),
}

/// Structured invoice fields for the non-HTML layout path.
#[derive(Debug, Clone, Copy)]
pub struct FallbackData<'a> {
    pub invoice: &'a Invoice,
    pub summary: &'a Summary,
    pub meta: &'a DocumentMeta,
    pub config: &'a BrandingConfig,
}

/// One logical render request, shared by every backend in the chain.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfJob<'a> {
    /// Pre-rendered HTML for high-fidelity conversion backends.
    pub html: Option<&'a str>,
    /// Structured data for direct-layout backends.
    pub fallback: Option<FallbackData<'a>>,
}

/// A PDF rendering strategy.
pub trait PdfBackend {
    fn name(&self) -> &'static str;

    /// Render the job to PDF bytes.
    fn render(&self, job: &PdfJob<'_>) -> Result<Vec<u8>, BackendError>;
}

/// Successful pipeline output: the bytes and which backend produced them.
#[derive(Debug)]
pub struct RenderedPdf {
    pub bytes: Vec<u8>,
    pub backend: &'static str,
}

/// Ordered list of renderer strategies with fallback semantics.
pub struct PdfPipeline {
    backends: Vec<Box<dyn PdfBackend>>,
}

impl PdfPipeline {
    pub fn new(backends: Vec<Box<dyn PdfBackend>>) -> Self {
        Self { backends }
    }

    /// The standard two-tier chain: wkhtmltopdf, then structured layout.
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(WkhtmltopdfBackend::new()),
            Box::new(LayoutBackend::new()),
        ])
    }

    /// Try each backend in order until one succeeds.
    ///
    /// Every failure is warn-logged and collected; if all backends fail the
    /// result is a single aggregated [`InvoiceError::PdfGeneration`] — or
    /// [`InvoiceError::Config`] when a backend was starved of its input
    /// (e.g. no structured fallback data supplied).
    pub fn render(&self, job: &PdfJob<'_>) -> Result<RenderedPdf, InvoiceError> {
        if self.backends.is_empty() {
            return Err(InvoiceError::Config("no PDF backends configured".into()));
        }

        let mut failures: Vec<(&'static str, BackendError)> = Vec::new();

        for backend in &self.backends {
            match backend.render(job) {
                Ok(bytes) => {
                    if !failures.is_empty() {
                        log::info!("PDF produced by fallback backend '{}'", backend.name());
                    }
                    return Ok(RenderedPdf {
                        bytes,
                        backend: backend.name(),
                    });
                }
                Err(e) => {
                    log::warn!("PDF backend '{}' failed: {e}", backend.name());
                    failures.push((backend.name(), e));
                }
            }
        }

        let joined = failures
            .iter()
            .map(|(name, e)| format!("{name}: {e}"))
            .collect::<Vec<_>>()
            .join("; ");

        // A starved backend (no structured data) is a caller problem, but the
        // aggregate still names every backend's failure.
        if failures
            .iter()
            .any(|(_, e)| matches!(e, BackendError::MissingInput(_)))
        {
            return Err(InvoiceError::Config(joined));
        }
        Err(InvoiceError::PdfGeneration(joined))
    }

    /// Render and write to `path`, creating parent directories as needed.
    /// On failure no file is created or touched.
    pub fn render_to_file(
        &self,
        job: &PdfJob<'_>,
        path: &Path,
    ) -> Result<RenderedPdf, InvoiceError> {
        let rendered = self.render(job)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, &rendered.bytes)?;
        Ok(rendered)
    }
}

//! End-to-end invoice generation: validate, calculate, render HTML, and
//! produce the PDF through the backend chain.

use std::path::{Path, PathBuf};

use crate::core::{
    BrandingConfig, DocumentMeta, Invoice, InvoiceError, InvoiceNumberSequence, Journal, Summary,
    calculate_summary, validate_invoice, validation_failure,
};
use crate::render::HtmlRenderer;

use super::{FallbackData, PdfJob, PdfPipeline};

/// Optional side effects of a generation run.
#[derive(Debug, Default)]
pub struct GenerateOptions {
    /// Also write the rendered HTML next to the PDF (useful for debugging
    /// template changes or when no converter is installed).
    pub html_sidecar: Option<PathBuf>,
    /// Append a journal entry after a successful write.
    pub journal: Option<Journal>,
}

/// What a successful generation produced.
#[derive(Debug)]
pub struct Generated {
    /// Which backend produced the PDF.
    pub backend: &'static str,
    pub summary: Summary,
    pub meta: DocumentMeta,
}

/// Orchestrates the full pipeline for one invoice at a time.
///
/// ```no_run
/// use billcraft::core::{BrandingConfig, InvoiceBuilder};
/// use billcraft::pdf::Generator;
/// use rust_decimal_macros::dec;
///
/// # fn main() -> Result<(), billcraft::core::InvoiceError> {
/// let invoice = InvoiceBuilder::new()
///     .company("ACME Corp", "123 Business Street")
///     .customer("Jane Doe", "jane@example.com")
///     .add_item("Consulting", 2, dec!(49.99))
///     .tax_rate(dec!(0.18))
///     .build()?;
///
/// let mut generator = Generator::new(BrandingConfig::default())?;
/// let result = generator.generate(&invoice, "out/invoice.pdf".as_ref())?;
/// println!("wrote invoice via {}", result.backend);
/// # Ok(())
/// # }
/// ```
pub struct Generator {
    renderer: HtmlRenderer,
    pipeline: PdfPipeline,
    config: BrandingConfig,
    sequence: Option<InvoiceNumberSequence>,
}

impl Generator {
    /// Generator with the embedded template and the standard backend chain.
    pub fn new(config: BrandingConfig) -> Result<Self, InvoiceError> {
        Ok(Self {
            renderer: HtmlRenderer::new()?,
            pipeline: PdfPipeline::standard(),
            config,
            sequence: None,
        })
    }

    /// Generator from explicit parts, for custom templates or backend chains.
    pub fn with_parts(
        renderer: HtmlRenderer,
        pipeline: PdfPipeline,
        config: BrandingConfig,
    ) -> Self {
        Self {
            renderer,
            pipeline,
            config,
            sequence: None,
        }
    }

    /// Number invoices that carry no explicit number from this sequence
    /// instead of deriving one from the timestamp. The sequence rolls over
    /// with each invoice's issue date.
    pub fn with_sequence(mut self, sequence: InvoiceNumberSequence) -> Self {
        self.sequence = Some(sequence);
        self
    }

    pub fn config(&self) -> &BrandingConfig {
        &self.config
    }

    /// Validate, calculate, render, and write the PDF to `output`.
    pub fn generate(
        &mut self,
        invoice: &Invoice,
        output: &Path,
    ) -> Result<Generated, InvoiceError> {
        self.generate_with(invoice, output, &GenerateOptions::default())
    }

    /// [`generate`](Self::generate) with side-effect options.
    pub fn generate_with(
        &mut self,
        invoice: &Invoice,
        output: &Path,
        options: &GenerateOptions,
    ) -> Result<Generated, InvoiceError> {
        let errors = validate_invoice(invoice);
        if !errors.is_empty() {
            return Err(validation_failure(&errors));
        }

        let summary = calculate_summary(&invoice.items, invoice.tax_rate, invoice.discount);
        let mut meta = DocumentMeta::resolve(invoice, self.config.settings.default_due_days);
        if invoice.number.is_none() {
            if let Some(sequence) = self.sequence.as_mut() {
                sequence.roll_year(meta.issue_date);
                meta.number = sequence.next_number();
            }
        }
        let html = self.renderer.render(invoice, &summary, &meta, &self.config)?;

        if let Some(sidecar) = &options.html_sidecar {
            if let Some(parent) = sidecar.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(sidecar, &html)?;
        }

        let job = PdfJob {
            html: Some(&html),
            fallback: Some(FallbackData {
                invoice,
                summary: &summary,
                meta: &meta,
                config: &self.config,
            }),
        };
        let rendered = self.pipeline.render_to_file(&job, output)?;
        log::info!(
            "invoice {} written to {} via '{}'",
            meta.number,
            output.display(),
            rendered.backend
        );

        if let Some(journal) = &options.journal {
            journal.record(output, summary.total);
        }

        Ok(Generated {
            backend: rendered.backend,
            summary,
            meta,
        })
    }
}

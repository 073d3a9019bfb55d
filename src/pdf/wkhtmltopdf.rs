//! High-fidelity HTML-to-PDF conversion through the `wkhtmltopdf` binary.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use super::{BackendError, PdfBackend, PdfJob};

/// Primary backend: pipes rendered HTML through `wkhtmltopdf` on stdin and
/// reads the PDF from stdout. Unavailable when the binary is not on PATH.
#[derive(Debug)]
pub struct WkhtmltopdfBackend {
    binary: Option<PathBuf>,
}

impl WkhtmltopdfBackend {
    /// Locate `wkhtmltopdf` on PATH.
    pub fn new() -> Self {
        let binary = which::which("wkhtmltopdf").ok();
        if binary.is_none() {
            log::debug!("wkhtmltopdf not found in PATH");
        }
        Self { binary }
    }

    /// Use an explicit binary path instead of searching PATH.
    pub fn with_binary(path: impl Into<PathBuf>) -> Self {
        Self {
            binary: Some(path.into()),
        }
    }

    /// Whether the converter binary was found.
    pub fn is_available(&self) -> bool {
        self.binary.is_some()
    }
}

impl Default for WkhtmltopdfBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfBackend for WkhtmltopdfBackend {
    fn name(&self) -> &'static str {
        "wkhtmltopdf"
    }

    fn render(&self, job: &PdfJob<'_>) -> Result<Vec<u8>, BackendError> {
        let html = job
            .html
            .ok_or_else(|| BackendError::MissingInput("no rendered HTML provided".into()))?;
        let binary = self
            .binary
            .as_ref()
            .ok_or_else(|| BackendError::Unavailable("wkhtmltopdf not found in PATH".into()))?;

        let mut child = Command::new(binary)
            .args(["--quiet", "--encoding", "utf-8", "-", "-"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| BackendError::Failed(format!("failed to spawn wkhtmltopdf: {e}")))?;

        {
            let mut stdin = child
                .stdin
                .take()
                .ok_or_else(|| BackendError::Failed("failed to open wkhtmltopdf stdin".into()))?;
            stdin
                .write_all(html.as_bytes())
                .map_err(|e| BackendError::Failed(format!("failed to write HTML: {e}")))?;
            // stdin drops here, signalling EOF to the converter
        }

        let output = child
            .wait_with_output()
            .map_err(|e| BackendError::Failed(format!("wkhtmltopdf did not finish: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(BackendError::Failed(format!(
                "wkhtmltopdf exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }
        if output.stdout.is_empty() {
            return Err(BackendError::Failed(
                "wkhtmltopdf produced no output".into(),
            ));
        }

        Ok(output.stdout)
    }
}

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use rust_decimal::Decimal;

/// Append-only generation journal: one timestamped line per generated
/// invoice.
///
/// Best effort by contract — a failed append is logged with `log::warn!` and
/// swallowed so it can never abort invoice generation.
#[derive(Debug, Clone)]
pub struct Journal {
    path: PathBuf,
}

impl Journal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record a generated invoice. Fire-and-forget.
    pub fn record(&self, file: &Path, total: Decimal) {
        if let Err(e) = self.append(file, total) {
            log::warn!("journal append to {} failed: {e}", self.path.display());
        }
    }

    fn append(&self, file: &Path, total: Decimal) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut out = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(
            out,
            "{} | INFO | Invoice Generated | File: {} | Amount: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            file.display(),
            total,
        )
    }
}

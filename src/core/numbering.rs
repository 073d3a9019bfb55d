use chrono::{Datelike, NaiveDate};

/// Issues gapless sequential document numbers like `INV-2026-007`.
///
/// The year is part of the number; a year rollover restarts the counter at 1.
/// State lives in memory only — a caller that persists the last issued count
/// can continue the series with [`resume_from`](Self::resume_from). Attach a
/// sequence to a [`Generator`](crate::pdf::Generator) to number invoices that
/// carry no explicit number of their own.
#[derive(Debug, Clone)]
pub struct InvoiceNumberSequence {
    prefix: String,
    year: i32,
    issued: u64,
    width: usize,
}

impl InvoiceNumberSequence {
    /// Fresh series for `year`; the first issued number ends in 1.
    pub fn new(prefix: impl Into<String>, year: i32) -> Self {
        Self {
            prefix: prefix.into(),
            year,
            issued: 0,
            width: 3,
        }
    }

    /// Continue a series of which `issued` numbers already exist.
    pub fn resume_from(prefix: impl Into<String>, year: i32, issued: u64) -> Self {
        Self {
            issued,
            ..Self::new(prefix, year)
        }
    }

    /// Digits the counter is zero-padded to (default 3, so `001`).
    pub fn padded(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Issue the next number in the series.
    pub fn next_number(&mut self) -> String {
        self.issued += 1;
        self.format(self.issued)
    }

    /// The number [`next_number`](Self::next_number) would issue, without
    /// issuing it.
    pub fn peek(&self) -> String {
        self.format(self.issued + 1)
    }

    /// Wind the series forward when `date` falls in a later year, restarting
    /// the counter. Returns whether a rollover happened.
    pub fn roll_year(&mut self, date: NaiveDate) -> bool {
        if date.year() <= self.year {
            return false;
        }
        self.year = date.year();
        self.issued = 0;
        true
    }

    fn format(&self, n: u64) -> String {
        format!("{}{}-{:0>width$}", self.prefix, self.year, n, width = self.width)
    }
}

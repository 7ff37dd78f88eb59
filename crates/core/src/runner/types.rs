//! Types for the run driver.

use crate::converter::JobOutcome;

/// Emitted before each job starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunProgress {
    /// 1-based position of the job.
    pub index: usize,
    /// Number of jobs in the run.
    pub total: usize,
    /// `artist - album - track`.
    pub label: String,
}

/// Per-outcome counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Jobs produced by the scan.
    pub total: usize,
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
    /// Entries the scan passed over.
    pub ignored: usize,
}

impl RunSummary {
    pub(crate) fn record(&mut self, outcome: &JobOutcome) {
        match outcome {
            JobOutcome::Converted => self.converted += 1,
            JobOutcome::Skipped => self.skipped += 1,
            JobOutcome::Failed { .. } => self.failed += 1,
        }
    }
}

//! Types for the converter module.

/// Per-run flags applied to every job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Re-encode even when the output file already exists.
    pub overwrite: bool,
    /// Log skipped outputs.
    pub verbose: bool,
}

/// Final state of a job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOutcome {
    /// The encoder produced the output file.
    Converted,
    /// The output already existed and overwrite was off.
    Skipped,
    /// The encoder failed; any partial output was removed.
    Failed { reason: String },
}

impl JobOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

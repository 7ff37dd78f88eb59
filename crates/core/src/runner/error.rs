use thiserror::Error;

use crate::converter::ConvertError;
use crate::library::ScanError;

/// Fatal errors that abort a run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Convert(#[from] ConvertError),
}

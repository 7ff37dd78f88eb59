//! Sequential driver: scan the library, then convert each job in order.

mod error;
mod run;
mod types;

pub use error::RunError;
pub use run::{run, run_library};
pub use types::{RunProgress, RunSummary};

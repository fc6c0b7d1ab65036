//! Batch Pipeline
//!
//! Drives admissibility and cleaning over extracted (function, docstring)
//! pairs.
//!
//! ```text
//! FunctionRecord ─▶ admissibility ─▶ cleaner ─▶ restatement ─▶ RecordResult
//!        (rayon, one record per task, input order kept)
//! ```

mod orchestrator;
mod record;
mod result;

pub use orchestrator::DocstringFilterPipeline;
pub use record::FunctionRecord;
pub use result::{FilterStats, PipelineOutput, RecordResult};

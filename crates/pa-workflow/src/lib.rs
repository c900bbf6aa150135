pub mod commands;
pub mod output;
pub mod render;
pub mod report;

pub use commands::{Workflow, WorkflowInputs, DEFAULT_BILINGUAL, DEFAULT_REFERENCE};
pub use output::{derive_output_path, write_tagged, OutputStatus};
pub use report::{AlignmentRun, FullRun, InputInfo, Report};

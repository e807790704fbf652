#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod apply;
pub mod error;
pub mod ops;
pub mod output;
pub mod pattern;
pub mod plan;
pub mod preview;
pub mod scanner;

pub use apply::{apply_plan, ApplyReport, RenameOutcome};
pub use error::Error;
pub use ops::{apply_operation, plan_operation};
pub use output::{ApplyResult, OutputFormat, OutputFormatter, PlanResult};
pub use pattern::NumberedName;
pub use plan::{build_plan, Conflict, ConflictKind, Plan, PlanOptions, Rename};
pub use preview::{render_plan, should_use_color, Preview};
pub use scanner::{scan_directory, FileEntry, Scan, ScanOptions};

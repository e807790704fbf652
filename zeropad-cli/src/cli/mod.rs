pub mod args;
pub mod types;

pub use args::Cli;
pub use types::{OutputFormatArg, PreviewArg};

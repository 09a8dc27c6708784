//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Provides implementations for all CLI commands.
//! Each command is in its own submodule for maintainability.

pub mod analyze;
pub mod languages;
pub mod platforms;

pub use analyze::{execute_analyze, AnalyzeOptions, OutputFormat};
pub use languages::execute_languages;
pub use platforms::execute_platforms;

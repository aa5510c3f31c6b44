//! Presentation layer: renders settled view states as terminal output.

mod commands;

pub use commands::{CliNotifier, CommandContext, run};

// Application layer - use cases over the live suite state.
// The interactive menu and the one-shot subcommands both go through SuiteService.

pub mod error;
pub mod reporting;
pub mod service;

pub use error::*;
pub use reporting::*;
pub use service::*;

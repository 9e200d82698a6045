//! Command-line interface.
//!
//! Provides:
//! - Argument parsing
//! - The interactive Download / Browse / Export session

pub mod args;
pub mod session;

pub use args::{Args, Command, PlatformArg};
pub use session::run_session;

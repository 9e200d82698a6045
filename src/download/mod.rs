//! Download module.
//!
//! This module provides:
//! - Request validation and platform routing
//! - History recording for successful downloads
//! - Streaming HTTP bodies to disk

pub mod dispatcher;
pub mod transfer;

pub use dispatcher::{DispatchOutcome, DispatchState, Dispatcher, DownloadRequest};
pub use transfer::save_response;

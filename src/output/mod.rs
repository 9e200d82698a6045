//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output
//! - Progress bars
//! - Table rendering for history and directory listings

pub mod console;
pub mod progress;
pub mod table;

pub use console::{
    print_banner, print_config_summary, print_error, print_header, print_help, print_info,
    print_success, print_warning,
};
pub use progress::{create_download_bar, create_spinner};
pub use table::{print_table, render_table};

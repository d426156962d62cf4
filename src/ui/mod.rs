//! User interface module - all terminal output goes through here.
//!
//! - `formatter` - Pure formatting functions and their printing wrappers

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_commit_rejection, display_error, display_setup_report, display_status,
    display_success, display_warning, format_commit_rejection, format_setup_report,
};

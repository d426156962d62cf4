pub mod cli;
pub mod config;
pub mod conventional;
pub mod domain;
pub mod error;
pub mod hooks;
pub mod ui;

pub use error::{CrucialyError, Result};

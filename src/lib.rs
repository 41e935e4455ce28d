//! Checks a Mega-Sena bet against the archive of past draws.
//!
//! - [`archive`] parses the semicolon-delimited draw archive
//! - [`checker`] matches a bet against every loaded draw
//! - [`reports`] renders a [`types::BetReport`] as text or JSON

pub mod archive;
pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod reports;
pub mod types;
pub mod utils;

pub use archive::*;
pub use checker::*;
pub use error::*;
pub use types::*;

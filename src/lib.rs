//! Building blocks for readable assertion failures
//!
//! - [`numeric`]: zero-value defaults and bounded comparisons
//! - [`format`]: type-tagged value rendering and aligned label blocks
//! - [`caller`]: the user-code caller chain at failure time
//! - [`report`]: full failure messages composed from the above

pub mod caller;
pub mod cli;
pub mod config;
mod error;
pub mod format;
pub mod numeric;
pub mod report;

pub use config::Config;
pub use error::{Error, Result};
pub use report::{Failure, not_equal_failure, not_equal_message};

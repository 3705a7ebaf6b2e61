pub mod config;
pub mod core;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::core::coerce::{coerce_int, coerce_int_checked};
pub use crate::core::resource::{read_text, LocalResource, ResourceReader};
pub use crate::utils::error::{ErrorCategory, ErrorSeverity, GuardrailError, Result};

pub mod coerce;
pub mod resource;

pub use crate::core::coerce::{coerce_int, coerce_int_checked};
pub use crate::core::resource::{read_text, LocalResource, ResourceReader};
pub use crate::utils::error::Result;

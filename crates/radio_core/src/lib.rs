//! Radio schedule core types.
//!
//! Program and station models, the static station registry, the fallback
//! schedule and time formatting helpers.

mod fallback;
mod models;
pub mod station;
mod time;

pub use crate::fallback::fallback_programs;
pub use crate::models::*;
pub use crate::time::{format_clock, format_window};

//! Program fetching for the schedule page.
//!
//! [`ScheduleController`] owns the view state of the page. It asks a
//! [`ProgramSource`] for the schedule of the selected station and applies the
//! configured [`FailurePolicy`] when that fails.

mod controller;
mod error;
mod source;

pub use crate::controller::{FailurePolicy, FetchTicket, ScheduleController, ViewState};
pub use crate::error::FetchError;
pub use crate::source::{DEFAULT_ENDPOINT, HttpProgramSource, ProgramSource};

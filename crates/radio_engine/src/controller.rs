use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{Local, NaiveDate};
use radio_core::{Program, fallback_programs};
use serde::{Deserialize, Serialize};

use crate::{FetchError, ProgramSource};

/// What the page does when a fetch fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Replace the schedule with the placeholder programs.
    #[default]
    Fallback,
    /// Clear the schedule and show the failure message.
    ShowError,
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fallback" => Ok(FailurePolicy::Fallback),
            "show-error" => Ok(FailurePolicy::ShowError),
            other => Err(format!(
                "unknown failure policy {other:?} (expected \"fallback\" or \"show-error\")"
            )),
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailurePolicy::Fallback => f.write_str("fallback"),
            FailurePolicy::ShowError => f.write_str("show-error"),
        }
    }
}

/// Everything the page needs to render the program area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub station_id: String,
    pub loading: bool,
    pub error: Option<String>,
    pub programs: Vec<Program>,
}

/// Identifies one issued request. Only the ticket of the latest selection
/// may change the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    station_id: String,
}

#[derive(Debug)]
struct Inner {
    view: ViewState,
    generation: u64,
}

/// Drives the program fetch for the selected station and owns the view state.
#[derive(Clone)]
pub struct ScheduleController {
    source: Arc<dyn ProgramSource>,
    policy: FailurePolicy,
    today: fn() -> NaiveDate,
    inner: Arc<Mutex<Inner>>,
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

impl ScheduleController {
    /// A controller starts out loading, as the first fetch is issued on mount.
    pub fn new(
        source: Arc<dyn ProgramSource>,
        policy: FailurePolicy,
        station_id: impl Into<String>,
    ) -> Self {
        ScheduleController {
            source,
            policy,
            today: local_today,
            inner: Arc::new(Mutex::new(Inner {
                view: ViewState {
                    station_id: station_id.into(),
                    loading: true,
                    error: None,
                    programs: Vec::new(),
                },
                generation: 0,
            })),
        }
    }

    /// Override the date the fallback schedule is anchored on.
    pub fn with_today(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> ViewState {
        self.lock().view.clone()
    }

    /// Record a new selection and enter the loading state.
    ///
    /// Any request issued before this call becomes stale.
    pub fn select_station(&self, station_id: &str) -> FetchTicket {
        let mut inner = self.lock();
        inner.generation += 1;
        inner.view.station_id = station_id.to_string();
        inner.view.loading = true;
        inner.view.error = None;

        FetchTicket {
            generation: inner.generation,
            station_id: station_id.to_string(),
        }
    }

    /// Issue the first fetch for the current selection.
    pub async fn mount(&self) -> bool {
        let station_id = self.lock().view.station_id.clone();
        let ticket = self.select_station(&station_id);
        self.load(ticket).await
    }

    /// Switch to another station and fetch its schedule.
    pub async fn change_station(&self, station_id: &str) -> bool {
        let ticket = self.select_station(station_id);
        self.load(ticket).await
    }

    /// Fetch the schedule for `ticket` and apply the outcome.
    ///
    /// Returns `false` when a newer selection superseded the request.
    pub async fn load(&self, ticket: FetchTicket) -> bool {
        tracing::info!("Loading programs for station {}", ticket.station_id);
        let outcome = self.source.fetch_programs(&ticket.station_id).await;
        self.complete(&ticket, outcome)
    }

    /// Apply the outcome of the request identified by `ticket`.
    pub fn complete(
        &self,
        ticket: &FetchTicket,
        outcome: Result<Vec<Program>, FetchError>,
    ) -> bool {
        let mut inner = self.lock();
        if ticket.generation != inner.generation || ticket.station_id != inner.view.station_id {
            tracing::debug!(
                "Discarding stale programs for station {} (generation {}, current {})",
                ticket.station_id,
                ticket.generation,
                inner.generation
            );
            return false;
        }

        let view = &mut inner.view;
        match outcome {
            Ok(programs) => {
                tracing::info!(
                    "Loaded {} programs for station {}",
                    programs.len(),
                    ticket.station_id
                );
                view.programs = programs;
                view.error = None;
            }
            Err(error) => match self.policy {
                FailurePolicy::Fallback => {
                    tracing::warn!(
                        "Programs API call failed for station {}, using fallback data: {:?}",
                        ticket.station_id,
                        error
                    );
                    view.programs = fallback_programs(&ticket.station_id, (self.today)());
                    view.error = None;
                }
                FailurePolicy::ShowError => {
                    tracing::warn!(
                        "Programs API call failed for station {}: {:?}",
                        ticket.station_id,
                        error
                    );
                    view.programs.clear();
                    view.error = Some(error.to_string());
                }
            },
        }
        view.loading = false;
        true
    }
}

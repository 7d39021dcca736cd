use chrono::{DateTime, NaiveDateTime};

fn parse_local(iso: &str) -> Option<NaiveDateTime> {
    let iso = iso.trim();
    iso.parse::<NaiveDateTime>()
        .or_else(|_| NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M"))
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(iso)
                .ok()
                .map(|datetime| datetime.naive_local())
        })
}

/// Format an ISO-8601 datetime as a 24-hour `HH:MM` wall clock time.
///
/// Strings carrying an offset keep the wall clock time of that offset.
/// Anything unparseable is returned unchanged.
pub fn format_clock(iso: &str) -> String {
    match parse_local(iso) {
        Some(datetime) => datetime.format("%H:%M").to_string(),
        None => {
            tracing::debug!("Unparseable program time {:?}", iso);
            iso.to_string()
        }
    }
}

/// Format a program time window as `HH:MM - HH:MM`.
pub fn format_window(starts_at: &str, ends_at: &str) -> String {
    format!("{} - {}", format_clock(starts_at), format_clock(ends_at))
}

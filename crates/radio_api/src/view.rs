use maud::{DOCTYPE, Markup, Render, html};
use radio_core::{Program, format_window, station};
use radio_engine::ViewState;

pub const PAGE_TITLE: &str = "Radio Program Schedule";

/// Markup emitted as-is, without escaping.
///
/// Only wrap content whose source is trusted not to be hostile. Everything
/// else goes through maud's escaping.
pub struct TrustedHtml<'a>(pub &'a str);

impl Render for TrustedHtml<'_> {
    fn render_to(&self, buffer: &mut String) {
        buffer.push_str(self.0);
    }
}

/// Render the whole schedule page for the given state.
///
/// `base_path` is where the page itself is mounted, used as the selector
/// form target.
pub fn render_page(state: &ViewState, base_path: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="description" content="Display radio program schedule from API";
                title { (PAGE_TITLE) }
            }
            body {
                main class="container" {
                    h1 { (PAGE_TITLE) }
                    (station_selector(&state.station_id, base_path))
                    (program_area(state))
                }
            }
        }
    }
}

fn station_selector(current: &str, base_path: &str) -> Markup {
    let action = if base_path.is_empty() { "/" } else { base_path };
    html! {
        form class="station-selector" method="get" action=(action) {
            label for="station-select" { "ラジオ局を選択:" }
            select id="station-select" name="stationId" class="station-select" onchange="this.form.submit()" {
                @for station in station::all() {
                    option value=(station.id) selected[station.id == current] { (station.name) }
                }
            }
            noscript {
                button type="submit" { "表示" }
            }
        }
    }
}

/// Loading wins over error, error wins over the list.
fn program_area(state: &ViewState) -> Markup {
    if state.loading {
        return html! { div class="loading" { "Loading programs..." } };
    }
    if let Some(error) = &state.error {
        return html! { div class="error" { "Error: " (error) } };
    }

    html! {
        div class="programs" {
            @if state.programs.is_empty() {
                p { "No programs available" }
            } @else {
                @for program in &state.programs {
                    (program_card(program))
                }
            }
        }
    }
}

fn program_card(program: &Program) -> Markup {
    html! {
        div class="program-card" {
            h2 { (program.title) }
            p class="time" { (format_window(&program.starts_at, &program.ends_at)) }
            p class="station" { (program.station_name) }
            @if !program.performer.is_empty() {
                p class="performer" { "出演: " (program.performer) }
            }
            @if !program.info.is_empty() {
                div class="description" { (TrustedHtml(&program.info)) }
            }
            @if !program.tags.is_empty() {
                div class="tags" {
                    @for tag in &program.tags {
                        span class="tag" { (tag) }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use radio_core::fallback_programs;

    fn program(id: &str, title: &str, starts_at: &str, ends_at: &str) -> Program {
        Program {
            id: id.into(),
            station_id: "TBS".into(),
            station_name: "TBSラジオ".into(),
            day: "2025-06-28".into(),
            starts_at: starts_at.into(),
            ends_at: ends_at.into(),
            duration: 3600,
            title: title.into(),
            performer: "Test Host".into(),
            description: None,
            info: "Start your day with music and news".into(),
            tags: vec!["morning".into(), "news".into()],
            url: "https://example.com".into(),
        }
    }

    fn state(loading: bool, error: Option<&str>, programs: Vec<Program>) -> ViewState {
        ViewState {
            station_id: "TBS".into(),
            loading,
            error: error.map(str::to_string),
            programs,
        }
    }

    fn render(state: &ViewState) -> String {
        render_page(state, "").into_string()
    }

    #[test]
    fn test_loading_hides_program_area() {
        // Programs and error from an earlier fetch must not leak through
        let page = render(&state(
            true,
            Some("Failed to fetch"),
            vec![program("1", "Morning Show", "2025-06-28T06:00:00", "2025-06-28T09:00:00")],
        ));

        assert!(page.contains("Loading programs..."));
        assert!(!page.contains("Morning Show"));
        assert!(!page.contains("Error:"));
        assert!(!page.contains("No programs available"));
    }

    #[test]
    fn test_programs_render_title_and_window() {
        let page = render(&state(
            false,
            None,
            vec![
                program("1", "Morning Show", "2025-06-28T06:00:00", "2025-06-28T09:00:00"),
                program("2", "Evening News", "2025-06-28T18:00:00", "2025-06-28T19:00:00"),
            ],
        ));

        assert!(page.contains("<h2>Morning Show</h2>"));
        assert!(page.contains("<h2>Evening News</h2>"));
        assert!(page.contains("06:00 - 09:00"));
        assert!(page.contains("18:00 - 19:00"));
        assert!(page.contains("Start your day with music and news"));
        assert!(page.contains("出演: Test Host"));
        assert!(page.contains(r#"<span class="tag">morning</span>"#));
        assert!(!page.contains("Loading programs..."));
        assert!(!page.contains("Error:"));
    }

    #[test]
    fn test_empty_list_message() {
        let page = render(&state(false, None, vec![]));
        assert!(page.contains("No programs available"));
        assert!(!page.contains("program-card"));
    }

    #[test]
    fn test_error_message() {
        let page = render(&state(false, Some("Failed to fetch"), vec![]));
        assert!(page.contains("Error: Failed to fetch"));
        assert!(!page.contains("No programs available"));
    }

    #[test]
    fn test_fallback_schedule_renders() {
        let day = NaiveDate::from_ymd_opt(2025, 6, 28).unwrap();
        let page = render(&state(false, None, fallback_programs("TBS", day)));

        for title in ["モーニングショー", "お昼のニュース", "イブニングトーク"] {
            assert!(page.contains(title), "missing {title}");
        }
        assert!(page.contains("06:00 - 09:00"));
        assert!(page.contains("12:00 - 13:00"));
        assert!(page.contains("18:00 - 20:00"));
    }

    #[test]
    fn test_title_present_in_every_state() {
        let states = [
            state(true, None, vec![]),
            state(false, Some("Failed to fetch"), vec![]),
            state(false, None, vec![]),
            state(
                false,
                None,
                vec![program("1", "Morning Show", "2025-06-28T06:00:00", "2025-06-28T09:00:00")],
            ),
        ];
        for state in &states {
            let page = render(state);
            assert!(page.contains("<title>Radio Program Schedule</title>"));
            assert!(page.contains("<h1>Radio Program Schedule</h1>"));
        }
    }

    #[test]
    fn test_info_is_trusted_but_other_fields_are_escaped() {
        let mut entry = program("1", "<script>x</script>", "2025-06-28T06:00:00", "2025-06-28T07:00:00");
        entry.info = "<b>bold</b> &amp; more".into();
        entry.performer = "A & B".into();
        let page = render(&state(false, None, vec![entry]));

        assert!(page.contains(r#"<div class="description"><b>bold</b> &amp; more</div>"#));
        assert!(page.contains("&lt;script&gt;x&lt;/script&gt;"));
        assert!(!page.contains("<script>x</script>"));
        assert!(page.contains("出演: A &amp; B"));
    }

    #[test]
    fn test_optional_parts_are_omitted() {
        let mut entry = program("1", "Quiet Hour", "2025-06-28T01:00:00", "2025-06-28T02:00:00");
        entry.performer.clear();
        entry.info.clear();
        entry.tags.clear();
        let page = render(&state(false, None, vec![entry]));

        assert!(page.contains("Quiet Hour"));
        assert!(!page.contains("出演:"));
        assert!(!page.contains(r#"class="description""#));
        assert!(!page.contains(r#"class="tags""#));
    }

    #[test]
    fn test_selector_lists_stations_and_marks_selection() {
        let mut current = state(false, None, vec![]);
        current.station_id = "FMJ".into();
        let page = render_page(&current, "/radioproglist").into_string();

        assert!(page.contains(r#"action="/radioproglist""#));
        assert!(page.contains(r#"<option value="FMJ" selected>J-WAVE</option>"#));
        assert!(page.contains(r#"<option value="TBS">TBSラジオ</option>"#));
        assert_eq!(page.matches("<option ").count(), station::all().len());
    }
}

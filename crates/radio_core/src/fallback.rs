use chrono::NaiveDate;

use crate::models::Program;
use crate::station;

const FALLBACK_URL: &str = "https://example.com";

struct Slot {
    title: &'static str,
    performer: &'static str,
    starts: &'static str,
    ends: &'static str,
    duration: u32,
    info: &'static str,
    tags: &'static [&'static str],
}

const SLOTS: [Slot; 3] = [
    Slot {
        title: "モーニングショー",
        performer: "メインパーソナリティ",
        starts: "06:00:00",
        ends: "09:00:00",
        duration: 10800,
        info: "朝の情報番組です。ニュース、天気、音楽をお届けします。",
        tags: &["morning", "news", "music"],
    },
    Slot {
        title: "お昼のニュース",
        performer: "ニュースキャスター",
        starts: "12:00:00",
        ends: "13:00:00",
        duration: 3600,
        info: "正午のニュースをお伝えします。",
        tags: &["news"],
    },
    Slot {
        title: "イブニングトーク",
        performer: "トークホスト",
        starts: "18:00:00",
        ends: "20:00:00",
        duration: 7200,
        info: "夕方のトーク番組。ゲストとの対談や音楽をお楽しみください。",
        tags: &["talk", "music", "guest"],
    },
];

/// Build the placeholder schedule shown when the programs API is unreachable.
///
/// Always three entries (morning, noon, evening) on `day`. The output only
/// depends on the arguments.
pub fn fallback_programs(station_id: &str, day: NaiveDate) -> Vec<Program> {
    let station_name = station::display_name(station_id).to_string();
    let day = day.format("%Y-%m-%d").to_string();

    SLOTS
        .iter()
        .enumerate()
        .map(|(idx, slot)| Program {
            id: format!("{}-{}", station_id, idx + 1),
            station_id: station_id.to_string(),
            station_name: station_name.clone(),
            day: day.clone(),
            starts_at: format!("{}T{}", day, slot.starts),
            ends_at: format!("{}T{}", day, slot.ends),
            duration: slot.duration,
            title: slot.title.to_string(),
            performer: slot.performer.to_string(),
            description: None,
            info: slot.info.to_string(),
            tags: slot.tags.iter().map(|tag| tag.to_string()).collect(),
            url: FALLBACK_URL.to_string(),
        })
        .collect()
}

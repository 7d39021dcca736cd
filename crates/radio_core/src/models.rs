use serde::{Deserialize, Deserializer, Serialize};

/// A single schedule entry as served by the programs API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub id: String,
    #[serde(rename = "stationID")]
    pub station_id: String,
    pub station_name: String,
    /// Broadcast date, `YYYY-MM-DD`.
    pub day: String,
    /// Start, ISO-8601 local datetime.
    #[serde(rename = "ft")]
    pub starts_at: String,
    /// End, ISO-8601 local datetime.
    #[serde(rename = "to")]
    pub ends_at: String,
    /// Duration in seconds. Not checked against `starts_at`/`ends_at`.
    #[serde(rename = "dur")]
    pub duration: u32,
    pub title: String,
    #[serde(rename = "pfm", default, deserialize_with = "null_as_default")]
    pub performer: String,
    #[serde(rename = "desc", default)]
    pub description: Option<String>,
    /// Short info text. May carry markup from the upstream.
    #[serde(default, deserialize_with = "null_as_default")]
    pub info: String,
    #[serde(rename = "tag", default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    pub url: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A radio broadcaster from the static registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Station {
    pub id: &'static str,
    pub name: &'static str,
}

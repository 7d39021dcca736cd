use crate::models::Station;

/// Station selected when nothing else is asked for.
pub const DEFAULT_STATION_ID: &str = "TBS";

static STATIONS: &[Station] = &[
    Station { id: "TBS", name: "TBSラジオ" },
    Station { id: "QRR", name: "文化放送" },
    Station { id: "LFR", name: "ニッポン放送" },
    Station { id: "INT", name: "InterFM897" },
    Station { id: "RN1", name: "ラジオNIKKEI第1" },
    Station { id: "RN2", name: "ラジオNIKKEI第2" },
    Station { id: "FMT", name: "TOKYO FM" },
    Station { id: "FMJ", name: "J-WAVE" },
    Station { id: "JORF", name: "ラジオ日本" },
    Station { id: "BAYFM78", name: "bayfm" },
    Station { id: "NACK5", name: "NACK5" },
    Station { id: "JOAK", name: "NHKラジオ第1" },
    Station { id: "YFM", name: "FMヨコハマ" },
    Station { id: "JOAK-FM", name: "NHK FM" },
    Station { id: "IBS", name: "茨城放送" },
];

/// All known stations, in selector order.
pub fn all() -> &'static [Station] {
    STATIONS
}

pub fn find(station_id: &str) -> Option<&'static Station> {
    STATIONS.iter().find(|station| station.id == station_id)
}

/// Return the display name of a station.
///
/// Unknown identifiers are returned as-is, so callers always have something
/// to show.
pub fn display_name(station_id: &str) -> &str {
    find(station_id).map_or(station_id, |station| station.name)
}

/// Every stored record is keyed by a random UUID, independent of backend.
pub type RecordId = uuid::Uuid;

/// Creation timestamps are UTC milliseconds since the Unix epoch.
pub type EpochMillis = i64;

/// Current wall-clock time in epoch milliseconds.
pub fn now_millis() -> EpochMillis {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a fresh record identifier.
pub fn new_record_id() -> RecordId {
    uuid::Uuid::new_v4()
}

/// Serde adapter for `HH:MM` times of day.
///
/// Serializes without seconds. Deserializes `HH:MM` and `HH:MM:SS`, since
/// `<input type="time">` emits either depending on the browser.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(serde::de::Error::custom)
    }

    /// Parse `HH:MM` or `HH:MM:SS`.
    pub fn parse(raw: &str) -> Result<NaiveTime, String> {
        let raw = raw.trim();
        NaiveTime::parse_from_str(raw, FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
            .map_err(|_| format!("invalid time '{raw}', expected HH:MM"))
    }
}

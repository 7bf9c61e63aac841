use chrono::{DateTime, NaiveDateTime, SubsecRound, Utc};

/// Current time truncated to milliseconds, the precision kept on disk.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Serde adapter writing `YYYY-MM-DDTHH:MM:SS.sssZ`, always 24 characters,
/// so stored timestamps sort the same as strings and as instants.
pub mod millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        DateTime::<Utc>::deserialize(deserializer)
    }
}

/// Human-readable `YYYY-MM-DD HH:MM`.
///
/// Accepts RFC 3339 as well as the zone-less `YYYY-MM-DDTHH:MM` produced by
/// datetime-local inputs. Anything else is returned unchanged.
pub fn format_date_time(raw: &str) -> String {
    const OUT: &str = "%Y-%m-%d %H:%M";

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Utc).format(OUT).to_string();
    }
    for pattern in ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, pattern) {
            return naive.format(OUT).to_string();
        }
    }
    raw.to_string()
}

use chrono::{Local, NaiveDateTime, SecondsFormat, TimeDelta, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// SQLite storage format for `entries.ts`.
/// Fixed width, so string comparison in SQLite orders chronologically.
pub const TS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// One logged food/metric record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// ⇔ entries.id, assigned by the store (0 = not persisted yet)
    #[serde(default, skip_serializing_if = "is_unsaved")]
    pub id: i64,
    /// ⇔ entries.ts (local time; RFC 3339 with the local offset on the wire)
    #[serde(with = "ts_format")]
    pub ts: NaiveDateTime,
    pub food: String,
    #[serde(default)]
    pub sugar_g: f64,
    #[serde(default)]
    pub water_cups: f64,
    #[serde(default)]
    pub insulin_units: f64,
}

fn is_unsaved(id: &i64) -> bool {
    *id == 0
}

impl Entry {
    /// Build an entry that has not been stored yet.
    pub fn new(
        ts: NaiveDateTime,
        food: impl Into<String>,
        sugar_g: f64,
        water_cups: f64,
        insulin_units: f64,
    ) -> Self {
        Self {
            id: 0,
            ts,
            food: food.into(),
            sugar_g,
            water_cups,
            insulin_units,
        }
    }

    pub fn ts_str(&self) -> String {
        self.ts.format(TS_FORMAT).to_string()
    }

    pub fn time_str(&self) -> String {
        self.ts.format("%H:%M").to_string()
    }

    /// Copy of this entry carrying the id assigned by the store.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }
}

/// Local naive time as RFC 3339 carrying the local UTC offset,
/// e.g. `2025-03-01T23:00:00.000000+09:00`.
///
/// A time skipped by a DST jump is moved one hour forward.
pub fn to_local_rfc3339(ts: &NaiveDateTime) -> String {
    let local = Local
        .from_local_datetime(ts)
        .earliest()
        .or_else(|| {
            Local
                .from_local_datetime(&(*ts + TimeDelta::hours(1)))
                .earliest()
        })
        .unwrap_or_else(|| Utc.from_utc_datetime(ts).with_timezone(&Local));

    local.to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// Parse a stored/remote timestamp.
///
/// Accepts naive ISO values (`2025-03-01T08:30:00`, with or without fraction,
/// `T` or space separated) and RFC 3339 values with an offset, which are
/// converted to local time.
pub fn parse_ts(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local).naive_local());
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

mod ts_format {
    use super::{parse_ts, to_local_rfc3339};
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    // offset-carrying, so `timestamptz` columns store the right instant
    pub fn serialize<S: Serializer>(ts: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&to_local_rfc3339(ts))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        parse_ts(&raw).ok_or_else(|| D::Error::custom(format!("invalid timestamp '{raw}'")))
    }
}

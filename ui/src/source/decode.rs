//! Response decoding and unit normalization.
//!
//! Every `graph` response is an envelope `{ "data": ... }`. A `null` payload
//! (Go encodes empty slices that way) decodes as an empty dataset; a missing
//! `data` key or a payload of the wrong shape is a [`FetchError::Parse`].

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use super::{
    ConcurrencyPoint, CountryShare, DatasetKind, DatasetRows, FetchError, HourBucket,
    PlayerRoster, ReparseAck, RosterPlayer, TimeSpentRow,
};

const NANOS_PER_SECOND: f64 = 1e9;
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Convert a nanosecond duration to hours rounded to one decimal place.
///
/// `3_600_000_000_000` ns is exactly `1.0`. Negative input clamps to zero.
pub fn ns_to_hours(nanos: f64) -> f64 {
    if !nanos.is_finite() || nanos <= 0.0 {
        return 0.0;
    }
    let hours = (nanos / NANOS_PER_SECOND) / SECONDS_PER_HOUR;
    round_to_tenth(hours)
}

/// Nearest tenth of the exact stored value, halves rounding up.
///
/// Scaling by ten first would turn `1.1499..` into `11.5` and round the wrong
/// way, so off-midpoint values go through float formatting, which rounds the
/// exact binary value. The only midpoints a double can hold exactly are
/// `x.25` and `x.75`.
fn round_to_tenth(value: f64) -> f64 {
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 == 1.0 {
        return (value * 10.0).ceil() / 10.0;
    }
    format!("{value:.1}").parse().unwrap_or(value)
}

#[derive(Deserialize)]
struct RawTimeSpent {
    nick_name: String,
    time_spent: f64,
}

#[derive(Deserialize)]
struct RawCountry {
    country: String,
    percentage: f64,
}

#[derive(Deserialize)]
struct RawRoster {
    #[serde(default)]
    count: i64,
    #[serde(default)]
    player: Option<Vec<RawPlayer>>,
}

#[derive(Deserialize)]
struct RawPlayer {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Score", default)]
    score: i64,
    #[serde(rename = "Duration", default)]
    duration: f64,
}

#[derive(Deserialize)]
struct RawConcurrency {
    hour: HourBucket,
    #[serde(alias = "concurent_players_count")]
    concurrent_players_count: f64,
}

/// Decode a `graph` response body for `kind`.
pub fn decode_dataset(kind: DatasetKind, body: &str) -> Result<DatasetRows, FetchError> {
    let payload = envelope_payload(body)?;

    let rows = match kind {
        DatasetKind::TopTimeSpent => DatasetRows::TopTimeSpent(
            list::<RawTimeSpent>(payload)?
                .into_iter()
                .map(|raw| TimeSpentRow {
                    nickname: raw.nick_name,
                    time_spent_hours: ns_to_hours(raw.time_spent),
                })
                .collect(),
        ),
        DatasetKind::CountryDistribution => DatasetRows::CountryDistribution(
            list::<RawCountry>(payload)?
                .into_iter()
                .map(|raw| CountryShare {
                    country: raw.country,
                    percentage: clamp_percentage(raw.percentage),
                })
                .collect(),
        ),
        DatasetKind::PlayerRoster => {
            let raw: Option<RawRoster> = serde_json::from_value(payload)?;
            DatasetRows::PlayerRoster(raw.map(roster_from_raw).unwrap_or_default())
        }
        DatasetKind::OnlineConcurrency => DatasetRows::OnlineConcurrency(
            list::<RawConcurrency>(payload)?
                .into_iter()
                .map(|raw| ConcurrencyPoint {
                    hour: raw.hour,
                    concurrent_players: non_negative_count(raw.concurrent_players_count),
                })
                .collect(),
        ),
    };

    Ok(rows)
}

/// Decode the reparse acknowledgement. Any JSON object is accepted.
pub fn decode_ack(body: &str) -> Result<ReparseAck, FetchError> {
    let value: Value = serde_json::from_str(body)?;
    if !value.is_object() {
        return Err(FetchError::Parse("reparse acknowledgement is not an object".into()));
    }
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Extract the backend's `{"error": "..."}` message from an error body.
pub fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("error")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|msg| !msg.is_empty())
        .map(str::to_string)
}

fn envelope_payload(body: &str) -> Result<Value, FetchError> {
    let mut value: Value = serde_json::from_str(body)?;
    match value.get_mut("data") {
        Some(data) => Ok(data.take()),
        None => Err(FetchError::Parse("response has no `data` field".into())),
    }
}

fn list<T: DeserializeOwned>(payload: Value) -> Result<Vec<T>, FetchError> {
    let rows: Option<Vec<T>> = serde_json::from_value(payload)?;
    Ok(rows.unwrap_or_default())
}

fn roster_from_raw(raw: RawRoster) -> PlayerRoster {
    PlayerRoster {
        connected_count: u32::try_from(raw.count.max(0)).unwrap_or(u32::MAX),
        players: raw
            .player
            .unwrap_or_default()
            .into_iter()
            .map(|p| RosterPlayer {
                name: p.name,
                score: p.score,
                duration_seconds: if p.duration.is_finite() {
                    p.duration.max(0.0)
                } else {
                    0.0
                },
            })
            .collect(),
    }
}

fn clamp_percentage(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

fn non_negative_count(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    value.round().min(u32::MAX as f64) as u32
}

//! Typed rows for each dataset the dashboard renders.

use std::fmt;

use serde::Deserialize;

/// One named category of statistics served by the backend `graph` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    TopTimeSpent,
    CountryDistribution,
    PlayerRoster,
    OnlineConcurrency,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 4] = [
        DatasetKind::TopTimeSpent,
        DatasetKind::CountryDistribution,
        DatasetKind::PlayerRoster,
        DatasetKind::OnlineConcurrency,
    ];

    /// Value of the `type` query parameter understood by `/api/v1/graph`.
    pub fn query_value(self) -> &'static str {
        match self {
            DatasetKind::TopTimeSpent => "top-time-spent",
            DatasetKind::CountryDistribution => "top-country",
            DatasetKind::PlayerRoster => "players-info",
            DatasetKind::OnlineConcurrency => "online-statistics",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.query_value())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimeSpentRow {
    pub nickname: String,
    pub time_spent_hours: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CountryShare {
    pub country: String,
    /// Share of connections in `[0, 100]`.
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlayerRoster {
    pub connected_count: u32,
    pub players: Vec<RosterPlayer>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RosterPlayer {
    pub name: String,
    pub score: i64,
    pub duration_seconds: f64,
}

/// Bucket label on the concurrency timeline. The backend emits hour numbers,
/// but string labels are accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum HourBucket {
    Number(i64),
    Label(String),
}

impl fmt::Display for HourBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HourBucket::Number(hour) => write!(f, "{hour:02}:00"),
            HourBucket::Label(label) => f.write_str(label),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConcurrencyPoint {
    pub hour: HourBucket,
    pub concurrent_players: u32,
}

/// Decoded payload of a dataset; the variant always matches the requested kind.
#[derive(Debug, Clone, PartialEq)]
pub enum DatasetRows {
    TopTimeSpent(Vec<TimeSpentRow>),
    CountryDistribution(Vec<CountryShare>),
    PlayerRoster(PlayerRoster),
    OnlineConcurrency(Vec<ConcurrencyPoint>),
}

impl DatasetRows {
    pub fn kind(&self) -> DatasetKind {
        match self {
            DatasetRows::TopTimeSpent(_) => DatasetKind::TopTimeSpent,
            DatasetRows::CountryDistribution(_) => DatasetKind::CountryDistribution,
            DatasetRows::PlayerRoster(_) => DatasetKind::PlayerRoster,
            DatasetRows::OnlineConcurrency(_) => DatasetKind::OnlineConcurrency,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            DatasetRows::TopTimeSpent(rows) => rows.is_empty(),
            DatasetRows::CountryDistribution(rows) => rows.is_empty(),
            DatasetRows::PlayerRoster(roster) => {
                roster.players.is_empty() && roster.connected_count == 0
            }
            DatasetRows::OnlineConcurrency(rows) => rows.is_empty(),
        }
    }

    pub fn as_time_spent(&self) -> Option<&[TimeSpentRow]> {
        match self {
            DatasetRows::TopTimeSpent(rows) => Some(rows),
            _ => None,
        }
    }

    pub fn as_countries(&self) -> Option<&[CountryShare]> {
        match self {
            DatasetRows::CountryDistribution(rows) => Some(rows),
            _ => None,
        }
    }

    pub fn as_roster(&self) -> Option<&PlayerRoster> {
        match self {
            DatasetRows::PlayerRoster(roster) => Some(roster),
            _ => None,
        }
    }

    pub fn as_concurrency(&self) -> Option<&[ConcurrencyPoint]> {
        match self {
            DatasetRows::OnlineConcurrency(rows) => Some(rows),
            _ => None,
        }
    }
}

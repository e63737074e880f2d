use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::entity::readings;
use crate::error::AppError;
use crate::repository::readings::{DEFAULT_TIMESPAN_SECONDS, NewReading};

#[derive(Debug, Serialize, ToSchema)]
pub struct ReadingResponse {
    pub id: i32,
    pub voltage: f64,
    pub current: f64,
    pub power: f64,
    pub energy: f64,
    pub temperature: f64,
    pub is_started: bool,
    pub time_now: String,
    pub timestamp: DateTime<Utc>,
}

impl From<readings::Model> for ReadingResponse {
    fn from(r: readings::Model) -> Self {
        Self {
            id: r.id,
            voltage: r.voltage,
            current: r.current,
            power: r.power,
            energy: r.energy,
            temperature: r.temperature,
            is_started: r.is_started,
            time_now: r.time_now,
            timestamp: r.timestamp,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateReadingResponse {
    pub message: String,
    /// Storage-assigned identifier of the new reading
    pub id: i32,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct HistoryQuery {
    /// Maximum number of readings to return (default 100)
    pub limit: Option<u64>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct TimespanQuery {
    /// Trailing window as `<integer><unit>` with unit in {s, m, h, d},
    /// e.g. "10s" or "5m". Malformed tokens fall back to 5 minutes.
    pub timespan: Option<String>,
}

/// Ingest payload as sent by the embedded controller.
///
/// The controller also sends `source` and sometimes a `timestamp`; both are
/// accepted so old firmware keeps working, but `source` is only logged and
/// the timestamp is always re-assigned server-side.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ReadingPayload {
    pub voltage: Option<f64>,
    pub current: Option<f64>,
    pub power: Option<f64>,
    pub energy: Option<f64>,
    pub temperature: Option<f64>,
    pub is_started: Option<bool>,
    pub time_now: Option<String>,
    pub source: Option<String>,
    pub timestamp: Option<String>,
}

impl ReadingPayload {
    /// Validate required fields and apply defaults for the optional ones.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` when any of `voltage`, `current`,
    /// `power`, `energy` is absent. `temperature` is not required even
    /// though it has a default.
    pub fn into_record(self) -> Result<NewReading, AppError> {
        let (Some(voltage), Some(current), Some(power), Some(energy)) =
            (self.voltage, self.current, self.power, self.energy)
        else {
            return Err(AppError::Validation("Missing required fields".to_string()));
        };

        Ok(NewReading {
            voltage,
            current,
            power,
            energy,
            temperature: self.temperature.unwrap_or(30.0),
            is_started: self.is_started.unwrap_or(false),
            time_now: self.time_now.unwrap_or_else(|| "00:00:00".to_string()),
        })
    }
}

/// Parse a timespan token of the form `<integer><unit>` into seconds.
///
/// Unit is one of `s`, `m`, `h`, `d`. Anything malformed falls back to the
/// 300-second default rather than failing the request; the dashboard treats
/// the window selector as best-effort.
#[must_use]
pub fn parse_timespan(token: &str) -> i64 {
    let Some(unit) = token.chars().last() else {
        return DEFAULT_TIMESPAN_SECONDS;
    };

    let digits = &token[..token.len() - unit.len_utf8()];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return DEFAULT_TIMESPAN_SECONDS;
    }
    let Ok(value) = digits.parse::<i64>() else {
        return DEFAULT_TIMESPAN_SECONDS;
    };

    match unit {
        's' => value,
        'm' => value * 60,
        'h' => value * 3600,
        'd' => value * 86400,
        _ => DEFAULT_TIMESPAN_SECONDS,
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::settings;
use crate::error::AppError;
use crate::repository::settings::{SettingsRecord, Source};

#[derive(Debug, Serialize, ToSchema)]
pub struct SettingsResponse {
    pub id: i32,
    pub setpoint: f64,
    pub setpoint_percent: f64,
    pub source: String,
    pub cut_off_voltage: f64,
    pub cut_off_energy: f64,
    pub timer_value: String,
}

impl From<settings::Model> for SettingsResponse {
    fn from(s: settings::Model) -> Self {
        Self {
            id: s.id,
            setpoint: s.setpoint,
            setpoint_percent: s.setpoint_percent,
            source: s.source,
            cut_off_voltage: s.cut_off_voltage,
            cut_off_energy: s.cut_off_energy,
            timer_value: s.timer_value,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateSettingsResponse {
    pub message: String,
    /// The canonical record as written, fallbacks included
    pub data: SettingsRecord,
}

/// Settings payload as sent by dashboard clients.
///
/// Older dashboard builds send camelCase field names; the `_compat` fields
/// capture those so [`SettingsPayload::normalize`] can prefer the
/// snake_case value and fall back to the camelCase one.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SettingsPayload {
    pub setpoint: Option<f64>,
    pub setpoint_percent: Option<f64>,
    #[serde(rename = "setpointPercent")]
    pub setpoint_percent_compat: Option<f64>,
    pub source: Option<String>,
    pub cut_off_voltage: Option<f64>,
    #[serde(rename = "cutOffVoltage")]
    pub cut_off_voltage_compat: Option<f64>,
    pub cut_off_energy: Option<f64>,
    #[serde(rename = "cutOffEnergy")]
    pub cut_off_energy_compat: Option<f64>,
    pub timer_value: Option<String>,
    #[serde(rename = "timerValue")]
    pub timer_value_compat: Option<String>,
    pub is_started: Option<bool>,
    #[serde(rename = "isStarted")]
    pub is_started_compat: Option<bool>,
}

impl SettingsPayload {
    /// Map the heterogeneous payload to one canonical record: resolve the
    /// dual naming, enforce required fields, apply field-level fallbacks.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` when `setpoint` is absent or `source`
    /// is missing or outside {AC, DC, NO}.
    pub fn normalize(self) -> Result<SettingsRecord, AppError> {
        let Some(setpoint) = self.setpoint else {
            return Err(AppError::Validation(
                "Missing required field: setpoint".to_string(),
            ));
        };

        let source = self
            .source
            .as_deref()
            .and_then(Source::parse)
            .ok_or_else(|| {
                AppError::Validation(
                    "Invalid or missing source value. Must be AC, DC, or NO".to_string(),
                )
            })?;

        // A zero setpoint is written as 500. Historical quirk the device
        // firmware depends on: it sends 0 to mean "unset".
        let setpoint = if setpoint == 0.0 { 500.0 } else { setpoint };

        Ok(SettingsRecord {
            setpoint,
            setpoint_percent: self
                .setpoint_percent
                .or(self.setpoint_percent_compat)
                .unwrap_or(5.0),
            source,
            cut_off_voltage: self
                .cut_off_voltage
                .or(self.cut_off_voltage_compat)
                .unwrap_or(70.5),
            cut_off_energy: self
                .cut_off_energy
                .or(self.cut_off_energy_compat)
                .unwrap_or(2000.0),
            timer_value: self
                .timer_value
                .or(self.timer_value_compat)
                .unwrap_or_else(|| "00:00:00".to_string()),
            is_started: self.is_started.or(self.is_started_compat),
        })
    }
}

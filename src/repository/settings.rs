use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, Set};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::settings::{self, SETTINGS_ROW_ID};

/// Power-input mode for a test run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Source {
    #[serde(rename = "AC")]
    Ac,
    #[serde(rename = "DC")]
    Dc,
    #[serde(rename = "NO")]
    No,
}

impl Source {
    /// Parse the wire value; anything outside {AC, DC, NO} is rejected.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "AC" => Some(Self::Ac),
            "DC" => Some(Self::Dc),
            "NO" => Some(Self::No),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ac => "AC",
            Self::Dc => "DC",
            Self::No => "NO",
        }
    }
}

/// Canonical settings record after boundary normalization, with every
/// field-level fallback already applied.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SettingsRecord {
    pub setpoint: f64,
    pub setpoint_percent: f64,
    pub source: Source,
    pub cut_off_voltage: f64,
    pub cut_off_energy: f64,
    pub timer_value: String,
    /// Accepted from clients and echoed back, but not stored: run state
    /// lives on the readings, not the settings row.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_started: Option<bool>,
}

/// The singleton settings row, or `None` before the first write.
pub async fn get(db: &DatabaseConnection) -> Result<Option<settings::Model>, DbErr> {
    settings::Entity::find_by_id(SETTINGS_ROW_ID).one(db).await
}

/// Create-or-update the singleton row in one statement. Targeting the
/// reserved id through an on-conflict upsert keeps two concurrent writers
/// from ever producing a second row.
pub async fn upsert(db: &DatabaseConnection, record: &SettingsRecord) -> Result<(), DbErr> {
    let model = settings::ActiveModel {
        id: Set(SETTINGS_ROW_ID),
        setpoint: Set(record.setpoint),
        setpoint_percent: Set(record.setpoint_percent),
        source: Set(record.source.as_str().to_string()),
        cut_off_voltage: Set(record.cut_off_voltage),
        cut_off_energy: Set(record.cut_off_energy),
        timer_value: Set(record.timer_value.clone()),
    };

    let result = settings::Entity::insert(model)
        .on_conflict(
            OnConflict::column(settings::Column::Id)
                .update_columns([
                    settings::Column::Setpoint,
                    settings::Column::SetpointPercent,
                    settings::Column::Source,
                    settings::Column::CutOffVoltage,
                    settings::Column::CutOffEnergy,
                    settings::Column::TimerValue,
                ])
                .to_owned(),
        )
        .exec(db)
        .await;

    match result {
        Ok(_) => Ok(()),
        // The update arm yields no last_insert_id for a non-auto-increment
        // key; the row was still written.
        Err(DbErr::RecordNotInserted) => Ok(()),
        Err(e) => Err(e),
    }
}

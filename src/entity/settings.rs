use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Reserved id of the singleton row. The service only ever reads and
/// writes this id, so at most one record can exist.
pub const SETTINGS_ROW_ID: i32 = 1;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub setpoint: f64,
    pub setpoint_percent: f64,
    /// Power-input mode: "AC", "DC", or "NO"
    pub source: String,
    pub cut_off_voltage: f64,
    pub cut_off_energy: f64,
    pub timer_value: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

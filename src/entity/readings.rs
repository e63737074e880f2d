use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "readings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub voltage: f64,
    pub current: f64,
    pub power: f64,
    pub energy: f64,
    pub temperature: f64,
    pub is_started: bool,
    /// Device-local elapsed time ("00:00:00"), distinct from `timestamp`
    pub time_now: String,
    /// Server-assigned wall-clock time at insert
    pub timestamp: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

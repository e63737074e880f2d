use chrono::{DateTime, Duration, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use crate::entity::readings;

/// A fully validated, fully defaulted reading ready for insert. The
/// timestamp is deliberately absent: it is assigned here, never by the
/// device.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReading {
    pub voltage: f64,
    pub current: f64,
    pub power: f64,
    pub energy: f64,
    pub temperature: f64,
    pub is_started: bool,
    pub time_now: String,
}

/// Most recent reading by timestamp, or `None` when the table is empty.
pub async fn latest(db: &DatabaseConnection) -> Result<Option<readings::Model>, DbErr> {
    readings::Entity::find()
        .order_by_desc(readings::Column::Timestamp)
        .one(db)
        .await
}

/// Up to `limit` readings, most recent first (recent-activity feed order).
pub async fn history(db: &DatabaseConnection, limit: u64) -> Result<Vec<readings::Model>, DbErr> {
    readings::Entity::find()
        .order_by_desc(readings::Column::Timestamp)
        .limit(limit)
        .all(db)
        .await
}

/// Fallback window applied when a timespan is missing, malformed, or too
/// large to represent (5 minutes).
pub const DEFAULT_TIMESPAN_SECONDS: i64 = 300;

/// Cutoff instant for a trailing window of `seconds`.
///
/// A well-formed token can still carry a value no datetime arithmetic can
/// hold; such windows degrade to the default instead of overflowing,
/// the same way malformed tokens degrade at parse time.
#[must_use]
pub fn window_cutoff(seconds: i64) -> DateTime<Utc> {
    Duration::try_seconds(seconds)
        .and_then(|window| Utc::now().checked_sub_signed(window))
        .unwrap_or_else(|| Utc::now() - Duration::seconds(DEFAULT_TIMESPAN_SECONDS))
}

/// Readings within the trailing `seconds` window, oldest first.
///
/// Ascending order is intentional: this query feeds time-series plots,
/// while [`history`] feeds reverse-chronological activity feeds.
pub async fn history_by_timespan(
    db: &DatabaseConnection,
    seconds: i64,
) -> Result<Vec<readings::Model>, DbErr> {
    let cutoff = window_cutoff(seconds);

    readings::Entity::find()
        .filter(readings::Column::Timestamp.gte(cutoff))
        .order_by_asc(readings::Column::Timestamp)
        .all(db)
        .await
}

/// Insert one reading with a server-assigned timestamp. Returns the new id.
pub async fn insert(db: &DatabaseConnection, reading: NewReading) -> Result<i32, DbErr> {
    let model = readings::ActiveModel {
        voltage: Set(reading.voltage),
        current: Set(reading.current),
        power: Set(reading.power),
        energy: Set(reading.energy),
        temperature: Set(reading.temperature),
        is_started: Set(reading.is_started),
        time_now: Set(reading.time_now),
        timestamp: Set(Utc::now()),
        ..Default::default()
    };

    let inserted = model.insert(db).await?;
    Ok(inserted.id)
}

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ========== READINGS ==========
        // Append-only telemetry samples; timestamp is server-assigned.
        manager
            .create_table(
                Table::create()
                    .table(Readings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Readings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Readings::Voltage).double().not_null())
                    .col(ColumnDef::new(Readings::Current).double().not_null())
                    .col(ColumnDef::new(Readings::Power).double().not_null())
                    .col(ColumnDef::new(Readings::Energy).double().not_null())
                    .col(
                        ColumnDef::new(Readings::Temperature)
                            .double()
                            .not_null()
                            .default(30.0),
                    )
                    .col(
                        ColumnDef::new(Readings::IsStarted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Readings::TimeNow)
                            .string_len(16)
                            .not_null()
                            .default("00:00:00"),
                    )
                    .col(ColumnDef::new(Readings::Timestamp).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        // Latest/history/window queries all filter or order by timestamp
        manager
            .create_index(
                Index::create()
                    .name("idx_readings_timestamp")
                    .table(Readings::Table)
                    .col(Readings::Timestamp)
                    .to_owned(),
            )
            .await?;

        // ========== SETTINGS ==========
        // Singleton: the service always writes the reserved id, so the
        // primary key is a plain integer with no auto-increment.
        manager
            .create_table(
                Table::create()
                    .table(Settings::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Settings::Id).integer().not_null().primary_key())
                    .col(ColumnDef::new(Settings::Setpoint).double().not_null())
                    .col(
                        ColumnDef::new(Settings::SetpointPercent)
                            .double()
                            .not_null()
                            .default(5.0),
                    )
                    .col(ColumnDef::new(Settings::Source).string_len(2).not_null())
                    .col(
                        ColumnDef::new(Settings::CutOffVoltage)
                            .double()
                            .not_null()
                            .default(70.5),
                    )
                    .col(
                        ColumnDef::new(Settings::CutOffEnergy)
                            .double()
                            .not_null()
                            .default(2000.0),
                    )
                    .col(
                        ColumnDef::new(Settings::TimerValue)
                            .string_len(16)
                            .not_null()
                            .default("00:00:00"),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Settings::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Readings::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Readings {
    Table,
    Id,
    Voltage,
    Current,
    Power,
    Energy,
    Temperature,
    IsStarted,
    TimeNow,
    Timestamp,
}

#[derive(DeriveIden)]
pub enum Settings {
    Table,
    Id,
    Setpoint,
    SetpointPercent,
    Source,
    CutOffVoltage,
    CutOffEnergy,
    TimerValue,
}

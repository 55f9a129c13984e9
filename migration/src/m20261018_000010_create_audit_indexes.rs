use entity::{athlete_history, transfers};
use sea_orm_migration::prelude::*;

const IDX_ATHLETE_HISTORY_ATHLETE: &str = "IDX_athlete_history_athlete";
const IDX_ATHLETE_HISTORY_CREATED_AT: &str = "IDX_athlete_history_created_at";
const IDX_TRANSFERS_ATHLETE: &str = "IDX_transfers_athlete";
const IDX_TRANSFERS_CREATED_AT: &str = "IDX_transfers_created_at";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name(IDX_ATHLETE_HISTORY_ATHLETE)
                    .table(athlete_history::Entity)
                    .col(athlete_history::Column::AthleteId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ATHLETE_HISTORY_CREATED_AT)
                    .table(athlete_history::Entity)
                    .col(athlete_history::Column::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TRANSFERS_ATHLETE)
                    .table(transfers::Entity)
                    .col(transfers::Column::AthleteId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TRANSFERS_CREATED_AT)
                    .table(transfers::Entity)
                    .col(transfers::Column::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TRANSFERS_CREATED_AT)
                    .table(transfers::Entity)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TRANSFERS_ATHLETE)
                    .table(transfers::Entity)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ATHLETE_HISTORY_CREATED_AT)
                    .table(athlete_history::Entity)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ATHLETE_HISTORY_ATHLETE)
                    .table(athlete_history::Entity)
                    .to_owned(),
            )
            .await
    }
}

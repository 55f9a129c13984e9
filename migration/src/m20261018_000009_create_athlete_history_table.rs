use entity::{
    athlete_history::{self, constraints::*},
    athletes, projects, statuses, teams, users,
};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(athlete_history::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(athlete_history::Column::Id)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(athlete_history::Column::AthleteId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(athlete_history::Column::ProjectId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(athlete_history::Column::TeamId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(athlete_history::Column::StatusId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(athlete_history::Column::Reason)
                            .string_len(255)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(athlete_history::Column::ResponsibleId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(athlete_history::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name(PK_ATHLETE_HISTORY)
                            .col(athlete_history::Column::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ATHLETE_HISTORY_ATHLETE)
                            .from(athlete_history::Entity, athlete_history::Column::AthleteId)
                            .to(athletes::Entity, athletes::Column::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ATHLETE_HISTORY_PROJECT)
                            .from(athlete_history::Entity, athlete_history::Column::ProjectId)
                            .to(projects::Entity, projects::Column::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ATHLETE_HISTORY_TEAM)
                            .from(athlete_history::Entity, athlete_history::Column::TeamId)
                            .to(teams::Entity, teams::Column::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ATHLETE_HISTORY_STATUS)
                            .from(athlete_history::Entity, athlete_history::Column::StatusId)
                            .to(statuses::Entity, statuses::Column::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ATHLETE_HISTORY_RESPONSIBLE)
                            .from(
                                athlete_history::Entity,
                                athlete_history::Column::ResponsibleId,
                            )
                            .to(users::Entity, users::Column::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(athlete_history::Entity).to_owned())
            .await
    }
}

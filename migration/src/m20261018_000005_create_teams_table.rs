use entity::{
    projects,
    teams::{self, constraints::*},
    users,
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
                    .table(teams::Entity)
                    .if_not_exists()
                    .col(ColumnDef::new(teams::Column::Id).uuid().not_null())
                    .col(
                        ColumnDef::new(teams::Column::Name)
                            .string_len(80)
                            .not_null(),
                    )
                    .col(ColumnDef::new(teams::Column::ProjectId).uuid().not_null())
                    .col(ColumnDef::new(teams::Column::LeadId).uuid().not_null())
                    .col(
                        ColumnDef::new(teams::Column::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(teams::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(teams::Column::LastEdited)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(Index::create().name(PK_TEAMS).col(teams::Column::Id))
                    .index(
                        Index::create()
                            .name(UC_TEAMS_NAME)
                            .col(teams::Column::Name)
                            .unique(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TEAMS_PROJECT)
                            .from(teams::Entity, teams::Column::ProjectId)
                            .to(projects::Entity, projects::Column::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TEAMS_LEAD)
                            .from(teams::Entity, teams::Column::LeadId)
                            .to(users::Entity, users::Column::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(teams::Entity).to_owned())
            .await
    }
}

use entity::{
    athletes, projects, teams,
    transfers::{self, constraints::*},
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
                    .table(transfers::Entity)
                    .if_not_exists()
                    .col(ColumnDef::new(transfers::Column::Id).uuid().not_null())
                    .col(
                        ColumnDef::new(transfers::Column::AthleteId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(transfers::Column::OriginProjectId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(transfers::Column::OriginTeamId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(transfers::Column::DestinationProjectId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(transfers::Column::DestinationTeamId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(transfers::Column::Reason)
                            .string_len(255)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(transfers::Column::ResponsibleId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(transfers::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name(PK_TRANSFERS)
                            .col(transfers::Column::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TRANSFERS_ATHLETE)
                            .from(transfers::Entity, transfers::Column::AthleteId)
                            .to(athletes::Entity, athletes::Column::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TRANSFERS_ORIGIN_PROJECT)
                            .from(transfers::Entity, transfers::Column::OriginProjectId)
                            .to(projects::Entity, projects::Column::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TRANSFERS_ORIGIN_TEAM)
                            .from(transfers::Entity, transfers::Column::OriginTeamId)
                            .to(teams::Entity, teams::Column::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TRANSFERS_DESTINATION_PROJECT)
                            .from(transfers::Entity, transfers::Column::DestinationProjectId)
                            .to(projects::Entity, projects::Column::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TRANSFERS_DESTINATION_TEAM)
                            .from(transfers::Entity, transfers::Column::DestinationTeamId)
                            .to(teams::Entity, teams::Column::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TRANSFERS_RESPONSIBLE)
                            .from(transfers::Entity, transfers::Column::ResponsibleId)
                            .to(users::Entity, users::Column::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(transfers::Entity).to_owned())
            .await
    }
}

use entity::{
    cities,
    projects::{self, constraints::*},
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
                    .table(projects::Entity)
                    .if_not_exists()
                    .col(ColumnDef::new(projects::Column::Id).uuid().not_null())
                    .col(
                        ColumnDef::new(projects::Column::Name)
                            .string_len(80)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(projects::Column::Description)
                            .string_len(500)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(projects::Column::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(projects::Column::CityId).uuid().not_null())
                    .col(
                        ColumnDef::new(projects::Column::ResponsibleId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(projects::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(projects::Column::LastEdited)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name(PK_PROJECTS)
                            .col(projects::Column::Id),
                    )
                    .index(
                        Index::create()
                            .name(UC_PROJECTS_NAME)
                            .col(projects::Column::Name)
                            .unique(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PROJECTS_CITY)
                            .from(projects::Entity, projects::Column::CityId)
                            .to(cities::Entity, cities::Column::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PROJECTS_RESPONSIBLE)
                            .from(projects::Entity, projects::Column::ResponsibleId)
                            .to(users::Entity, users::Column::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(projects::Entity).to_owned())
            .await
    }
}

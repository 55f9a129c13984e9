use entity::{
    cities::{self, constraints::*},
    states::{self, constraints::*},
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
                    .table(states::Entity)
                    .if_not_exists()
                    .col(ColumnDef::new(states::Column::Id).uuid().not_null())
                    .col(
                        ColumnDef::new(states::Column::Name)
                            .string_len(40)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(states::Column::Abbreviation)
                            .string_len(10)
                            .not_null(),
                    )
                    .primary_key(Index::create().name(PK_STATES).col(states::Column::Id))
                    .index(
                        Index::create()
                            .name(UC_STATES_NAME)
                            .col(states::Column::Name)
                            .unique(),
                    )
                    .index(
                        Index::create()
                            .name(UC_STATES_ABBREVIATION)
                            .col(states::Column::Abbreviation)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(cities::Entity)
                    .if_not_exists()
                    .col(ColumnDef::new(cities::Column::Id).uuid().not_null())
                    .col(
                        ColumnDef::new(cities::Column::Name)
                            .string_len(40)
                            .not_null(),
                    )
                    .col(ColumnDef::new(cities::Column::StateId).uuid().not_null())
                    .primary_key(Index::create().name(PK_CITIES).col(cities::Column::Id))
                    .index(
                        Index::create()
                            .name(UC_CITIES_NAME)
                            .col(cities::Column::Name)
                            .unique(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CITIES_STATE)
                            .from(cities::Entity, cities::Column::StateId)
                            .to(states::Entity, states::Column::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(cities::Entity).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(states::Entity).to_owned())
            .await
    }
}

use entity::{
    addresses::{self, constraints::*},
    athletes, cities,
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
                    .table(addresses::Entity)
                    .if_not_exists()
                    .col(ColumnDef::new(addresses::Column::Id).uuid().not_null())
                    .col(
                        ColumnDef::new(addresses::Column::AthleteId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(addresses::Column::Street)
                            .string_len(120)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(addresses::Column::Number)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(addresses::Column::Complement)
                            .string_len(80)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(addresses::Column::District)
                            .string_len(80)
                            .not_null(),
                    )
                    .col(ColumnDef::new(addresses::Column::CityId).uuid().not_null())
                    .col(
                        ColumnDef::new(addresses::Column::Cep)
                            .string_len(8)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(addresses::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(addresses::Column::LastEdited)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name(PK_ADDRESSES)
                            .col(addresses::Column::Id),
                    )
                    .index(
                        Index::create()
                            .name(UC_ADDRESSES_ATHLETE)
                            .col(addresses::Column::AthleteId)
                            .unique(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ADDRESSES_ATHLETE)
                            .from(addresses::Entity, addresses::Column::AthleteId)
                            .to(athletes::Entity, athletes::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ADDRESSES_CITY)
                            .from(addresses::Entity, addresses::Column::CityId)
                            .to(cities::Entity, cities::Column::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(addresses::Entity).to_owned())
            .await
    }
}

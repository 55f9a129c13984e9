use entity::{
    athletes::{self, constraints::*},
    categories, levels, modalities, positions, sexes, statuses, teams,
};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

fn lookup_fk(
    name: &str,
    column: athletes::Column,
    table: impl IntoTableRef,
    target: impl IntoIden,
) -> ForeignKeyCreateStatement {
    ForeignKey::create()
        .name(name)
        .from(athletes::Entity, column)
        .to(table, target)
        .on_delete(ForeignKeyAction::NoAction)
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(athletes::Entity)
                    .if_not_exists()
                    .col(ColumnDef::new(athletes::Column::Id).uuid().not_null())
                    .col(ColumnDef::new(athletes::Column::TeamId).uuid().not_null())
                    .col(
                        ColumnDef::new(athletes::Column::FirstName)
                            .string_len(80)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(athletes::Column::LastName)
                            .string_len(80)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(athletes::Column::Email)
                            .string_len(120)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(athletes::Column::Rg)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(athletes::Column::Cpf)
                            .string_len(11)
                            .not_null(),
                    )
                    .col(ColumnDef::new(athletes::Column::BirthDate).date().not_null())
                    .col(
                        ColumnDef::new(athletes::Column::Phone1)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(athletes::Column::Phone2)
                            .string_len(20)
                            .null(),
                    )
                    .col(ColumnDef::new(athletes::Column::SexId).uuid().not_null())
                    .col(
                        ColumnDef::new(athletes::Column::ModalityId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(athletes::Column::PositionId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(athletes::Column::CategoryId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(athletes::Column::LevelId).uuid().not_null())
                    .col(ColumnDef::new(athletes::Column::StatusId).uuid().not_null())
                    .col(
                        ColumnDef::new(athletes::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(athletes::Column::LastEdited)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name(PK_ATHLETES)
                            .col(athletes::Column::Id),
                    )
                    .index(
                        Index::create()
                            .name(UC_ATHLETES_EMAIL)
                            .col(athletes::Column::Email)
                            .unique(),
                    )
                    .index(
                        Index::create()
                            .name(UC_ATHLETES_RG)
                            .col(athletes::Column::Rg)
                            .unique(),
                    )
                    .index(
                        Index::create()
                            .name(UC_ATHLETES_CPF)
                            .col(athletes::Column::Cpf)
                            .unique(),
                    )
                    .foreign_key(&mut lookup_fk(
                        FK_ATHLETES_TEAM,
                        athletes::Column::TeamId,
                        teams::Entity,
                        teams::Column::Id,
                    ))
                    .foreign_key(&mut lookup_fk(
                        FK_ATHLETES_SEX,
                        athletes::Column::SexId,
                        sexes::Entity,
                        sexes::Column::Id,
                    ))
                    .foreign_key(&mut lookup_fk(
                        FK_ATHLETES_MODALITY,
                        athletes::Column::ModalityId,
                        modalities::Entity,
                        modalities::Column::Id,
                    ))
                    .foreign_key(&mut lookup_fk(
                        FK_ATHLETES_POSITION,
                        athletes::Column::PositionId,
                        positions::Entity,
                        positions::Column::Id,
                    ))
                    .foreign_key(&mut lookup_fk(
                        FK_ATHLETES_CATEGORY,
                        athletes::Column::CategoryId,
                        categories::Entity,
                        categories::Column::Id,
                    ))
                    .foreign_key(&mut lookup_fk(
                        FK_ATHLETES_LEVEL,
                        athletes::Column::LevelId,
                        levels::Entity,
                        levels::Column::Id,
                    ))
                    .foreign_key(&mut lookup_fk(
                        FK_ATHLETES_STATUS,
                        athletes::Column::StatusId,
                        statuses::Entity,
                        statuses::Column::Id,
                    ))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(athletes::Entity).to_owned())
            .await
    }
}

use crate::utils::{create_table_down, create_table_up};
use entity::{categories, levels, modalities, positions, sexes, statuses};
use sea_orm_migration::{prelude::*, sea_orm::Schema};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        create_table_up!(manager, statuses::Entity);
        create_table_up!(manager, sexes::Entity);
        create_table_up!(manager, modalities::Entity);
        create_table_up!(manager, positions::Entity);
        create_table_up!(manager, categories::Entity);
        create_table_up!(manager, levels::Entity);

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        create_table_down!(manager, levels::Entity);
        create_table_down!(manager, categories::Entity);
        create_table_down!(manager, positions::Entity);
        create_table_down!(manager, modalities::Entity);
        create_table_down!(manager, sexes::Entity);
        create_table_down!(manager, statuses::Entity);

        Ok(())
    }
}

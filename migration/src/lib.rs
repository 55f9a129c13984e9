mod utils;

pub use sea_orm_migration::prelude::*;

mod m20261018_000001_create_users_table;
mod m20261018_000002_create_geography_tables;
mod m20261018_000003_create_lookup_tables;
mod m20261018_000004_create_projects_table;
mod m20261018_000005_create_teams_table;
mod m20261018_000006_create_athletes_table;
mod m20261018_000007_create_addresses_table;
mod m20261018_000008_create_transfers_table;
mod m20261018_000009_create_athlete_history_table;
mod m20261018_000010_create_audit_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261018_000001_create_users_table::Migration),
            Box::new(m20261018_000002_create_geography_tables::Migration),
            Box::new(m20261018_000003_create_lookup_tables::Migration),
            Box::new(m20261018_000004_create_projects_table::Migration),
            Box::new(m20261018_000005_create_teams_table::Migration),
            Box::new(m20261018_000006_create_athletes_table::Migration),
            Box::new(m20261018_000007_create_addresses_table::Migration),
            Box::new(m20261018_000008_create_transfers_table::Migration),
            Box::new(m20261018_000009_create_athlete_history_table::Migration),
            Box::new(m20261018_000010_create_audit_indexes::Migration),
        ]
    }
}

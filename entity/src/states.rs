use sea_orm::entity::prelude::*;
use uuid::Uuid;

pub mod constraints {
    pub const PK_STATES: &str = "PK_states";
    pub const UC_STATES_NAME: &str = "UC_states_name";
    pub const UC_STATES_ABBREVIATION: &str = "UC_states_abbreviation";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "states")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(unique)]
    pub abbreviation: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

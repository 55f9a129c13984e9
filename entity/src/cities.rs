use super::states;
use sea_orm::entity::prelude::*;
use uuid::Uuid;

pub mod constraints {
    pub const PK_CITIES: &str = "PK_cities";
    pub const UC_CITIES_NAME: &str = "UC_cities_name";
    pub const FK_CITIES_STATE: &str = "FK_cities_state";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cities")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub state_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    State,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::State => Entity::belongs_to(states::Entity)
                .from(Column::StateId)
                .to(states::Column::Id)
                .into(),
        }
    }
}

impl Related<states::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::State.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

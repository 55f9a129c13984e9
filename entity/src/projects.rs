use super::{cities, teams, users};
use sea_orm::entity::prelude::*;
use uuid::Uuid;

pub mod constraints {
    pub const PK_PROJECTS: &str = "PK_projects";
    pub const UC_PROJECTS_NAME: &str = "UC_projects_name";
    pub const FK_PROJECTS_CITY: &str = "FK_projects_city";
    pub const FK_PROJECTS_RESPONSIBLE: &str = "FK_projects_responsible";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub city_id: Uuid,
    pub responsible_id: Uuid,
    pub created_at: DateTimeUtc,
    pub last_edited: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    City,
    Responsible,
    Teams,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::City => Entity::belongs_to(cities::Entity)
                .from(Column::CityId)
                .to(cities::Column::Id)
                .into(),
            Self::Responsible => Entity::belongs_to(users::Entity)
                .from(Column::ResponsibleId)
                .to(users::Column::Id)
                .into(),
            Self::Teams => Entity::has_many(teams::Entity).into(),
        }
    }
}

impl Related<cities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::City.def()
    }
}

impl Related<teams::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teams.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    #[inline]
    pub fn find_active() -> Select<Entity> {
        Self::find().filter(Column::IsActive.eq(true))
    }
}

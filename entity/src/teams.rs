use super::{athletes, projects, users};
use sea_orm::entity::prelude::*;
use uuid::Uuid;

pub mod constraints {
    pub const PK_TEAMS: &str = "PK_teams";
    pub const UC_TEAMS_NAME: &str = "UC_teams_name";
    pub const FK_TEAMS_PROJECT: &str = "FK_teams_project";
    pub const FK_TEAMS_LEAD: &str = "FK_teams_lead";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "teams")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub project_id: Uuid,
    pub lead_id: Uuid,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
    pub last_edited: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Project,
    Lead,
    Athletes,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Project => Entity::belongs_to(projects::Entity)
                .from(Column::ProjectId)
                .to(projects::Column::Id)
                .into(),
            Self::Lead => Entity::belongs_to(users::Entity)
                .from(Column::LeadId)
                .to(users::Column::Id)
                .into(),
            Self::Athletes => Entity::has_many(athletes::Entity).into(),
        }
    }
}

impl Related<projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Project.def()
    }
}

impl Related<athletes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Athletes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    #[inline]
    pub fn find_in_project(project_id: Uuid) -> Select<Entity> {
        Self::find().filter(Column::ProjectId.eq(project_id))
    }

    #[inline]
    pub fn find_active() -> Select<Entity> {
        Self::find().filter(Column::IsActive.eq(true))
    }
}

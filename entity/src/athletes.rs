use super::{addresses, statuses, teams};
use sea_orm::{entity::prelude::*, QuerySelect};
use uuid::Uuid;

pub mod constraints {
    pub const PK_ATHLETES: &str = "PK_athletes";
    pub const UC_ATHLETES_EMAIL: &str = "UC_athletes_email";
    pub const UC_ATHLETES_RG: &str = "UC_athletes_rg";
    pub const UC_ATHLETES_CPF: &str = "UC_athletes_cpf";
    pub const FK_ATHLETES_TEAM: &str = "FK_athletes_team";
    pub const FK_ATHLETES_SEX: &str = "FK_athletes_sex";
    pub const FK_ATHLETES_MODALITY: &str = "FK_athletes_modality";
    pub const FK_ATHLETES_POSITION: &str = "FK_athletes_position";
    pub const FK_ATHLETES_CATEGORY: &str = "FK_athletes_category";
    pub const FK_ATHLETES_LEVEL: &str = "FK_athletes_level";
    pub const FK_ATHLETES_STATUS: &str = "FK_athletes_status";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "athletes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub team_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(unique)]
    pub rg: String,
    #[sea_orm(unique)]
    pub cpf: String,
    pub birth_date: Date,
    pub phone1: String,
    pub phone2: Option<String>,
    pub sex_id: Uuid,
    pub modality_id: Uuid,
    pub position_id: Uuid,
    pub category_id: Uuid,
    pub level_id: Uuid,
    pub status_id: Uuid,
    pub created_at: DateTimeUtc,
    pub last_edited: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Team,
    Status,
    Address,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Team => Entity::belongs_to(teams::Entity)
                .from(Column::TeamId)
                .to(teams::Column::Id)
                .into(),
            Self::Status => Entity::belongs_to(statuses::Entity)
                .from(Column::StatusId)
                .to(statuses::Column::Id)
                .into(),
            Self::Address => Entity::has_one(addresses::Entity).into(),
        }
    }
}

impl Related<teams::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl Related<statuses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Status.def()
    }
}

impl Related<addresses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Address.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Entity {
    #[inline]
    pub fn find_in_team(team_id: Uuid) -> Select<Entity> {
        Self::find().filter(Column::TeamId.eq(team_id))
    }

    /// Athletes of every team belonging to the project.
    pub fn find_in_project(project_id: Uuid) -> Select<Entity> {
        Self::find()
            .inner_join(teams::Entity)
            .filter(teams::Column::ProjectId.eq(project_id))
    }
}

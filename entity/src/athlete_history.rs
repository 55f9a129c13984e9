use sea_orm::{entity::prelude::*, QueryOrder};
use uuid::Uuid;

pub mod constraints {
    pub const PK_ATHLETE_HISTORY: &str = "PK_athlete_history";
    pub const FK_ATHLETE_HISTORY_ATHLETE: &str = "FK_athlete_history_athlete";
    pub const FK_ATHLETE_HISTORY_PROJECT: &str = "FK_athlete_history_project";
    pub const FK_ATHLETE_HISTORY_TEAM: &str = "FK_athlete_history_team";
    pub const FK_ATHLETE_HISTORY_STATUS: &str = "FK_athlete_history_status";
    pub const FK_ATHLETE_HISTORY_RESPONSIBLE: &str = "FK_athlete_history_responsible";
}

pub mod reasons {
    pub const TEAM_TRANSFER: &str = "team transfer";
    pub const STATUS_CHANGE: &str = "status change";
}

/// A team or status change of an athlete. Rows are only ever inserted.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "athlete_history")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub athlete_id: Uuid,
    pub project_id: Uuid,
    pub team_id: Uuid,
    pub status_id: Uuid,
    pub reason: Option<String>,
    pub responsible_id: Uuid,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    /// Newest first. Ids are time ordered so they break ties between rows
    /// created within the same clock tick.
    pub fn find_latest() -> Select<Entity> {
        Self::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
    }

    pub fn find_for_athlete(athlete_id: Uuid) -> Select<Entity> {
        Self::find_latest().filter(Column::AthleteId.eq(athlete_id))
    }
}

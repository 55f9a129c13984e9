use sea_orm::{entity::prelude::*, QueryOrder};
use uuid::Uuid;

pub mod constraints {
    pub const PK_TRANSFERS: &str = "PK_transfers";
    pub const FK_TRANSFERS_ATHLETE: &str = "FK_transfers_athlete";
    pub const FK_TRANSFERS_ORIGIN_PROJECT: &str = "FK_transfers_origin_project";
    pub const FK_TRANSFERS_ORIGIN_TEAM: &str = "FK_transfers_origin_team";
    pub const FK_TRANSFERS_DESTINATION_PROJECT: &str = "FK_transfers_destination_project";
    pub const FK_TRANSFERS_DESTINATION_TEAM: &str = "FK_transfers_destination_team";
    pub const FK_TRANSFERS_RESPONSIBLE: &str = "FK_transfers_responsible";
}

/// An athlete moving from one team to another. Rows are only ever inserted.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "transfers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub athlete_id: Uuid,
    pub origin_project_id: Uuid,
    pub origin_team_id: Uuid,
    pub destination_project_id: Uuid,
    pub destination_team_id: Uuid,
    pub reason: Option<String>,
    pub responsible_id: Uuid,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    pub fn find_latest() -> Select<Entity> {
        Self::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
    }

    pub fn find_for_athlete(athlete_id: Uuid) -> Select<Entity> {
        Self::find_latest().filter(Column::AthleteId.eq(athlete_id))
    }
}

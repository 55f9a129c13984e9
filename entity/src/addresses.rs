use super::{athletes, cities};
use sea_orm::entity::prelude::*;
use uuid::Uuid;

pub mod constraints {
    pub const PK_ADDRESSES: &str = "PK_addresses";
    pub const UC_ADDRESSES_ATHLETE: &str = "UC_addresses_athlete";
    pub const FK_ADDRESSES_ATHLETE: &str = "FK_addresses_athlete";
    pub const FK_ADDRESSES_CITY: &str = "FK_addresses_city";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "addresses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub athlete_id: Uuid,
    pub street: String,
    /// Free text, "s/n" and "apto 101" are valid numbers.
    pub number: String,
    pub complement: Option<String>,
    pub district: String,
    pub city_id: Uuid,
    pub cep: String,
    pub created_at: DateTimeUtc,
    pub last_edited: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Athlete,
    City,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Athlete => Entity::belongs_to(athletes::Entity)
                .from(Column::AthleteId)
                .to(athletes::Column::Id)
                .into(),
            Self::City => Entity::belongs_to(cities::Entity)
                .from(Column::CityId)
                .to(cities::Column::Id)
                .into(),
        }
    }
}

impl Related<athletes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Athlete.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    #[inline]
    pub fn find_by_athlete(athlete_id: Uuid) -> Select<Entity> {
        Self::find().filter(Column::AthleteId.eq(athlete_id))
    }
}

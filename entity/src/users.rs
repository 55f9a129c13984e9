use sea_orm::{entity::prelude::*, Condition};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod constraints {
    pub const PK_USERS: &str = "PK_users";
    pub const UC_USERS_EMAIL: &str = "UC_users_email";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub phone1: String,
    pub phone2: Option<String>,
    pub is_admin: bool,
    pub is_coord: bool,
    pub is_tecnico: bool,
    pub created_at: DateTimeUtc,
    pub last_edited: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Roles a user can hold. A user may hold any combination of them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Coordinator,
    Technician,
}

impl Role {
    pub const ALL: &'static [Role] = &[Role::Admin, Role::Coordinator, Role::Technician];
}

impl Model {
    pub fn has_role(&self, role: Role) -> bool {
        match role {
            Role::Admin => self.is_admin,
            Role::Coordinator => self.is_coord,
            Role::Technician => self.is_tecnico,
        }
    }

    #[inline]
    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        roles.iter().any(|role| self.has_role(*role))
    }

    pub fn roles(&self) -> Vec<Role> {
        Role::ALL
            .iter()
            .copied()
            .filter(|role| self.has_role(*role))
            .collect()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Entity {
    #[inline]
    pub fn find_by_email(email: &str) -> Select<Entity> {
        Self::find().filter(Column::Email.eq(email))
    }

    /// Users holding at least one role, the only ones allowed to lead a team.
    pub fn find_staff() -> Select<Entity> {
        Self::find().filter(
            Condition::any()
                .add(Column::IsAdmin.eq(true))
                .add(Column::IsCoord.eq(true))
                .add(Column::IsTecnico.eq(true)),
        )
    }
}

use crate::{
    error,
    extractors::{Json, UserID},
    utils::{format, set_option},
    Result, StateTrait,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use entity::users::{self, Role};
use sea_orm::{EntityTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct User {
    id: Uuid,
    name: String,
    email: String,
    phone1: String,
    roles: Vec<Role>,
    created_at: String,
}

#[derive(Debug, Deserialize)]
pub struct RolesRequest {
    is_admin: Option<bool>,
    is_coord: Option<bool>,
    is_tecnico: Option<bool>,
}

pub async fn list_users<S: StateTrait>(State(state): State<S>) -> Result<Json<Vec<User>>> {
    let users = users::Entity::find()
        .order_by_asc(users::Column::FirstName)
        .order_by_asc(users::Column::LastName)
        .all(state.db())
        .await?;

    Ok(Json(
        users
            .into_iter()
            .map(|user| User {
                id: user.id,
                name: format::title(&user.full_name()),
                phone1: format::phone(&user.phone1),
                roles: user.roles(),
                created_at: format::date(&user.created_at),
                email: user.email,
            })
            .collect(),
    ))
}

pub async fn update_roles<S: StateTrait>(
    State(state): State<S>,
    admin_id: UserID,
    Path(id): Path<Uuid>,
    Json(request): Json<RolesRequest>,
) -> Result<StatusCode> {
    if users::Entity::find_by_id(id).one(state.db()).await?.is_none() {
        return Err(error::USER_NOT_FOUND);
    }

    let user = users::ActiveModel {
        id: Set(id),
        is_admin: set_option(request.is_admin),
        is_coord: set_option(request.is_coord),
        is_tecnico: set_option(request.is_tecnico),
        last_edited: Set(Utc::now()),
        ..Default::default()
    };

    users::Entity::update(user).exec(state.db()).await?;

    info!(user_id = %id, admin_id = %*admin_id, ?request, "updated user roles");

    Ok(StatusCode::NO_CONTENT)
}

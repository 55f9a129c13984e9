use crate::{
    error,
    extractors::{Json, UserID},
    utils::format,
    Result, StateTrait,
};
use axum::extract::State;
use entity::users::{self, Role};
use sea_orm::EntityTrait;
use serde::Serialize;
use uuid::Uuid;

#[derive(Serialize)]
pub struct Response {
    id: Uuid,
    first_name: String,
    last_name: String,
    email: String,
    phone1: String,
    phone2: Option<String>,
    roles: Vec<Role>,
}

pub async fn get_me<S: StateTrait>(
    State(state): State<S>,
    user_id: UserID,
) -> Result<Json<Response>> {
    let user = users::Entity::find_by_id(*user_id)
        .one(state.db())
        .await?
        .ok_or(error::USER_NOT_FOUND)?;

    Ok(Json(Response {
        roles: user.roles(),
        id: user.id,
        first_name: format::title(&user.first_name),
        last_name: format::title(&user.last_name),
        phone1: format::phone(&user.phone1),
        phone2: user.phone2.as_deref().map(format::phone),
        email: user.email,
    }))
}

use crate::{
    error::{self, DatabaseError},
    extractors::{Json, ValidatedJson},
    password,
    utils::format,
    Result, StateTrait,
};
use axum::{extract::State, http::StatusCode};
use chrono::Utc;
use entity::users::{self, constraints::*};
use sea_orm::{EntityTrait, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 2, max = 80))]
    first_name: String,
    #[validate(length(min = 2, max = 80))]
    last_name: String,
    #[validate(email, length(max = 120))]
    email: String,
    #[validate(length(min = 6))]
    password: String,
    #[validate(must_match(other = "password"))]
    confirm_password: String,
    #[validate(length(min = 1, max = 20))]
    phone1: String,
    #[validate(length(max = 20))]
    phone2: Option<String>,
}

#[derive(Serialize)]
pub struct Response {
    id: Uuid,
    token: String,
}

pub async fn register<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<Response>)> {
    let id = Uuid::now_v7();
    let password = password::hash(&request.password, &mut state.rng())?;
    let now = Utc::now();

    let user = users::ActiveModel {
        id: Set(id),
        first_name: Set(request.first_name.trim().to_uppercase()),
        last_name: Set(request.last_name.trim().to_uppercase()),
        email: Set(request.email.trim().to_lowercase()),
        password: Set(password),
        phone1: Set(format::digits(&request.phone1)),
        phone2: Set(request.phone2.as_deref().map(format::digits)),
        is_admin: Set(false),
        is_coord: Set(false),
        is_tecnico: Set(false),
        created_at: Set(now),
        last_edited: Set(now),
    };

    let result = users::Entity::insert(user)
        .exec_without_returning(state.db())
        .await;

    match result {
        Err(err) if err.unique_violation(UC_USERS_EMAIL) => return Err(error::USER_ALREADY_EXISTS),
        r => r?,
    };

    info!(user_id = %id, "registered user");

    let token = state.jwt().issue(id)?;

    Ok((StatusCode::CREATED, Json(Response { id, token })))
}

use crate::{
    error::{self, DatabaseError},
    extractors::{Json, ValidatedJson},
    Result, StateTrait,
};
use axum::{extract::State, http::StatusCode};
use chrono::Utc;
use entity::projects::{self, constraints::*};
use sea_orm::{EntityTrait, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 5, max = 80))]
    name: String,
    #[validate(length(max = 500))]
    description: Option<String>,
    is_active: Option<bool>,
    city_id: Uuid,
    responsible_id: Uuid,
}

#[derive(Serialize)]
pub struct Response {
    id: Uuid,
}

pub async fn create_project<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<Response>)> {
    let id = Uuid::now_v7();
    let now = Utc::now();

    let project = projects::ActiveModel {
        id: Set(id),
        name: Set(request.name.trim().to_uppercase()),
        description: Set(request.description),
        is_active: Set(request.is_active.unwrap_or(true)),
        city_id: Set(request.city_id),
        responsible_id: Set(request.responsible_id),
        created_at: Set(now),
        last_edited: Set(now),
    };

    let result = projects::Entity::insert(project)
        .exec_without_returning(state.db())
        .await;

    match result {
        Err(err) if err.unique_violation(UC_PROJECTS_NAME) => {
            return Err(error::DUPLICATE_PROJECT_NAME)
        }
        Err(err) if err.foreign_key_violation() => return Err(error::INVALID_REFERENCE),
        r => r?,
    };

    info!(project_id = %id, "created project");

    Ok((StatusCode::CREATED, Json(Response { id })))
}

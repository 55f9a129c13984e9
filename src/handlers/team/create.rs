use crate::{
    error::{self, DatabaseError},
    extractors::{Json, ValidatedJson},
    Result, StateTrait,
};
use axum::{extract::State, http::StatusCode};
use chrono::Utc;
use entity::teams::{self, constraints::*};
use sea_orm::{EntityTrait, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 3, max = 80))]
    name: String,
    project_id: Uuid,
    lead_id: Uuid,
    is_active: Option<bool>,
}

#[derive(Serialize)]
pub struct Response {
    id: Uuid,
}

pub async fn create_team<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<Response>)> {
    super::ensure_active_project(state.db(), request.project_id).await?;
    super::ensure_staff(state.db(), request.lead_id).await?;

    let id = Uuid::now_v7();
    let now = Utc::now();

    let team = teams::ActiveModel {
        id: Set(id),
        name: Set(request.name.trim().to_uppercase()),
        project_id: Set(request.project_id),
        lead_id: Set(request.lead_id),
        is_active: Set(request.is_active.unwrap_or(true)),
        created_at: Set(now),
        last_edited: Set(now),
    };

    let result = teams::Entity::insert(team)
        .exec_without_returning(state.db())
        .await;

    match result {
        Err(err) if err.unique_violation(UC_TEAMS_NAME) => return Err(error::DUPLICATE_TEAM_NAME),
        r => r?,
    };

    info!(team_id = %id, project_id = %request.project_id, "created team");

    Ok((StatusCode::CREATED, Json(Response { id })))
}

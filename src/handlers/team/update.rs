use crate::{
    error::{self, DatabaseError},
    extractors::ValidatedJson,
    utils::set_option,
    Result, StateTrait,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use entity::teams::{self, constraints::*};
use sea_orm::{EntityTrait, Set};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 3, max = 80))]
    name: Option<String>,
    project_id: Option<Uuid>,
    lead_id: Option<Uuid>,
    is_active: Option<bool>,
}

pub async fn update_team<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<StatusCode> {
    let team = teams::Entity::find_by_id(id)
        .one(state.db())
        .await?
        .ok_or(error::TEAM_NOT_FOUND)?;

    if let Some(project_id) = request.project_id.filter(|project| *project != team.project_id) {
        super::ensure_active_project(state.db(), project_id).await?;
    }

    if let Some(lead_id) = request.lead_id {
        super::ensure_staff(state.db(), lead_id).await?;
    }

    let model = teams::ActiveModel {
        id: Set(id),
        name: set_option(request.name.map(|name| name.trim().to_uppercase())),
        project_id: set_option(request.project_id),
        lead_id: set_option(request.lead_id),
        is_active: set_option(request.is_active),
        last_edited: Set(Utc::now()),
        ..Default::default()
    };

    let result = teams::Entity::update(model).exec(state.db()).await;

    match result {
        Err(err) if err.unique_violation(UC_TEAMS_NAME) => return Err(error::DUPLICATE_TEAM_NAME),
        r => r?,
    };

    Ok(StatusCode::NO_CONTENT)
}

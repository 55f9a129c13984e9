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
use entity::projects::{self, constraints::*};
use sea_orm::{EntityTrait, Set};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 5, max = 80))]
    name: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    description: Option<Option<String>>,
    is_active: Option<bool>,
    city_id: Option<Uuid>,
    responsible_id: Option<Uuid>,
}

pub async fn update_project<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<StatusCode> {
    if let Some(Some(description)) = &request.description {
        if description.chars().count() > 500 {
            return Err(error::JSON_VALIDATE_INVALID);
        }
    }

    if projects::Entity::find_by_id(id).one(state.db()).await?.is_none() {
        return Err(error::PROJECT_NOT_FOUND);
    }

    let project = projects::ActiveModel {
        id: Set(id),
        name: set_option(request.name.map(|name| name.trim().to_uppercase())),
        description: set_option(request.description),
        is_active: set_option(request.is_active),
        city_id: set_option(request.city_id),
        responsible_id: set_option(request.responsible_id),
        last_edited: Set(Utc::now()),
        ..Default::default()
    };

    let result = projects::Entity::update(project).exec(state.db()).await;

    match result {
        Err(err) if err.unique_violation(UC_PROJECTS_NAME) => {
            return Err(error::DUPLICATE_PROJECT_NAME)
        }
        Err(err) if err.foreign_key_violation() => return Err(error::INVALID_REFERENCE),
        r => r?,
    };

    Ok(StatusCode::NO_CONTENT)
}

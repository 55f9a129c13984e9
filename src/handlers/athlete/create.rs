use crate::{
    error::{self, DatabaseError},
    extractors::{Json, ValidatedJson},
    utils::format,
    Result, StateTrait,
};
use axum::{extract::State, http::StatusCode};
use chrono::{NaiveDate, Utc};
use entity::athletes::{self, constraints::*};
use sea_orm::{EntityTrait, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    team_id: Uuid,
    #[validate(length(min = 1, max = 80))]
    first_name: String,
    #[validate(length(min = 1, max = 80))]
    last_name: String,
    #[validate(email, length(max = 120))]
    email: String,
    birth_date: NaiveDate,
    #[validate(length(min = 1, max = 20))]
    phone1: String,
    #[validate(length(max = 20))]
    phone2: Option<String>,
    #[validate(length(min = 7, max = 20))]
    rg: String,
    #[validate(length(min = 11, max = 14))]
    cpf: String,
    sex_id: Uuid,
    modality_id: Uuid,
    position_id: Uuid,
    category_id: Uuid,
    level_id: Uuid,
    status_id: Uuid,
}

#[derive(Serialize)]
pub struct Response {
    id: Uuid,
}

pub async fn create_athlete<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<Response>)> {
    if !super::has_digits(&request.cpf, 11) {
        return Err(error::JSON_VALIDATE_INVALID);
    }

    let id = Uuid::now_v7();
    let now = Utc::now();

    let athlete = athletes::ActiveModel {
        id: Set(id),
        team_id: Set(request.team_id),
        first_name: Set(request.first_name.trim().to_uppercase()),
        last_name: Set(request.last_name.trim().to_uppercase()),
        email: Set(request.email.trim().to_lowercase()),
        rg: Set(format::digits(&request.rg)),
        cpf: Set(format::digits(&request.cpf)),
        birth_date: Set(request.birth_date),
        phone1: Set(format::digits(&request.phone1)),
        phone2: Set(request.phone2.as_deref().map(format::digits)),
        sex_id: Set(request.sex_id),
        modality_id: Set(request.modality_id),
        position_id: Set(request.position_id),
        category_id: Set(request.category_id),
        level_id: Set(request.level_id),
        status_id: Set(request.status_id),
        created_at: Set(now),
        last_edited: Set(now),
    };

    let result = athletes::Entity::insert(athlete)
        .exec_without_returning(state.db())
        .await;

    match result {
        Err(err)
            if err.unique_violation(UC_ATHLETES_EMAIL)
                || err.unique_violation(UC_ATHLETES_RG)
                || err.unique_violation(UC_ATHLETES_CPF) =>
        {
            return Err(error::DUPLICATE_ATHLETE)
        }
        Err(err) if err.foreign_key_violation() => return Err(error::INVALID_REFERENCE),
        r => r?,
    };

    info!(athlete_id = %id, team_id = %request.team_id, "created athlete");

    Ok((StatusCode::CREATED, Json(Response { id })))
}

use crate::{
    error::{self, DatabaseError},
    extractors::{UserID, ValidatedJson},
    recorder::{self, Actor, Proposal},
    utils::{format, set_option},
    Result, StateTrait,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use chrono::NaiveDate;
use entity::athletes::{self, constraints::*};
use sea_orm::{EntityTrait, QuerySelect, TransactionTrait};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct Request {
    team_id: Option<Uuid>,
    status_id: Option<Uuid>,
    /// Kept on the transfer when the team changes.
    #[validate(length(max = 255))]
    reason: Option<String>,
    #[validate(length(min = 1, max = 80))]
    first_name: Option<String>,
    #[validate(length(min = 1, max = 80))]
    last_name: Option<String>,
    #[validate(email, length(max = 120))]
    email: Option<String>,
    birth_date: Option<NaiveDate>,
    #[validate(length(min = 1, max = 20))]
    phone1: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    phone2: Option<Option<String>>,
    #[validate(length(min = 7, max = 20))]
    rg: Option<String>,
    #[validate(length(min = 11, max = 14))]
    cpf: Option<String>,
    sex_id: Option<Uuid>,
    modality_id: Option<Uuid>,
    position_id: Option<Uuid>,
    category_id: Option<Uuid>,
    level_id: Option<Uuid>,
}

pub async fn update_athlete<S: StateTrait>(
    State(state): State<S>,
    user_id: UserID,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<StatusCode> {
    if let Some(cpf) = &request.cpf {
        if !super::has_digits(cpf, 11) {
            return Err(error::JSON_VALIDATE_INVALID);
        }
    }

    if let Some(Some(phone2)) = &request.phone2 {
        if phone2.chars().count() > 20 {
            return Err(error::JSON_VALIDATE_INVALID);
        }
    }

    let txn = state.db().begin().await?;

    let current = athletes::Entity::find_by_id(id)
        .lock_exclusive()
        .one(&txn)
        .await?
        .ok_or(error::ATHLETE_NOT_FOUND)?;

    let proposal = Proposal {
        team_id: request.team_id.unwrap_or(current.team_id),
        status_id: request.status_id.unwrap_or(current.status_id),
    };

    let changes = athletes::ActiveModel {
        first_name: set_option(request.first_name.map(|name| name.trim().to_uppercase())),
        last_name: set_option(request.last_name.map(|name| name.trim().to_uppercase())),
        email: set_option(request.email.map(|email| email.trim().to_lowercase())),
        birth_date: set_option(request.birth_date),
        phone1: set_option(request.phone1.as_deref().map(format::digits)),
        phone2: set_option(
            request
                .phone2
                .map(|phone| phone.as_deref().map(format::digits)),
        ),
        rg: set_option(request.rg.as_deref().map(format::digits)),
        cpf: set_option(request.cpf.as_deref().map(format::digits)),
        sex_id: set_option(request.sex_id),
        modality_id: set_option(request.modality_id),
        position_id: set_option(request.position_id),
        category_id: set_option(request.category_id),
        level_id: set_option(request.level_id),
        ..Default::default()
    };

    let actor = Actor {
        user_id: *user_id,
        reason: request.reason,
    };

    let change = match recorder::record(&txn, &current, changes, proposal, actor).await {
        Ok((_, change)) => change,
        Err(err)
            if err.unique_violation(UC_ATHLETES_EMAIL)
                || err.unique_violation(UC_ATHLETES_RG)
                || err.unique_violation(UC_ATHLETES_CPF) =>
        {
            return Err(error::DUPLICATE_ATHLETE);
        }
        Err(err) => {
            error!(athlete_id = %id, "failed to update athlete: {err}");
            return Err(error::ATHLETE_UPDATE_FAILED);
        }
    };

    txn.commit().await.map_err(|err| {
        error!(athlete_id = %id, "failed to commit athlete update: {err}");
        error::ATHLETE_UPDATE_FAILED
    })?;

    info!(athlete_id = %id, user_id = %*user_id, ?change, "updated athlete");

    Ok(StatusCode::NO_CONTENT)
}

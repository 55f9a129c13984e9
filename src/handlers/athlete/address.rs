use crate::{
    error::{self, DatabaseError},
    extractors::ValidatedJson,
    utils::{format, set_option},
    Result, StateTrait,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use entity::{
    addresses::{self, constraints::*},
    athletes,
};
use sea_orm::{ConnectionTrait, EntityTrait, Set, TransactionTrait};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateRequest {
    #[validate(length(min = 1, max = 120))]
    street: String,
    #[validate(length(min = 1, max = 20))]
    number: String,
    #[validate(length(max = 80))]
    complement: Option<String>,
    #[validate(length(min = 1, max = 80))]
    district: String,
    city_id: Uuid,
    #[validate(length(min = 8, max = 9))]
    cep: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRequest {
    #[validate(length(min = 1, max = 120))]
    street: Option<String>,
    #[validate(length(min = 1, max = 20))]
    number: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    complement: Option<Option<String>>,
    #[validate(length(min = 1, max = 80))]
    district: Option<String>,
    city_id: Option<Uuid>,
    #[validate(length(min = 8, max = 9))]
    cep: Option<String>,
}

fn upper(value: &str) -> String {
    value.trim().to_uppercase()
}

async fn ensure_athlete<C: ConnectionTrait>(db: &C, id: Uuid) -> Result {
    match athletes::Entity::find_by_id(id).one(db).await? {
        Some(_) => Ok(()),
        None => Err(error::ATHLETE_NOT_FOUND),
    }
}

pub async fn create_address<S: StateTrait>(
    State(state): State<S>,
    Path(athlete_id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<CreateRequest>,
) -> Result<StatusCode> {
    if !super::has_digits(&request.cep, 8) {
        return Err(error::JSON_VALIDATE_INVALID);
    }

    let txn = state.db().begin().await?;

    ensure_athlete(&txn, athlete_id).await?;

    let now = Utc::now();

    let address = addresses::ActiveModel {
        id: Set(Uuid::now_v7()),
        athlete_id: Set(athlete_id),
        street: Set(upper(&request.street)),
        number: Set(upper(&request.number)),
        complement: Set(request.complement.as_deref().map(upper)),
        district: Set(upper(&request.district)),
        city_id: Set(request.city_id),
        cep: Set(format::digits(&request.cep)),
        created_at: Set(now),
        last_edited: Set(now),
    };

    let result = addresses::Entity::insert(address)
        .exec_without_returning(&txn)
        .await;

    match result {
        Err(err) if err.unique_violation(UC_ADDRESSES_ATHLETE) => {
            return Err(error::ADDRESS_ALREADY_EXISTS)
        }
        Err(err) if err.foreign_key_violation() => return Err(error::INVALID_REFERENCE),
        r => r?,
    };

    txn.commit().await?;

    Ok(StatusCode::CREATED)
}

pub async fn update_address<S: StateTrait>(
    State(state): State<S>,
    Path(athlete_id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdateRequest>,
) -> Result<StatusCode> {
    if let Some(cep) = &request.cep {
        if !super::has_digits(cep, 8) {
            return Err(error::JSON_VALIDATE_INVALID);
        }
    }

    if let Some(Some(complement)) = &request.complement {
        if complement.chars().count() > 80 {
            return Err(error::JSON_VALIDATE_INVALID);
        }
    }

    let txn = state.db().begin().await?;

    ensure_athlete(&txn, athlete_id).await?;

    let address = addresses::Entity::find_by_athlete(athlete_id)
        .one(&txn)
        .await?
        .ok_or(error::ADDRESS_NOT_FOUND)?;

    let model = addresses::ActiveModel {
        id: Set(address.id),
        street: set_option(request.street.as_deref().map(upper)),
        number: set_option(request.number.as_deref().map(upper)),
        complement: set_option(
            request
                .complement
                .map(|complement| complement.as_deref().map(upper)),
        ),
        district: set_option(request.district.as_deref().map(upper)),
        city_id: set_option(request.city_id),
        cep: set_option(request.cep.as_deref().map(format::digits)),
        last_edited: Set(Utc::now()),
        ..Default::default()
    };

    let result = addresses::Entity::update(model).exec(&txn).await;

    match result {
        Err(err) if err.foreign_key_violation() => return Err(error::INVALID_REFERENCE),
        r => r?,
    };

    txn.commit().await?;

    Ok(StatusCode::NO_CONTENT)
}

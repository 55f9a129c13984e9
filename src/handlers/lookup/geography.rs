use crate::{
    error::{self, DatabaseError},
    extractors::{Json, UserID, ValidatedJson},
    handlers::ADMIN,
    middlewares::PermissionsLayer,
    utils::format,
    Result, StateTrait,
};
use axum::{
    extract::{Path, State},
    handler::Handler,
    http::StatusCode,
    routing::{get, patch},
    Router,
};
use entity::{
    cities::{self, constraints::*},
    states::{self, constraints::*},
};
use sea_orm::{EntityTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;
use validator::Validate;

#[derive(Serialize)]
pub struct StateEntry {
    id: Uuid,
    name: String,
    abbreviation: String,
}

#[derive(Deserialize, Validate)]
pub struct StateRequest {
    #[validate(length(min = 1, max = 40))]
    name: String,
    #[validate(length(min = 1, max = 10))]
    abbreviation: String,
}

#[derive(Serialize)]
pub struct CityEntry {
    id: Uuid,
    name: String,
    state_id: Uuid,
    /// `"<City> - <UF>"`
    label: String,
}

#[derive(Deserialize, Validate)]
pub struct CityRequest {
    #[validate(length(min = 1, max = 40))]
    name: String,
    state_id: Uuid,
}

async fn list_states<S: StateTrait>(
    State(state): State<S>,
    _: UserID,
) -> Result<Json<Vec<StateEntry>>> {
    let rows = states::Entity::find()
        .order_by_asc(states::Column::Name)
        .all(state.db())
        .await?;

    Ok(Json(
        rows.into_iter()
            .map(|row| StateEntry {
                id: row.id,
                name: row.name,
                abbreviation: row.abbreviation,
            })
            .collect(),
    ))
}

async fn create_state<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<StateRequest>,
) -> Result<(StatusCode, Json<StateEntry>)> {
    let entry = StateEntry {
        id: Uuid::now_v7(),
        name: request.name.trim().to_uppercase(),
        abbreviation: request.abbreviation.trim().to_uppercase(),
    };

    let model = states::ActiveModel {
        id: Set(entry.id),
        name: Set(entry.name.clone()),
        abbreviation: Set(entry.abbreviation.clone()),
    };

    let result = states::Entity::insert(model)
        .exec_without_returning(state.db())
        .await;

    match result {
        Err(err)
            if err.unique_violation(UC_STATES_NAME)
                || err.unique_violation(UC_STATES_ABBREVIATION) =>
        {
            return Err(error::DUPLICATE_LOOKUP)
        }
        r => r?,
    };

    Ok((StatusCode::CREATED, Json(entry)))
}

async fn update_state<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<StateRequest>,
) -> Result<StatusCode> {
    let model = states::ActiveModel {
        id: Set(id),
        name: Set(request.name.trim().to_uppercase()),
        abbreviation: Set(request.abbreviation.trim().to_uppercase()),
    };

    if states::Entity::find_by_id(id).one(state.db()).await?.is_none() {
        return Err(error::LOOKUP_NOT_FOUND);
    }

    let result = states::Entity::update(model).exec(state.db()).await;

    match result {
        Err(err)
            if err.unique_violation(UC_STATES_NAME)
                || err.unique_violation(UC_STATES_ABBREVIATION) =>
        {
            return Err(error::DUPLICATE_LOOKUP)
        }
        r => r?,
    };

    Ok(StatusCode::NO_CONTENT)
}

async fn delete_state<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    let result = states::Entity::delete_by_id(id).exec(state.db()).await;

    let result = match result {
        Err(err) if err.foreign_key_violation() => return Err(error::LOOKUP_IN_USE),
        r => r?,
    };

    if result.rows_affected == 0 {
        return Err(error::LOOKUP_NOT_FOUND);
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Cities ordered by name, labelled with their state's abbreviation.
async fn list_cities<S: StateTrait>(
    State(state): State<S>,
    _: UserID,
) -> Result<Json<Vec<CityEntry>>> {
    let abbreviations: HashMap<Uuid, String> = states::Entity::find()
        .all(state.db())
        .await?
        .into_iter()
        .map(|row| (row.id, row.abbreviation))
        .collect();

    let rows = cities::Entity::find()
        .order_by_asc(cities::Column::Name)
        .all(state.db())
        .await?;

    Ok(Json(
        rows.into_iter()
            .map(|row| {
                let abbreviation = abbreviations
                    .get(&row.state_id)
                    .map(String::as_str)
                    .unwrap_or_default();

                CityEntry {
                    label: format!("{} - {}", format::title(&row.name), abbreviation),
                    id: row.id,
                    name: row.name,
                    state_id: row.state_id,
                }
            })
            .collect(),
    ))
}

async fn create_city<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<CityRequest>,
) -> Result<(StatusCode, Json<CityEntry>)> {
    let parent = states::Entity::find_by_id(request.state_id)
        .one(state.db())
        .await?
        .ok_or(error::INVALID_REFERENCE)?;

    let name = request.name.trim().to_uppercase();
    let entry = CityEntry {
        id: Uuid::now_v7(),
        label: format!("{} - {}", format::title(&name), parent.abbreviation),
        name,
        state_id: parent.id,
    };

    let model = cities::ActiveModel {
        id: Set(entry.id),
        name: Set(entry.name.clone()),
        state_id: Set(entry.state_id),
    };

    let result = cities::Entity::insert(model)
        .exec_without_returning(state.db())
        .await;

    match result {
        Err(err) if err.unique_violation(UC_CITIES_NAME) => return Err(error::DUPLICATE_LOOKUP),
        r => r?,
    };

    Ok((StatusCode::CREATED, Json(entry)))
}

async fn update_city<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<CityRequest>,
) -> Result<StatusCode> {
    if cities::Entity::find_by_id(id).one(state.db()).await?.is_none() {
        return Err(error::LOOKUP_NOT_FOUND);
    }

    let model = cities::ActiveModel {
        id: Set(id),
        name: Set(request.name.trim().to_uppercase()),
        state_id: Set(request.state_id),
    };

    let result = cities::Entity::update(model).exec(state.db()).await;

    match result {
        Err(err) if err.unique_violation(UC_CITIES_NAME) => return Err(error::DUPLICATE_LOOKUP),
        Err(err) if err.foreign_key_violation() => return Err(error::INVALID_REFERENCE),
        r => r?,
    };

    Ok(StatusCode::NO_CONTENT)
}

async fn delete_city<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    let result = cities::Entity::delete_by_id(id).exec(state.db()).await;

    let result = match result {
        Err(err) if err.foreign_key_violation() => return Err(error::LOOKUP_IN_USE),
        r => r?,
    };

    if result.rows_affected == 0 {
        return Err(error::LOOKUP_NOT_FOUND);
    }

    Ok(StatusCode::NO_CONTENT)
}

pub fn state_routes<S: StateTrait>(state: S) -> Router<S> {
    Router::new()
        .route(
            "/",
            get(list_states::<S>)
                .post(create_state::<S>.layer(PermissionsLayer::new(state.clone(), ADMIN))),
        )
        .route(
            "/:id",
            patch(update_state::<S>.layer(PermissionsLayer::new(state.clone(), ADMIN)))
                .delete(delete_state::<S>.layer(PermissionsLayer::new(state, ADMIN))),
        )
}

pub fn city_routes<S: StateTrait>(state: S) -> Router<S> {
    Router::new()
        .route(
            "/",
            get(list_cities::<S>)
                .post(create_city::<S>.layer(PermissionsLayer::new(state.clone(), ADMIN))),
        )
        .route(
            "/:id",
            patch(update_city::<S>.layer(PermissionsLayer::new(state.clone(), ADMIN)))
                .delete(delete_city::<S>.layer(PermissionsLayer::new(state, ADMIN))),
        )
}

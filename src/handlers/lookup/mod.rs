//! Reference tables the athlete forms pick from.
//!
//! GET  /lookup/<kind>
//!
//! # Admin actions
//! POST   /lookup/<kind>
//! PATCH  /lookup/<kind>/:id
//! DELETE /lookup/<kind>/:id

mod geography;

use crate::state::StateTrait;
use axum::Router;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize)]
pub struct Entry {
    id: Uuid,
    name: String,
}

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1, max = 80))]
    name: String,
}

/// Lookup names are compared case-insensitively, so they are stored
/// lowercase.
fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

macro_rules! lookup {
    ($module:ident, $entity:ident, $unique:literal) => {
        mod $module {
            use super::{normalize, Entry, Request};
            use crate::{
                error::{self, DatabaseError},
                extractors::{Json, UserID, ValidatedJson},
                handlers::ADMIN,
                middlewares::PermissionsLayer,
                Result, StateTrait,
            };
            use axum::{
                extract::{Path, State},
                handler::Handler,
                http::StatusCode,
                routing::{get, patch},
                Router,
            };
            use entity::$entity;
            use sea_orm::{
                sea_query::Expr, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set,
            };
            use uuid::Uuid;

            async fn list<S: StateTrait>(
                State(state): State<S>,
                _: UserID,
            ) -> Result<Json<Vec<Entry>>> {
                let rows = $entity::Entity::find()
                    .order_by_asc($entity::Column::Name)
                    .all(state.db())
                    .await?;

                Ok(Json(
                    rows.into_iter()
                        .map(|row| Entry {
                            id: row.id,
                            name: row.name,
                        })
                        .collect(),
                ))
            }

            async fn create<S: StateTrait>(
                State(state): State<S>,
                ValidatedJson(request): ValidatedJson<Request>,
            ) -> Result<(StatusCode, Json<Entry>)> {
                let entry = Entry {
                    id: Uuid::now_v7(),
                    name: normalize(&request.name),
                };

                let model = $entity::ActiveModel {
                    id: Set(entry.id),
                    name: Set(entry.name.clone()),
                };

                let result = $entity::Entity::insert(model)
                    .exec_without_returning(state.db())
                    .await;

                match result {
                    Err(err) if err.unique_violation($unique) => {
                        return Err(error::DUPLICATE_LOOKUP)
                    }
                    r => r?,
                };

                Ok((StatusCode::CREATED, Json(entry)))
            }

            async fn rename<S: StateTrait>(
                State(state): State<S>,
                Path(id): Path<Uuid>,
                ValidatedJson(request): ValidatedJson<Request>,
            ) -> Result<StatusCode> {
                let result = $entity::Entity::update_many()
                    .col_expr($entity::Column::Name, Expr::value(normalize(&request.name)))
                    .filter($entity::Column::Id.eq(id))
                    .exec(state.db())
                    .await;

                let result = match result {
                    Err(err) if err.unique_violation($unique) => {
                        return Err(error::DUPLICATE_LOOKUP)
                    }
                    r => r?,
                };

                if result.rows_affected == 0 {
                    return Err(error::LOOKUP_NOT_FOUND);
                }

                Ok(StatusCode::NO_CONTENT)
            }

            async fn delete<S: StateTrait>(
                State(state): State<S>,
                Path(id): Path<Uuid>,
            ) -> Result<StatusCode> {
                let result = $entity::Entity::delete_by_id(id).exec(state.db()).await;

                let result = match result {
                    Err(err) if err.foreign_key_violation() => return Err(error::LOOKUP_IN_USE),
                    r => r?,
                };

                if result.rows_affected == 0 {
                    return Err(error::LOOKUP_NOT_FOUND);
                }

                Ok(StatusCode::NO_CONTENT)
            }

            pub fn routes<S: StateTrait>(state: S) -> Router<S> {
                Router::new()
                    .route(
                        "/",
                        get(list::<S>).post(
                            create::<S>.layer(PermissionsLayer::new(state.clone(), ADMIN)),
                        ),
                    )
                    .route(
                        "/:id",
                        patch(rename::<S>.layer(PermissionsLayer::new(state.clone(), ADMIN)))
                            .delete(delete::<S>.layer(PermissionsLayer::new(state, ADMIN))),
                    )
            }
        }
    };
}

lookup!(status, statuses, "statuses_name_key");
lookup!(sex, sexes, "sexes_name_key");
lookup!(modality, modalities, "modalities_name_key");
lookup!(position, positions, "positions_name_key");
lookup!(category, categories, "categories_name_key");
lookup!(level, levels, "levels_name_key");

pub fn routes<S: StateTrait>(state: S) -> Router<S> {
    Router::new()
        .nest("/status", status::routes::<S>(state.clone()))
        .nest("/sex", sex::routes::<S>(state.clone()))
        .nest("/modality", modality::routes::<S>(state.clone()))
        .nest("/position", position::routes::<S>(state.clone()))
        .nest("/category", category::routes::<S>(state.clone()))
        .nest("/level", level::routes::<S>(state.clone()))
        .nest("/state", geography::state_routes::<S>(state.clone()))
        .nest("/city", geography::city_routes::<S>(state))
}

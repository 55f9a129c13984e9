mod create;
mod get;
mod list;
mod update;

use crate::{
    error::{self, Result},
    handlers::MANAGERS,
    middlewares::PermissionsLayer,
    state::StateTrait,
};
use axum::{handler::Handler, routing::get, Router};
use entity::{projects, users};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};
use uuid::Uuid;

/// Routes for teams
///
/// GET   /team
/// GET   /team/:id
///
/// # Admin and coordinator actions
/// POST  /team
/// PATCH /team/:id
pub fn routes<S: StateTrait>(state: S) -> Router<S> {
    Router::new()
        .route(
            "/",
            get(list::list_teams::<S>).post(
                create::create_team::<S>.layer(PermissionsLayer::new(state.clone(), MANAGERS)),
            ),
        )
        .route(
            "/:id",
            get(get::get_team::<S>).patch(
                update::update_team::<S>.layer(PermissionsLayer::new(state, MANAGERS)),
            ),
        )
}

/// Teams can only be attached to projects that are still running.
async fn ensure_active_project<C: ConnectionTrait>(db: &C, project_id: Uuid) -> Result {
    let project = projects::Entity::find_by_id(project_id)
        .one(db)
        .await?
        .ok_or(error::PROJECT_NOT_FOUND)?;

    if !project.is_active {
        return Err(error::PROJECT_INACTIVE);
    }

    Ok(())
}

async fn ensure_staff<C: ConnectionTrait>(db: &C, user_id: Uuid) -> Result {
    let lead = users::Entity::find_staff()
        .filter(users::Column::Id.eq(user_id))
        .one(db)
        .await?;

    match lead {
        Some(_) => Ok(()),
        None => Err(error::INVALID_TEAM_LEAD),
    }
}

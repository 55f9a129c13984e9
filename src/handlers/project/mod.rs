mod create;
mod get;
mod list;
mod update;

pub(crate) use list::{project_rows, Filter, ProjectRow};

use crate::{handlers::MANAGERS, middlewares::PermissionsLayer, state::StateTrait};
use axum::{
    handler::Handler,
    routing::get,
    Router,
};

/// Routes for projects
///
/// GET   /project
/// GET   /project/:id
///
/// # Admin and coordinator actions
/// POST  /project
/// PATCH /project/:id
pub fn routes<S: StateTrait>(state: S) -> Router<S> {
    Router::new()
        .route(
            "/",
            get(list::list_projects::<S>).post(
                create::create_project::<S>.layer(PermissionsLayer::new(state.clone(), MANAGERS)),
            ),
        )
        .route(
            "/:id",
            get(get::get_project::<S>).patch(
                update::update_project::<S>.layer(PermissionsLayer::new(state, MANAGERS)),
            ),
        )
}

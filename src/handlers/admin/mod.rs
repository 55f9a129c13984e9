mod audit;
mod users;

use crate::{handlers::ADMIN, middlewares::PermissionsLayer, state::StateTrait};
use axum::{
    routing::{get, patch},
    Router,
};

/// Routes for administrators
///
/// GET   /admin/user
/// PATCH /admin/user/:id
/// GET   /admin/transfer
/// GET   /admin/history
///
/// Audit rows are read-only, there is no route writing them.
pub fn routes<S: StateTrait>(state: S) -> Router<S> {
    Router::new()
        .route("/user", get(users::list_users::<S>))
        .route("/user/:id", patch(users::update_roles::<S>))
        .route("/transfer", get(audit::list_transfers::<S>))
        .route("/history", get(audit::list_history::<S>))
        .route_layer(PermissionsLayer::new(state, ADMIN))
}

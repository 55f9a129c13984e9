mod admin;
mod athlete;
mod dashboard;
mod login;
mod lookup;
mod me;
mod project;
mod register;
mod team;
mod views;

use crate::state::StateTrait;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Router,
};
use entity::users::Role;
use sea_orm::ConnectionTrait;

const ADMIN: &[Role] = &[Role::Admin];
const MANAGERS: &[Role] = &[Role::Admin, Role::Coordinator];
const STAFF: &[Role] = Role::ALL;

pub fn routes<S: StateTrait>(state: S) -> Router<S> {
    Router::new()
        .nest(
            "/v1",
            Router::new()
                .route("/register", post(register::register::<S>))
                .route("/login", post(login::login::<S>))
                .route("/me", get(me::get_me::<S>))
                .route("/dashboard", get(dashboard::get_dashboard::<S>))
                .nest("/lookup", lookup::routes::<S>(state.clone()))
                .nest("/project", project::routes::<S>(state.clone()))
                .nest("/team", team::routes::<S>(state.clone()))
                .nest("/athlete", athlete::routes::<S>(state.clone()))
                .nest("/admin", admin::routes::<S>(state)),
        )
        .route("/livez", get(liveness::<S>))
        .route("/readyz", get(|| async {}))
}

async fn liveness<S: StateTrait>(State(state): State<S>) -> StatusCode {
    if state.db().execute_unprepared("select 1").await.is_err() {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }

    StatusCode::OK
}

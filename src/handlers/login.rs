use crate::{
    error,
    extractors::{Json, ValidatedJson},
    password, Result, StateTrait,
};
use axum::extract::State;
use entity::users;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(email)]
    email: String,
    password: String,
}

#[derive(Serialize)]
pub struct Response {
    token: String,
}

pub async fn login<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<Json<Response>> {
    let user = users::Entity::find_by_email(&request.email.trim().to_lowercase())
        .one(state.db())
        .await?;

    let Some(user) = user else {
        return Err(error::INVALID_CREDENTIALS);
    };

    if !password::verify(&request.password, &user.password) {
        debug!(user_id = %user.id, "wrong password");
        return Err(error::INVALID_CREDENTIALS);
    }

    let token = state.jwt().issue(user.id)?;

    Ok(Json(Response { token }))
}

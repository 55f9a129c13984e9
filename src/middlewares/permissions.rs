use crate::{error, jwt::Claims, StateTrait};
use axum::{
    http::Request,
    response::{IntoResponse, Response},
};
use entity::users::{self, Role};
use futures::{future::BoxFuture, Future};
use sea_orm::EntityTrait;
use std::{
    convert::Infallible,
    task::{Context, Poll},
};
use tower::{Layer, Service};

type RoleList = &'static [Role];

/// Lets a request through only when its user holds one of the roles.
#[derive(Debug, Clone)]
pub struct PermissionsLayer<ST> {
    state: ST,
    roles: RoleList,
}

impl<ST> PermissionsLayer<ST> {
    pub fn new(state: ST, roles: RoleList) -> Self {
        Self { state, roles }
    }
}

impl<S, ST> Layer<S> for PermissionsLayer<ST>
where
    ST: Clone,
{
    type Service = Permissions<S, ST>;

    fn layer(&self, inner: S) -> Self::Service {
        Permissions::new(self.state.clone(), inner, self.roles)
    }
}

#[derive(Debug, Clone)]
pub struct Permissions<S, ST> {
    state: ST,
    inner: S,
    roles: RoleList,
}

impl<S, ST> Permissions<S, ST> {
    fn new(state: ST, inner: S, roles: RoleList) -> Self {
        Permissions { state, inner, roles }
    }
}

impl<S, B, ST> Service<Request<B>> for Permissions<S, ST>
where
    S: Service<Request<B>, Error = Infallible, Response = Response> + Clone + Send + 'static,
    S::Future: Future + Send + 'static,
    B: Send + 'static,
    ST: StateTrait,
{
    type Response = Response;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<B>) -> Self::Future {
        let Some(claims) = req.extensions().get::<Claims>() else {
            return Box::pin(async { Ok(error::NOT_ENOUGH_PERMISSIONS.into_response()) });
        };

        let user_id = claims.sub;
        let roles = self.roles;
        let state = self.state.clone();

        // the inner service was driven to readiness, keep that one for this call
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        Box::pin(async move {
            let user = match users::Entity::find_by_id(user_id).one(state.db()).await {
                Ok(user) => user,
                Err(err) => {
                    error!("failed to load user for permission check: {:?}", err);
                    return Ok(error::DATABASE_ERROR.into_response());
                }
            };

            match user {
                Some(user) if user.has_any_role(roles) => inner.call(req).await,
                Some(_) => {
                    debug!(%user_id, ?roles, "user lacks the required roles");
                    Ok(error::NOT_ENOUGH_PERMISSIONS.into_response())
                }
                None => {
                    warn!(%user_id, "token subject does not exist");
                    Ok(error::NOT_ENOUGH_PERMISSIONS.into_response())
                }
            }
        })
    }
}

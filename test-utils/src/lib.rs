pub mod macros;
pub mod prelude;
mod request;
mod response;
mod seed;
mod user;

pub use macros::macro_support;
pub use request::*;
pub use response::*;
pub use seed::Seed;
pub use user::*;

use entity::users;
use http::StatusCode;
use migration::MigratorTrait;
use reqwest::Client;
use roster_backend::{jwt::Jwt, State};
use sea_orm::{ConnectOptions, Database, DbConn, EntityTrait, Set};
use serde_json::{json, Value};
use std::{
    net::{Ipv4Addr, SocketAddr},
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};
use tokio::net::TcpListener;
use uuid::Uuid;

pub const JWT_SECRET: &[u8] = b"roster-test-secret";
pub const USER_PASSWORD: &str = "secret123";

#[derive(Debug)]
struct AppInner {
    addr: SocketAddr,
    db: DbConn,
}

/// A running server with its own freshly migrated in-memory database.
#[derive(Clone, Debug)]
pub struct App {
    inner: Arc<AppInner>,
}

impl App {
    pub async fn new() -> Self {
        let mut opts = ConnectOptions::new("sqlite::memory:".to_owned());
        // one connection keeps the in-memory database alive for the whole test
        opts.max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);

        let db = Database::connect(opts)
            .await
            .expect("failed to connect to database");

        migration::Migrator::fresh(&db)
            .await
            .expect("failed to apply migrations");

        let listener = TcpListener::bind(SocketAddr::from((Ipv4Addr::LOCALHOST, 0)))
            .await
            .expect("failed to bind tcp listener");
        let addr = listener.local_addr().expect("no local address");

        let state = State::with_database(db.clone(), Jwt::new(JWT_SECRET, 3600));

        tokio::spawn(async move {
            roster_backend::run(listener, state)
                .await
                .expect("server stopped");
        });

        App {
            inner: Arc::new(AppInner { addr, db }),
        }
    }

    pub fn db(&self) -> &DbConn {
        &self.inner.db
    }

    /// Registers a user without any role.
    pub async fn register_user(&self) -> User {
        static USER_COUNT: AtomicU64 = AtomicU64::new(0);

        let number = USER_COUNT.fetch_add(1, Ordering::Relaxed);
        let email = format!("test-user-{number}@test.test");

        let res = self
            .post("/v1/register")
            .json(&json!({
                "first_name": "Test",
                "last_name": format!("User {number}"),
                "email": email,
                "password": USER_PASSWORD,
                "confirm_password": USER_PASSWORD,
                "phone1": "(11) 98765-4321",
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        let body: Value = res.json().await;
        let id = body["id"]
            .as_str()
            .and_then(|id| Uuid::parse_str(id).ok())
            .expect("no id in register response");
        let token = body["token"]
            .as_str()
            .expect("no token in register response")
            .to_owned();

        User::new(id, email, token)
    }

    /// Sets the role flags of a user straight in the database.
    pub async fn set_roles(&self, user: &User, admin: bool, coord: bool, tecnico: bool) {
        let model = users::ActiveModel {
            id: Set(user.id),
            is_admin: Set(admin),
            is_coord: Set(coord),
            is_tecnico: Set(tecnico),
            ..Default::default()
        };

        users::Entity::update(model)
            .exec(self.db())
            .await
            .expect("failed to set roles");
    }

    pub async fn register_admin(&self) -> User {
        let user = self.register_user().await;
        self.set_roles(&user, true, false, false).await;
        user
    }

    pub async fn register_coordinator(&self) -> User {
        let user = self.register_user().await;
        self.set_roles(&user, false, true, false).await;
        user
    }

    pub async fn register_technician(&self) -> User {
        let user = self.register_user().await;
        self.set_roles(&user, false, false, true).await;
        user
    }

    pub fn get(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(Client::new().get(self.url(url)))
    }

    pub fn post(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(Client::new().post(self.url(url)))
    }

    pub fn patch(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(Client::new().patch(self.url(url)))
    }

    pub fn delete(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(Client::new().delete(self.url(url)))
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.inner.addr, path)
    }
}

/// Reads the `id` of a creation response.
pub async fn created_id(res: TestResponse) -> Uuid {
    assert_eq!(res.status(), StatusCode::CREATED);

    let body: Value = res.json().await;

    body["id"]
        .as_str()
        .and_then(|id| Uuid::parse_str(id).ok())
        .expect("no id in response")
}

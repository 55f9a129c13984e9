use crate::jwt::Jwt;
use rand::{
    rngs::{adapter::ReseedingRng, OsRng},
    CryptoRng, Rng, RngCore, SeedableRng,
};
use rand_chacha::{ChaCha20Core, ChaCha20Rng};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, TransactionTrait};
use std::{cell::RefCell, env, sync::Arc};
use tracing::log::LevelFilter;

pub trait StateTrait: Send + Sync + Clone + 'static {
    type Db: ConnectionTrait + TransactionTrait + Clone;
    type Rand: RngCore + CryptoRng + Send;

    fn db(&self) -> &Self::Db;
    fn jwt(&self) -> &Jwt;
    fn rng(&self) -> Self::Rand;
}

pub struct State {
    database: DbConn,
    jwt: Jwt,
}

impl State {
    pub async fn new() -> anyhow::Result<Arc<Self>> {
        let database = Self::connect_database().await?;
        let jwt = Jwt::from_env()?;

        Ok(Self::with_database(database, jwt))
    }

    pub fn with_database(conn: DbConn, jwt: Jwt) -> Arc<Self> {
        Arc::new(Self {
            database: conn,
            jwt,
        })
    }

    async fn connect_database() -> anyhow::Result<DbConn> {
        info!("Trying to connect to database");

        let url = env::var("DATABASE_URL").inspect_err(|_| error!("DATABASE_URL is not set"))?;
        let mut opts = ConnectOptions::new(url);
        opts.sqlx_logging_level(LevelFilter::Debug);

        let db = Database::connect(opts)
            .await
            .inspect_err(|err| error!("failed to connect to database: {err}"))?;

        info!("Connected to database");

        Ok(db)
    }
}

thread_local! {
    static CHACHA_THREAD_RNG: RefCell<ReseedingRng<ChaCha20Core, OsRng>> = {
        let rng = ChaCha20Core::from_entropy();
        RefCell::new(ReseedingRng::new(rng, 1024*64, OsRng))
    }
}

impl StateTrait for Arc<State> {
    type Db = DbConn;
    type Rand = ChaCha20Rng;

    fn db(&self) -> &Self::Db {
        &self.database
    }

    fn jwt(&self) -> &Jwt {
        &self.jwt
    }

    fn rng(&self) -> Self::Rand {
        CHACHA_THREAD_RNG.with(|rng| ChaCha20Rng::from_seed(rng.borrow_mut().gen()))
    }
}

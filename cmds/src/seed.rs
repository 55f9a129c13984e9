use entity::{sexes, statuses};
use sea_orm::{ConnectionTrait, EntityTrait, Set};
use std::process::ExitCode;
use uuid::Uuid;

const STATUSES: &[&str] = &[
    statuses::constants::ACTIVE,
    statuses::constants::INJURED,
    statuses::constants::SUSPENDED,
];

const SEXES: &[&str] = &[sexes::constants::FEMALE, sexes::constants::MALE];

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    cmds::init();
    cmds::exit(run().await)
}

async fn run() -> anyhow::Result<()> {
    let db = cmds::connect().await?;

    for name in STATUSES {
        seed_status(&db, name).await?;
    }

    for name in SEXES {
        seed_sex(&db, name).await?;
    }

    Ok(())
}

async fn seed_status<C: ConnectionTrait>(db: &C, name: &str) -> anyhow::Result<()> {
    if statuses::Entity::find_by_name(name).one(db).await?.is_some() {
        return Ok(());
    }

    statuses::Entity::insert(statuses::ActiveModel {
        id: Set(Uuid::now_v7()),
        name: Set(name.to_owned()),
    })
    .exec_without_returning(db)
    .await?;

    tracing::info!("added status {name}");

    Ok(())
}

async fn seed_sex<C: ConnectionTrait>(db: &C, name: &str) -> anyhow::Result<()> {
    if sexes::Entity::find_by_name(name).one(db).await?.is_some() {
        return Ok(());
    }

    sexes::Entity::insert(sexes::ActiveModel {
        id: Set(Uuid::now_v7()),
        name: Set(name.to_owned()),
    })
    .exec_without_returning(db)
    .await?;

    tracing::info!("added sex {name}");

    Ok(())
}

use anyhow::{anyhow, Context};
use chrono::Utc;
use entity::users;
use sea_orm::{EntityTrait, Set};
use std::{env, process::ExitCode};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    cmds::init();
    cmds::exit(run().await)
}

/// Grants every role to an already registered user.
async fn run() -> anyhow::Result<()> {
    let email = env::args()
        .nth(1)
        .context("usage: create_admin_user <email>")?
        .trim()
        .to_lowercase();

    let db = cmds::connect().await?;

    let user = users::Entity::find_by_email(&email)
        .one(&db)
        .await?
        .ok_or_else(|| anyhow!("no user registered with {email}"))?;

    let model = users::ActiveModel {
        id: Set(user.id),
        is_admin: Set(true),
        is_coord: Set(true),
        is_tecnico: Set(true),
        last_edited: Set(Utc::now()),
        ..Default::default()
    };

    users::Entity::update(model).exec(&db).await?;

    tracing::info!(user_id = %user.id, "granted all roles to {email}");

    Ok(())
}

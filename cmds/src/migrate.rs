use migration::MigratorTrait;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    cmds::init();
    cmds::exit(run().await)
}

async fn run() -> anyhow::Result<()> {
    let db = cmds::connect().await?;

    migration::Migrator::up(&db, None).await?;

    tracing::info!("migrations applied");

    Ok(())
}

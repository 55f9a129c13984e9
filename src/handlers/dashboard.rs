use crate::{
    extractors::{Json, UserID},
    handlers::{
        project::{project_rows, Filter, ProjectRow},
        views::{self, TransferView},
    },
    Result, StateTrait,
};
use axum::extract::{Query, State};
use entity::{
    athletes, projects,
    statuses::{self, constants::*},
    teams, transfers,
};
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect,
    TransactionTrait,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StatusCounts {
    active: u64,
    injured: u64,
    suspended: u64,
}

#[derive(Debug, Serialize)]
pub struct Response {
    active_projects: u64,
    active_teams: u64,
    athletes: u64,
    statuses: StatusCounts,
    latest_transfers: Vec<TransferView>,
    projects: Vec<ProjectRow>,
}

async fn count_with_status<C: ConnectionTrait>(db: &C, name: &str) -> Result<u64> {
    let Some(status) = statuses::Entity::find_by_name(name).one(db).await? else {
        return Ok(0);
    };

    let count = athletes::Entity::find()
        .filter(athletes::Column::StatusId.eq(status.id))
        .count(db)
        .await?;

    Ok(count)
}

pub async fn get_dashboard<S: StateTrait>(
    State(state): State<S>,
    _: UserID,
    Query(filter): Query<Filter>,
) -> Result<Json<Response>> {
    let txn = state.db().begin().await?;

    let active_projects = projects::Entity::find_active().count(&txn).await?;
    let active_teams = teams::Entity::find_active().count(&txn).await?;
    let athletes = athletes::Entity::find().count(&txn).await?;

    let statuses = StatusCounts {
        active: count_with_status(&txn, ACTIVE).await?,
        injured: count_with_status(&txn, INJURED).await?,
        suspended: count_with_status(&txn, SUSPENDED).await?,
    };

    let latest = transfers::Entity::find_latest().limit(5).all(&txn).await?;
    let latest_transfers = views::transfer_views(&txn, latest).await?;

    let projects = project_rows(&txn, &filter).await?;

    txn.commit().await?;

    Ok(Json(Response {
        active_projects,
        active_teams,
        athletes,
        statuses,
        latest_transfers,
        projects,
    }))
}

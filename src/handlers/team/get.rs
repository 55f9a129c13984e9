use crate::{
    error,
    extractors::{Json, UserID},
    handlers::views::{self, AthleteRow},
    utils::format,
    Result, StateTrait,
};
use axum::extract::{Path, State};
use entity::{athletes, projects, teams, users};
use sea_orm::{EntityTrait, QueryOrder, TransactionTrait};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct Response {
    id: Uuid,
    name: String,
    project_id: Uuid,
    project: String,
    lead_id: Uuid,
    lead: String,
    is_active: bool,
    created_at: String,
    athlete_count: usize,
    athletes: Vec<AthleteRow>,
}

pub async fn get_team<S: StateTrait>(
    State(state): State<S>,
    _: UserID,
    Path(id): Path<Uuid>,
) -> Result<Json<Response>> {
    let txn = state.db().begin().await?;

    let team = teams::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(error::TEAM_NOT_FOUND)?;

    let project = projects::Entity::find_by_id(team.project_id).one(&txn).await?;
    let lead = users::Entity::find_by_id(team.lead_id).one(&txn).await?;

    let athletes = athletes::Entity::find_in_team(team.id)
        .order_by_asc(athletes::Column::FirstName)
        .all(&txn)
        .await?;
    let athletes = views::athlete_rows(&txn, athletes).await?;

    txn.commit().await?;

    Ok(Json(Response {
        id: team.id,
        name: format::title(&team.name),
        project_id: team.project_id,
        project: project
            .map(|project| format::title(&project.name))
            .unwrap_or_default(),
        lead_id: team.lead_id,
        lead: lead
            .map(|lead| format::title(&lead.full_name()))
            .unwrap_or_default(),
        is_active: team.is_active,
        created_at: format::date(&team.created_at),
        athlete_count: athletes.len(),
        athletes,
    }))
}

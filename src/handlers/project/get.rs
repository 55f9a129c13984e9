use crate::{
    error,
    extractors::{Json, UserID},
    handlers::views::{self, AthleteRow},
    utils::format,
    Result, StateTrait,
};
use axum::extract::{Path, State};
use entity::{athletes, cities, projects, teams, users};
use sea_orm::{EntityTrait, PaginatorTrait, QueryOrder, TransactionTrait};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct Team {
    id: Uuid,
    name: String,
    lead: String,
    is_active: bool,
    athlete_count: u64,
}

#[derive(Debug, Serialize)]
pub struct Response {
    id: Uuid,
    name: String,
    description: Option<String>,
    is_active: bool,
    city: String,
    responsible: String,
    created_at: String,
    teams: Vec<Team>,
    athletes: Vec<AthleteRow>,
}

pub async fn get_project<S: StateTrait>(
    State(state): State<S>,
    _: UserID,
    Path(id): Path<Uuid>,
) -> Result<Json<Response>> {
    let txn = state.db().begin().await?;

    let project = projects::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(error::PROJECT_NOT_FOUND)?;

    let city = cities::Entity::find_by_id(project.city_id).one(&txn).await?;
    let responsible = users::Entity::find_by_id(project.responsible_id)
        .one(&txn)
        .await?;

    let project_teams = teams::Entity::find_in_project(project.id)
        .order_by_asc(teams::Column::Name)
        .all(&txn)
        .await?;
    let leads = views::user_full_names(&txn, project_teams.iter().map(|team| team.lead_id)).await?;

    let mut teams = Vec::with_capacity(project_teams.len());

    for team in project_teams {
        let athlete_count = athletes::Entity::find_in_team(team.id).count(&txn).await?;

        teams.push(Team {
            lead: leads
                .get(&team.lead_id)
                .map(|name| format::title(name))
                .unwrap_or_default(),
            id: team.id,
            name: format::title(&team.name),
            is_active: team.is_active,
            athlete_count,
        });
    }

    let athletes = athletes::Entity::find_in_project(project.id)
        .order_by_asc(athletes::Column::FirstName)
        .all(&txn)
        .await?;
    let athletes = views::athlete_rows(&txn, athletes).await?;

    txn.commit().await?;

    Ok(Json(Response {
        id: project.id,
        name: format::title(&project.name),
        description: project.description,
        is_active: project.is_active,
        city: city.map(|city| format::title(&city.name)).unwrap_or_default(),
        responsible: responsible
            .map(|user| format::title(&user.full_name()))
            .unwrap_or_default(),
        created_at: format::date(&project.created_at),
        teams,
        athletes,
    }))
}

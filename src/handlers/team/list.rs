use crate::{
    extractors::{Json, UserID},
    handlers::views,
    utils::format,
    Result, StateTrait,
};
use axum::extract::{Query, State};
use entity::{athletes, teams};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct Filter {
    project: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct Team {
    id: Uuid,
    name: String,
    project_id: Uuid,
    project: String,
    lead: String,
    is_active: bool,
    athlete_count: u64,
}

pub async fn list_teams<S: StateTrait>(
    State(state): State<S>,
    _: UserID,
    Query(filter): Query<Filter>,
) -> Result<Json<Vec<Team>>> {
    let txn = state.db().begin().await?;

    let mut query = teams::Entity::find().order_by_asc(teams::Column::Name);

    if let Some(project) = filter.project {
        query = query.filter(teams::Column::ProjectId.eq(project));
    }

    let teams = query.all(&txn).await?;
    let projects = views::project_names(&txn, teams.iter().map(|team| team.project_id)).await?;
    let leads = views::user_full_names(&txn, teams.iter().map(|team| team.lead_id)).await?;

    let mut response = Vec::with_capacity(teams.len());

    for team in teams {
        let athlete_count = athletes::Entity::find_in_team(team.id).count(&txn).await?;

        response.push(Team {
            project: projects
                .get(&team.project_id)
                .map(|name| format::title(name))
                .unwrap_or_default(),
            lead: leads
                .get(&team.lead_id)
                .map(|name| format::title(name))
                .unwrap_or_default(),
            id: team.id,
            name: format::title(&team.name),
            project_id: team.project_id,
            is_active: team.is_active,
            athlete_count,
        });
    }

    txn.commit().await?;
    Ok(Json(response))
}

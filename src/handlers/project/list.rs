use crate::{
    extractors::{Json, UserID},
    utils::format,
    Result, StateTrait,
};
use axum::extract::{Query, State};
use entity::{athletes, cities, projects, teams};
use sea_orm::{
    sea_query::{Expr, LikeExpr},
    ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activity {
    Active,
    Inactive,
}

#[derive(Debug, Deserialize)]
pub struct Filter {
    /// Case-insensitive substring of the project name.
    q: Option<String>,
    status: Option<Activity>,
    city: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct ProjectRow {
    id: Uuid,
    name: String,
    description: Option<String>,
    is_active: bool,
    city: String,
    team_count: u64,
    athlete_count: u64,
}

/// Matches `%` and `_` literally.
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }

    escaped
}

pub async fn project_rows<C: ConnectionTrait>(
    db: &C,
    filter: &Filter,
) -> Result<Vec<ProjectRow>> {
    let mut query = projects::Entity::find().order_by_asc(projects::Column::Name);

    if let Some(q) = filter.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
        // names are stored uppercase
        let pattern = format!("%{}%", escape_like(&q.to_uppercase()));
        query = query.filter(
            Expr::col((projects::Entity, projects::Column::Name))
                .like(LikeExpr::new(pattern).escape('\\')),
        );
    }

    if let Some(status) = filter.status {
        query = query.filter(projects::Column::IsActive.eq(matches!(status, Activity::Active)));
    }

    if let Some(city) = filter.city {
        query = query.filter(projects::Column::CityId.eq(city));
    }

    let projects = query.all(db).await?;

    let cities: HashMap<Uuid, String> = cities::Entity::find()
        .filter(cities::Column::Id.is_in(projects.iter().map(|project| project.city_id)))
        .all(db)
        .await?
        .into_iter()
        .map(|city| (city.id, city.name))
        .collect();

    let mut rows = Vec::with_capacity(projects.len());

    for project in projects {
        let team_count = teams::Entity::find_in_project(project.id).count(db).await?;
        let athlete_count = athletes::Entity::find_in_project(project.id)
            .count(db)
            .await?;

        rows.push(ProjectRow {
            city: cities
                .get(&project.city_id)
                .map(|name| format::title(name))
                .unwrap_or_default(),
            id: project.id,
            name: format::title(&project.name),
            description: project.description,
            is_active: project.is_active,
            team_count,
            athlete_count,
        });
    }

    Ok(rows)
}

pub async fn list_projects<S: StateTrait>(
    State(state): State<S>,
    _: UserID,
    Query(filter): Query<Filter>,
) -> Result<Json<Vec<ProjectRow>>> {
    Ok(Json(project_rows(state.db(), &filter).await?))
}

#[cfg(test)]
mod tests {
    use super::escape_like;

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("SUB_17 100%"), r"SUB\_17 100\%");
        assert_eq!(escape_like(r"A\B"), r"A\\B");
        assert_eq!(escape_like("CAMPINAS"), "CAMPINAS");
    }
}

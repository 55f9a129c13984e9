use crate::{
    error,
    extractors::Json,
    handlers::views::{self, HistoryView, LookupNames},
    utils::format,
    Result, StateTrait,
};
use axum::extract::{Path, State};
use entity::{addresses, athlete_history, athletes, cities, projects, states, teams};
use sea_orm::{EntityTrait, TransactionTrait};
use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct Lookup {
    id: Uuid,
    name: String,
}

#[derive(Debug, Serialize)]
pub struct Address {
    street: String,
    number: String,
    complement: Option<String>,
    district: String,
    city_id: Uuid,
    city: String,
    cep: String,
}

#[derive(Debug, Serialize)]
pub struct Response {
    id: Uuid,
    first_name: String,
    last_name: String,
    email: String,
    birth_date: String,
    phone1: String,
    phone2: Option<String>,
    rg: String,
    cpf: String,
    team: Lookup,
    project: Option<Lookup>,
    sex: Lookup,
    modality: Lookup,
    position: Lookup,
    category: Lookup,
    level: Lookup,
    status: Lookup,
    address: Option<Address>,
    history: Vec<HistoryView>,
}

fn lookup(names: &HashMap<Uuid, String>, id: Uuid) -> Lookup {
    Lookup {
        id,
        name: names
            .get(&id)
            .map(|name| format::title(name))
            .unwrap_or_default(),
    }
}

pub async fn get_athlete<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<Uuid>,
) -> Result<Json<Response>> {
    let txn = state.db().begin().await?;

    let athlete = athletes::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(error::ATHLETE_NOT_FOUND)?;

    let team = teams::Entity::find_by_id(athlete.team_id).one(&txn).await?;
    let project = match &team {
        Some(team) => projects::Entity::find_by_id(team.project_id).one(&txn).await?,
        None => None,
    };

    let lookups = LookupNames::load(&txn).await?;

    let address = match addresses::Entity::find_by_athlete(athlete.id).one(&txn).await? {
        Some(address) => {
            let city = cities::Entity::find_by_id(address.city_id).one(&txn).await?;
            let uf = match &city {
                Some(city) => states::Entity::find_by_id(city.state_id).one(&txn).await?,
                None => None,
            };

            let city = match (city, uf) {
                (Some(city), Some(uf)) => format!("{} - {}", format::title(&city.name), uf.abbreviation),
                (Some(city), None) => format::title(&city.name),
                _ => String::new(),
            };

            Some(Address {
                street: format::title(&address.street),
                number: address.number,
                complement: address.complement.as_deref().map(format::title),
                district: format::title(&address.district),
                city_id: address.city_id,
                city,
                cep: format::cep(&address.cep),
            })
        }
        None => None,
    };

    let history = athlete_history::Entity::find_for_athlete(athlete.id)
        .all(&txn)
        .await?;
    let history = views::history_views(&txn, history).await?;

    txn.commit().await?;

    Ok(Json(Response {
        id: athlete.id,
        first_name: format::title(&athlete.first_name),
        last_name: format::title(&athlete.last_name),
        email: athlete.email,
        birth_date: athlete.birth_date.format("%d/%m/%Y").to_string(),
        phone1: format::phone(&athlete.phone1),
        phone2: athlete.phone2.as_deref().map(format::phone),
        rg: format::rg(&athlete.rg),
        cpf: format::cpf(&athlete.cpf),
        team: Lookup {
            id: athlete.team_id,
            name: team
                .map(|team| format::title(&team.name))
                .unwrap_or_default(),
        },
        project: project.map(|project| Lookup {
            id: project.id,
            name: format::title(&project.name),
        }),
        sex: lookup(&lookups.sexes, athlete.sex_id),
        modality: lookup(&lookups.modalities, athlete.modality_id),
        position: lookup(&lookups.positions, athlete.position_id),
        category: lookup(&lookups.categories, athlete.category_id),
        level: lookup(&lookups.levels, athlete.level_id),
        status: lookup(&lookups.statuses, athlete.status_id),
        address,
        history,
    }))
}

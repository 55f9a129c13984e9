//! Read models shared by several endpoints. Stored names are uppercase (or
//! lowercase for lookups), views render them title cased.

use crate::utils::format;
use entity::{
    athlete_history, athletes, categories, levels, modalities, positions, projects, sexes,
    statuses, teams, transfers, users,
};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

type Names = HashMap<Uuid, String>;

fn name_of(names: &Names, id: &Uuid) -> String {
    names.get(id).map(|name| format::title(name)).unwrap_or_default()
}

/// Every athlete lookup table, keyed by id.
pub struct LookupNames {
    pub sexes: Names,
    pub modalities: Names,
    pub positions: Names,
    pub categories: Names,
    pub levels: Names,
    pub statuses: Names,
}

impl LookupNames {
    pub async fn load<C: ConnectionTrait>(db: &C) -> Result<Self, DbErr> {
        let sexes = sexes::Entity::find().all(db).await?;
        let modalities = modalities::Entity::find().all(db).await?;
        let positions = positions::Entity::find().all(db).await?;
        let categories = categories::Entity::find().all(db).await?;
        let levels = levels::Entity::find().all(db).await?;
        let statuses = statuses::Entity::find().all(db).await?;

        Ok(Self {
            sexes: sexes.into_iter().map(|row| (row.id, row.name)).collect(),
            modalities: modalities.into_iter().map(|row| (row.id, row.name)).collect(),
            positions: positions.into_iter().map(|row| (row.id, row.name)).collect(),
            categories: categories.into_iter().map(|row| (row.id, row.name)).collect(),
            levels: levels.into_iter().map(|row| (row.id, row.name)).collect(),
            statuses: statuses.into_iter().map(|row| (row.id, row.name)).collect(),
        })
    }
}

pub async fn project_names<C: ConnectionTrait>(
    db: &C,
    ids: impl IntoIterator<Item = Uuid>,
) -> Result<Names, DbErr> {
    let ids: HashSet<Uuid> = ids.into_iter().collect();

    Ok(projects::Entity::find()
        .filter(projects::Column::Id.is_in(ids))
        .all(db)
        .await?
        .into_iter()
        .map(|row| (row.id, row.name))
        .collect())
}

pub async fn team_names<C: ConnectionTrait>(
    db: &C,
    ids: impl IntoIterator<Item = Uuid>,
) -> Result<Names, DbErr> {
    let ids: HashSet<Uuid> = ids.into_iter().collect();

    Ok(teams::Entity::find()
        .filter(teams::Column::Id.is_in(ids))
        .all(db)
        .await?
        .into_iter()
        .map(|row| (row.id, row.name))
        .collect())
}

pub async fn user_first_names<C: ConnectionTrait>(
    db: &C,
    ids: impl IntoIterator<Item = Uuid>,
) -> Result<Names, DbErr> {
    let ids: HashSet<Uuid> = ids.into_iter().collect();

    Ok(users::Entity::find()
        .filter(users::Column::Id.is_in(ids))
        .all(db)
        .await?
        .into_iter()
        .map(|row| (row.id, row.first_name))
        .collect())
}

pub async fn user_full_names<C: ConnectionTrait>(
    db: &C,
    ids: impl IntoIterator<Item = Uuid>,
) -> Result<Names, DbErr> {
    let ids: HashSet<Uuid> = ids.into_iter().collect();

    Ok(users::Entity::find()
        .filter(users::Column::Id.is_in(ids))
        .all(db)
        .await?
        .into_iter()
        .map(|row| (row.id, row.full_name()))
        .collect())
}

#[derive(Debug, Serialize)]
pub struct AthleteRow {
    pub id: Uuid,
    pub name: String,
    pub team_id: Uuid,
    pub team: String,
    pub modality: String,
    pub position: String,
    pub category: String,
    pub level: String,
    pub status: String,
}

pub async fn athlete_rows<C: ConnectionTrait>(
    db: &C,
    athletes: Vec<athletes::Model>,
) -> Result<Vec<AthleteRow>, DbErr> {
    let lookups = LookupNames::load(db).await?;
    let teams = team_names(db, athletes.iter().map(|athlete| athlete.team_id)).await?;

    Ok(athletes
        .into_iter()
        .map(|athlete| AthleteRow {
            id: athlete.id,
            name: format::title(&athlete.full_name()),
            team_id: athlete.team_id,
            team: name_of(&teams, &athlete.team_id),
            modality: name_of(&lookups.modalities, &athlete.modality_id),
            position: name_of(&lookups.positions, &athlete.position_id),
            category: name_of(&lookups.categories, &athlete.category_id),
            level: name_of(&lookups.levels, &athlete.level_id),
            status: name_of(&lookups.statuses, &athlete.status_id),
        })
        .collect())
}

#[derive(Debug, Serialize)]
pub struct TransferView {
    pub id: Uuid,
    pub athlete_id: Uuid,
    pub athlete: String,
    pub origin_project: String,
    pub origin_team: String,
    pub destination_project: String,
    pub destination_team: String,
    pub reason: Option<String>,
    pub responsible: String,
    pub created_at: String,
}

pub async fn transfer_views<C: ConnectionTrait>(
    db: &C,
    transfers: Vec<transfers::Model>,
) -> Result<Vec<TransferView>, DbErr> {
    let athletes: Names = athletes::Entity::find()
        .filter(
            athletes::Column::Id.is_in(
                transfers
                    .iter()
                    .map(|transfer| transfer.athlete_id)
                    .collect::<HashSet<_>>(),
            ),
        )
        .all(db)
        .await?
        .into_iter()
        .map(|athlete| (athlete.id, athlete.first_name))
        .collect();

    let projects = project_names(
        db,
        transfers.iter().flat_map(|transfer| {
            [transfer.origin_project_id, transfer.destination_project_id]
        }),
    )
    .await?;

    let teams = team_names(
        db,
        transfers
            .iter()
            .flat_map(|transfer| [transfer.origin_team_id, transfer.destination_team_id]),
    )
    .await?;

    let users = user_first_names(db, transfers.iter().map(|transfer| transfer.responsible_id))
        .await?;

    Ok(transfers
        .into_iter()
        .map(|transfer| TransferView {
            id: transfer.id,
            athlete_id: transfer.athlete_id,
            athlete: name_of(&athletes, &transfer.athlete_id),
            origin_project: name_of(&projects, &transfer.origin_project_id),
            origin_team: name_of(&teams, &transfer.origin_team_id),
            destination_project: name_of(&projects, &transfer.destination_project_id),
            destination_team: name_of(&teams, &transfer.destination_team_id),
            reason: transfer.reason,
            responsible: name_of(&users, &transfer.responsible_id),
            created_at: format::date_time(&transfer.created_at),
        })
        .collect())
}

#[derive(Debug, Serialize)]
pub struct HistoryView {
    pub id: Uuid,
    pub athlete_id: Uuid,
    pub status: String,
    pub reason: Option<String>,
    pub project: String,
    pub team: String,
    pub responsible: String,
    pub created_at: String,
}

pub async fn history_views<C: ConnectionTrait>(
    db: &C,
    entries: Vec<athlete_history::Model>,
) -> Result<Vec<HistoryView>, DbErr> {
    let statuses: Names = statuses::Entity::find()
        .all(db)
        .await?
        .into_iter()
        .map(|row| (row.id, row.name))
        .collect();
    let projects = project_names(db, entries.iter().map(|entry| entry.project_id)).await?;
    let teams = team_names(db, entries.iter().map(|entry| entry.team_id)).await?;
    let users = user_first_names(db, entries.iter().map(|entry| entry.responsible_id)).await?;

    Ok(entries
        .into_iter()
        .map(|entry| HistoryView {
            id: entry.id,
            athlete_id: entry.athlete_id,
            status: name_of(&statuses, &entry.status_id),
            reason: entry.reason,
            project: name_of(&projects, &entry.project_id),
            team: name_of(&teams, &entry.team_id),
            responsible: name_of(&users, &entry.responsible_id),
            created_at: format::date_time(&entry.created_at),
        })
        .collect())
}

use crate::{
    error,
    extractors::Json,
    handlers::views::{self, TransferView},
    Result, StateTrait,
};
use axum::extract::{Path, State};
use entity::{athletes, transfers};
use sea_orm::{EntityTrait, TransactionTrait};
use uuid::Uuid;

pub async fn list_transfers<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<TransferView>>> {
    let txn = state.db().begin().await?;

    if athletes::Entity::find_by_id(id).one(&txn).await?.is_none() {
        return Err(error::ATHLETE_NOT_FOUND);
    }

    let transfers = transfers::Entity::find_for_athlete(id).all(&txn).await?;
    let transfers = views::transfer_views(&txn, transfers).await?;

    txn.commit().await?;

    Ok(Json(transfers))
}

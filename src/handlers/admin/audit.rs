use crate::{
    extractors::Json,
    handlers::views::{self, HistoryView, TransferView},
    Result, StateTrait,
};
use axum::extract::{Query, State};
use entity::{athlete_history, transfers};
use sea_orm::{QuerySelect, TransactionTrait};
use serde::Deserialize;

const DEFAULT_LIMIT: u64 = 100;

#[derive(Debug, Deserialize)]
pub struct Page {
    limit: Option<u64>,
    offset: Option<u64>,
}

impl Page {
    fn limit(&self) -> u64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).min(DEFAULT_LIMIT * 10)
    }

    fn offset(&self) -> u64 {
        self.offset.unwrap_or(0)
    }
}

pub async fn list_transfers<S: StateTrait>(
    State(state): State<S>,
    Query(page): Query<Page>,
) -> Result<Json<Vec<TransferView>>> {
    let txn = state.db().begin().await?;

    let transfers = transfers::Entity::find_latest()
        .limit(page.limit())
        .offset(page.offset())
        .all(&txn)
        .await?;
    let transfers = views::transfer_views(&txn, transfers).await?;

    txn.commit().await?;

    Ok(Json(transfers))
}

pub async fn list_history<S: StateTrait>(
    State(state): State<S>,
    Query(page): Query<Page>,
) -> Result<Json<Vec<HistoryView>>> {
    let txn = state.db().begin().await?;

    let history = athlete_history::Entity::find_latest()
        .limit(page.limit())
        .offset(page.offset())
        .all(&txn)
        .await?;
    let history = views::history_views(&txn, history).await?;

    txn.commit().await?;

    Ok(Json(history))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_is_capped() {
        let page = Page {
            limit: Some(1_000_000),
            offset: None,
        };

        assert_eq!(page.limit(), 1000);
        assert_eq!(page.offset(), 0);
        assert_eq!(
            Page {
                limit: None,
                offset: Some(5)
            }
            .limit(),
            DEFAULT_LIMIT
        );
    }
}

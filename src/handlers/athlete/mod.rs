mod address;
mod create;
mod get;
mod transfers;
mod update;

use crate::{handlers::STAFF, middlewares::PermissionsLayer, state::StateTrait};
use axum::{
    routing::{get, post},
    Router,
};

/// Routes for athletes, every route requires a role
///
/// POST  /athlete
/// GET   /athlete/:id
/// PATCH /athlete/:id
/// GET   /athlete/:id/transfers
/// POST  /athlete/:id/address
/// PATCH /athlete/:id/address
pub fn routes<S: StateTrait>(state: S) -> Router<S> {
    Router::new()
        .route("/", post(create::create_athlete::<S>))
        .route(
            "/:id",
            get(get::get_athlete::<S>).patch(update::update_athlete::<S>),
        )
        .route("/:id/transfers", get(transfers::list_transfers::<S>))
        .route(
            "/:id/address",
            post(address::create_address::<S>).patch(address::update_address::<S>),
        )
        .route_layer(PermissionsLayer::new(state, STAFF))
}

/// CPF and CEP are fixed length once the punctuation is stripped.
fn has_digits(value: &str, len: usize) -> bool {
    crate::utils::format::digits(value).len() == len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_is_ignored_when_counting_digits() {
        assert!(has_digits("123.456.789-01", 11));
        assert!(has_digits("01310-100", 8));
        assert!(!has_digits("123.456.789", 11));
    }
}

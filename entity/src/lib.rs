pub mod addresses;
pub mod athlete_history;
pub mod athletes;
pub mod categories;
pub mod cities;
pub mod levels;
pub mod modalities;
pub mod positions;
pub mod projects;
pub mod sexes;
pub mod states;
pub mod statuses;
pub mod teams;
pub mod transfers;
pub mod users;

use sea_orm::{DbErr, RuntimeErr};
use sqlx::{error::ErrorKind, Error as SqlxError};

/// SQLite reports `RESTRICT` foreign keys under this extended code, which sqlx
/// does not classify as a foreign key violation.
const SQLITE_CONSTRAINT_TRIGGER: &str = "1811";

pub trait DatabaseError {
    fn unique_violation(&self, constraint: &str) -> bool;
    fn foreign_key_violation(&self) -> bool;
}

impl DatabaseError for DbErr {
    /// SQLite does not report constraint names, so there any unique violation
    /// matches.
    fn unique_violation(&self, constraint: &str) -> bool {
        let Some(db_err) = get_database_error(self) else {
            return false;
        };

        matches!(db_err.kind(), ErrorKind::UniqueViolation)
            && db_err.constraint().map_or(true, |name| name == constraint)
    }

    fn foreign_key_violation(&self) -> bool {
        get_database_error(self).is_some_and(|db_err| {
            matches!(db_err.kind(), ErrorKind::ForeignKeyViolation)
                || db_err.code().as_deref() == Some(SQLITE_CONSTRAINT_TRIGGER)
        })
    }
}

#[allow(clippy::borrowed_box)]
fn get_database_error(err: &DbErr) -> Option<&Box<dyn sqlx::error::DatabaseError + 'static>> {
    match err {
        DbErr::Query(RuntimeErr::SqlxError(SqlxError::Database(db_err))) => Some(db_err),
        DbErr::Exec(RuntimeErr::SqlxError(SqlxError::Database(db_err))) => Some(db_err),
        DbErr::Conn(RuntimeErr::SqlxError(SqlxError::Database(db_err))) => Some(db_err),
        _ => None,
    }
}

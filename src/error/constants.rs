use super::const_error;

const_error! {
    #[error("R000", "internal server error")]
    #[status(INTERNAL_SERVER_ERROR)]
    const INTERNAL;
}
const_error! {
    #[error("R001", "database error")]
    #[status(INTERNAL_SERVER_ERROR)]
    const DATABASE_ERROR;
}
const_error! {
    #[error("R002", "failed to deserialize json")]
    #[status(BAD_REQUEST)]
    const JSON_DESERIALIZE;
}
const_error! {
    #[error("R003", "missing fields")]
    #[status(UNPROCESSABLE_ENTITY)]
    const JSON_MISSING_FIELDS;
}
const_error! {
    #[error("R004", "syntax error")]
    #[status(BAD_REQUEST)]
    const JSON_SYNTAX_ERROR;
}
const_error! {
    #[error("R005", "missing or wrong content-type")]
    #[status(BAD_REQUEST)]
    const JSON_CONTENT_TYPE;
}
const_error! {
    #[error("R006", "invalid data")]
    #[status(BAD_REQUEST)]
    const JSON_VALIDATE_INVALID;
}
const_error! {
    #[error("R007", "could not get claims")]
    #[status(UNAUTHORIZED)]
    const COULD_NOT_GET_CLAIMS;
}
const_error! {
    #[error("R008", "invalid token")]
    #[status(UNAUTHORIZED)]
    const JWT_INVALID_TOKEN;
}
const_error! {
    #[error("R009", "not enough permissions")]
    #[status(FORBIDDEN)]
    const NOT_ENOUGH_PERMISSIONS;
}
const_error! {
    #[error("R010", "user already exists")]
    #[status(CONFLICT)]
    const USER_ALREADY_EXISTS;
}
const_error! {
    #[error("R011", "invalid email or password")]
    #[status(UNAUTHORIZED)]
    const INVALID_CREDENTIALS;
}
const_error! {
    #[error("R012", "user not found")]
    #[status(NOT_FOUND)]
    const USER_NOT_FOUND;
}
const_error! {
    #[error("R013", "lookup entry not found")]
    #[status(NOT_FOUND)]
    const LOOKUP_NOT_FOUND;
}
const_error! {
    #[error("R014", "lookup entry already exists")]
    #[status(CONFLICT)]
    const DUPLICATE_LOOKUP;
}
const_error! {
    #[error("R015", "lookup entry is still in use")]
    #[status(CONFLICT)]
    const LOOKUP_IN_USE;
}
const_error! {
    #[error("R016", "project not found")]
    #[status(NOT_FOUND)]
    const PROJECT_NOT_FOUND;
}
const_error! {
    #[error("R017", "project name exists")]
    #[status(CONFLICT)]
    const DUPLICATE_PROJECT_NAME;
}
const_error! {
    #[error("R018", "project is inactive")]
    #[status(BAD_REQUEST)]
    const PROJECT_INACTIVE;
}
const_error! {
    #[error("R019", "team not found")]
    #[status(NOT_FOUND)]
    const TEAM_NOT_FOUND;
}
const_error! {
    #[error("R020", "team name exists")]
    #[status(CONFLICT)]
    const DUPLICATE_TEAM_NAME;
}
const_error! {
    #[error("R021", "team lead must hold a role")]
    #[status(BAD_REQUEST)]
    const INVALID_TEAM_LEAD;
}
const_error! {
    #[error("R022", "athlete not found")]
    #[status(NOT_FOUND)]
    const ATHLETE_NOT_FOUND;
}
const_error! {
    #[error("R023", "an athlete with this email, rg or cpf exists")]
    #[status(CONFLICT)]
    const DUPLICATE_ATHLETE;
}
const_error! {
    #[error("R024", "failed to update athlete")]
    #[status(INTERNAL_SERVER_ERROR)]
    const ATHLETE_UPDATE_FAILED;
}
const_error! {
    #[error("R025", "address already exists")]
    #[status(CONFLICT)]
    const ADDRESS_ALREADY_EXISTS;
}
const_error! {
    #[error("R026", "address not found")]
    #[status(NOT_FOUND)]
    const ADDRESS_NOT_FOUND;
}
const_error! {
    #[error("R027", "referenced entry does not exist")]
    #[status(BAD_REQUEST)]
    const INVALID_REFERENCE;
}

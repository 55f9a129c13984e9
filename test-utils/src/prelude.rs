pub use crate::{
    assert_error, assert_status, created_id, enable_logging, App, RequestBuilder, Seed,
    TestResponse, Token, User, UserLike,
};
pub use assert_json_diff::{assert_json_eq, assert_json_include};
pub use http::{header, StatusCode};
pub use roster_backend::error;
pub use serde_json::{json, Value};
pub use uuid::Uuid;

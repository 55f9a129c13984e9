mod constants;
mod db;

pub use constants::*;
pub use db::*;

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::{BufMut, Bytes, BytesMut};
use sea_orm::DbErr;
use serde_json::json;

#[derive(Debug)]
pub struct Error<'a> {
    status: Option<StatusCode>,
    code: &'static str,
    message: &'a str,
}

pub type Result<T = ()> = std::result::Result<T, Error<'static>>;

impl<'a> Error<'a> {
    #[inline]
    const fn new(status: Option<StatusCode>, code: &'static str, message: &'a str) -> Error<'a> {
        Self {
            status,
            code,
            message,
        }
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    #[inline]
    pub const fn status(&self) -> Option<StatusCode> {
        self.status
    }

    #[inline]
    pub const fn message(&self) -> &str {
        self.message
    }

    /// `{"code": ..., "error": ...}`
    pub fn to_bytes(&self) -> Bytes {
        let body = json!({
            "code": self.code,
            "error": self.message,
        });

        let mut buf = BytesMut::with_capacity(64 + self.message.len()).writer();

        if let Err(err) = serde_json::to_writer(&mut buf, &body) {
            error!("failed to serialize error {}: {err}", self.code);
        }

        buf.into_inner().freeze()
    }
}

impl IntoResponse for Error<'_> {
    fn into_response(self) -> Response {
        let status = self.status.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let content_type = HeaderValue::from_static(mime::APPLICATION_JSON.as_ref());

        (status, [(header::CONTENT_TYPE, content_type)], self.to_bytes()).into_response()
    }
}

impl From<DbErr> for Error<'_> {
    #[inline]
    fn from(error: DbErr) -> Self {
        error!("database error: {error:?}");
        constants::DATABASE_ERROR
    }
}

impl From<serde_json::Error> for Error<'_> {
    #[inline]
    fn from(error: serde_json::Error) -> Self {
        warn!("failed to deserialize json: {error}");
        constants::JSON_DESERIALIZE
    }
}

macro_rules! const_error {
    (
        #[error($code:literal, $msg:literal)]
        $(#[status($status:ident)])?
        const $name:ident;
    ) => {
        macros::error_code_to_ident!($code);
        pub const $name: $crate::error::Error =
            $crate::error::Error::new($crate::error::const_error!(@status $($status)?), $code, $msg);
    };
    (@status $status:ident) => {
        Some(::axum::http::StatusCode::$status)
    };
    (@status) => {
        None
    };
}

#[allow(clippy::useless_attribute)]
#[allow(clippy::needless_pub_self)]
pub(self) use const_error;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_has_json_content_type() {
        let error = Error::new(Some(StatusCode::OK), "", "");
        let response = error.into_response();
        let content_type = response.headers().get(header::CONTENT_TYPE);

        assert_eq!(content_type.unwrap(), "application/json");
    }

    #[test]
    fn error_body_has_code_and_message() {
        let body: serde_json::Value =
            serde_json::from_slice(&ATHLETE_NOT_FOUND.to_bytes()).unwrap();

        assert_eq!(body["code"], ATHLETE_NOT_FOUND.code());
        assert_eq!(body["error"], ATHLETE_NOT_FOUND.message());
    }

    #[test]
    fn error_without_status_is_internal() {
        let response = Error::new(None, "", "").into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

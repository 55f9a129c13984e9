pub mod macro_support {
    pub use http::StatusCode;
    pub use tracing::level_filters::LevelFilter;
    pub use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};
}

#[macro_export]
macro_rules! assert_error {
    ($res:expr, $error:expr) => {{
        let status = $res.status();
        let body: ::serde_json::Value = $res.json().await;

        assert_eq!(Some(status), $error.status(), "unexpected response: {body}");
        assert_eq!(body["code"], $error.code(), "unexpected error: {body}");
    }};
}

#[macro_export]
macro_rules! assert_status {
    ($res:expr, $status:ident) => {{
        assert_eq!($res.status(), $crate::macro_support::StatusCode::$status);
    }};
}

#[macro_export]
macro_rules! enable_logging {
    ($level:ident) => {{
        use $crate::macro_support::{
            EnvFilter, Layer, LevelFilter, SubscriberExt, SubscriberInitExt,
        };

        let env_filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::$level.into())
            .from_env_lossy();

        ::tracing_subscriber::registry()
            .with(
                ::tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_line_number(true)
                    .with_filter(env_filter),
            )
            .init();
    }};
}

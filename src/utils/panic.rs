use std::{backtrace::Backtrace, panic};

/// Routes panic messages through tracing so they end up next to the request
/// span that caused them.
pub fn set_hook() {
    panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|location| format!("{}:{}", location.file(), location.line()))
            .unwrap_or_default();

        let payload = if let Some(message) = info.payload().downcast_ref::<&str>() {
            message
        } else if let Some(message) = info.payload().downcast_ref::<String>() {
            message.as_str()
        } else {
            "<unknown>"
        };

        error!(
            location = %location,
            backtrace = %Backtrace::capture(),
            "panicked: {payload}"
        );
    }));
}

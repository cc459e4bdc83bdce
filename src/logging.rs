use std::{any::Any, backtrace::Backtrace};

use tracing_subscriber::{EnvFilter, fmt};

use crate::config::defaults::DEFAULT_RUST_LOG;

/// `RUST_LOG` overrides the configured directives.
pub fn init_tracing(directives: &str) {
    let (filter, rejected) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, None),
        Err(_) => configured_filter(directives),
    };
    fmt().with_env_filter(filter).with_target(true).init();

    if let Some(err) = rejected {
        tracing::warn!(directives, error = %err, "bad log directives, using {DEFAULT_RUST_LOG}");
    }
    set_panic_hook();
}

fn configured_filter(directives: &str) -> (EnvFilter, Option<String>) {
    match EnvFilter::try_new(directives) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(DEFAULT_RUST_LOG), Some(err.to_string())),
    }
}

pub fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}

fn set_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let message = panic_message(info.payload());
        let location = info
            .location()
            .map(|location| location.to_string())
            .unwrap_or_else(|| "unknown".to_string());

        tracing::error!(
            panic = %message,
            location = %location,
            backtrace = %Backtrace::capture(),
            "panic"
        );
    }));
}

#[cfg(test)]
mod tests {
    use std::any::Any;

    use super::{configured_filter, panic_message};
    use crate::config::defaults::DEFAULT_RUST_LOG;

    #[test]
    fn default_directives_parse() {
        let (_, rejected) = configured_filter(DEFAULT_RUST_LOG);
        assert_eq!(rejected, None);
    }

    #[test]
    fn bad_directives_fall_back_to_default() {
        let (_, rejected) = configured_filter("restaurant_server=loud");
        assert!(rejected.is_some());
    }

    #[test]
    fn panic_payloads_are_read_as_text() {
        let borrowed: Box<dyn Any + Send> = Box::new("oven on fire");
        let owned: Box<dyn Any + Send> = Box::new(String::from("out of stock"));
        let other: Box<dyn Any + Send> = Box::new(7_u8);

        assert_eq!(panic_message(&*borrowed), "oven on fire");
        assert_eq!(panic_message(&*owned), "out of stock");
        assert_eq!(panic_message(&*other), "unknown panic");
    }
}

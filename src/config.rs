/// Application-level constants
pub const APP_NAME: &str = "ReceiptOS";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding a `tracing` filter directive.
pub const LOG_FILTER_ENV: &str = "RECEIPTOS_LOG";

/// Filter used when `RECEIPTOS_LOG` is unset or unparsable.
pub fn default_log_filter() -> &'static str {
    "receiptos=info"
}

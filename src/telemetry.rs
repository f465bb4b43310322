use std::env;

use tracing_subscriber::EnvFilter;

pub const ENV_LOG_JSON: &str = "PAGETRAIL_LOG_JSON";

/// Install the global subscriber. Filtering comes from `RUST_LOG`; output
/// goes to stderr so stdout stays free for command results.
pub fn init() {
    let json = env::var(ENV_LOG_JSON).is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

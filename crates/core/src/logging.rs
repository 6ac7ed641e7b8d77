// Logging setup for hosts embedding the library (servers, tools, tests)
use std::env;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub const ENV_LOG: &str = "PROOFOLIO_LOG";
const DEFAULT_FILTER: &str = "warn,proofolio_core=info";

/// Install a console subscriber filtered by `PROOFOLIO_LOG`.
///
/// Returns `false` if a global subscriber was already set, so it is safe to
/// call more than once.
pub fn init_logging() -> bool {
    let directives = env::var(ENV_LOG).unwrap_or_else(|_| DEFAULT_FILTER.to_string());
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let console_layer = fmt::Layer::new().with_target(true).with_filter(filter);

    tracing_subscriber::registry()
        .with(console_layer)
        .try_init()
        .is_ok()
}

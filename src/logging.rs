use std::env;
use std::sync::Once;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_DIRECTIVE: &str = "line_filter_bench=info";

/// Install the console subscriber. Safe to call more than once.
///
/// Events go to stdout without timestamps or targets so timing records sit
/// alongside the printed reports.
pub fn init() {
    INIT.call_once(|| {
        let filter = match env::var("RUST_LOG") {
            Ok(directives) => EnvFilter::new(directives),
            Err(_) => EnvFilter::new(DEFAULT_DIRECTIVE),
        };

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .without_time()
                    .with_target(false)
                    .with_writer(std::io::stdout),
            )
            .try_init();
    });
}

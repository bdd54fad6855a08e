use std::sync::Once;

use anyhow::Context;
use classbench_core::{build_suite_collection, builtin_registry, launch};
use tracing::info;

static TRACE_INIT: Once = Once::new();
const DEFAULT_TRACE_FILTER: &str = "classbench_core=info,classbench=info";

fn init_tracing() {
    TRACE_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        use tracing_subscriber::fmt;

        let builder = fmt().with_writer(std::io::stderr);

        let builder = match std::env::var("RUST_LOG").ok().and_then(|expr| EnvFilter::try_new(expr).ok()) {
            Some(filter) => builder.with_env_filter(filter),
            None => builder.with_env_filter(DEFAULT_TRACE_FILTER),
        };

        let _ = builder.try_init();
    });
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let registry = builtin_registry().context("load built-in scenarios")?;
    let suites = build_suite_collection(registry).context("set up benchmark suites")?;
    info!(suites = suites.len(), "benchmark suites ready");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to create tokio runtime")?;

    runtime.block_on(launch(&suites))
}

#[cfg(test)]
mod tests {
    use tracing::Level;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::{EnvFilter, Registry};

    use super::DEFAULT_TRACE_FILTER;

    #[test]
    fn test_default_filter_enables_binary_and_core_info() {
        let subscriber = Registry::default().with(EnvFilter::new(DEFAULT_TRACE_FILTER));
        tracing::subscriber::with_default(subscriber, || {
            assert!(tracing::enabled!(Level::INFO));
            assert!(tracing::enabled!(target: "classbench", Level::INFO));
            assert!(tracing::enabled!(target: "classbench_core::runner", Level::INFO));
            assert!(!tracing::enabled!(target: "classbench_core::engine::sampler", Level::DEBUG));
            assert!(!tracing::enabled!(target: "tokio", Level::INFO));
        });
    }
}

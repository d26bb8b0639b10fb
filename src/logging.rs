use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber. Logs go to stderr so stdout only carries
/// the countdown display. The interactive UI owns the whole terminal, so
/// nothing is logged while it runs.
pub fn init_logger(verbose: bool, interactive: bool) {
    let filter = if interactive {
        EnvFilter::new(default_directive(verbose, interactive))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, interactive)))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

fn default_directive(verbose: bool, interactive: bool) -> &'static str {
    match (interactive, verbose) {
        (true, _) => "off",
        (false, true) => "space_timer=debug",
        (false, false) => "space_timer=warn",
    }
}

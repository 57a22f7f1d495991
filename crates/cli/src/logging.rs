use tracing_subscriber::EnvFilter;

const VERBOSE_FILTER: &str =
    "buildstamp=debug,buildstamp_cli=debug,buildstamp_core=debug,buildstamp_utils=debug,buildstamp_gradle=debug";

/// Install the diagnostics subscriber on stderr.
///
/// Nothing is installed unless `verbose` is set or `RUST_LOG` is present, so regular output
/// stays limited to the `>>>` progress lines. Repeated calls are no-ops.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => return,
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

use tracing_subscriber::{fmt, EnvFilter};

/// Crates whose events follow the configured level; everything else is
/// held at `warn`.
const IMPORT_TARGETS: [&str; 3] = ["common", "normalizer", "importer"];

pub fn default_directives(level: &str) -> String {
    let mut directives = String::from("warn");
    for target in IMPORT_TARGETS {
        directives.push_str(&format!(",{}={}", target, level));
    }
    directives
}

/// Installs the stderr subscriber. `RUST_LOG` replaces the default
/// directives entirely; repeated calls are no-ops.
pub fn init_logging(level: &str) {
    if tracing::dispatcher::has_been_set() {
        return;
    }

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level)));

    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

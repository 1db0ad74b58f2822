use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::ChronoLocal;

use crate::config::LogConfig;
use crate::error::FetchError;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const NOISY_TARGETS: [&str; 4] = ["reqwest", "hyper", "hyper_util", "rustls"];

/// Installs the global stderr subscriber. `RUST_LOG` takes precedence over
/// the configured filter.
pub fn init(config: &LogConfig) -> Result<(), FetchError> {
    let env_filter = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = select_filter(env_filter.as_deref(), &config.filter);
    let filter = EnvFilter::try_new(&filter)
        .map_err(|err| FetchError::ConfigParse(format!("log filter {filter:?}: {err}")))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

/// Picks a non-blank `RUST_LOG` value over the configured filter, then caps
/// the HTTP stack either way.
pub fn select_filter(env_filter: Option<&str>, configured: &str) -> String {
    match env_filter {
        Some(value) if !value.trim().is_empty() => build_filter(value),
        _ => build_filter(configured),
    }
}

/// Caps HTTP stack targets at `warn` unless the filter already mentions them.
pub fn build_filter(filter: &str) -> String {
    let mut directives = filter.trim().to_string();
    for target in NOISY_TARGETS {
        let mentioned = directives
            .split(',')
            .any(|directive| directive.trim().split('=').next() == Some(target));
        if mentioned {
            continue;
        }
        if !directives.is_empty() {
            directives.push(',');
        }
        directives.push_str(target);
        directives.push_str("=warn");
    }
    directives
}

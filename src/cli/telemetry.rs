use anyhow::Result;
use std::env::var;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

/// Set to `json` for one JSON object per log line.
pub const LOG_FORMAT_ENV: &str = "EXPENSE_TRACKER_LOG_FORMAT";

/// Initialize logging. Logs go to stderr so command output on stdout stays clean.
///
/// # Errors
///
/// Returns an error if the subscriber cannot be installed.
pub fn init(verbosity_level: Option<Level>) -> Result<()> {
    let verbosity_level = verbosity_level.unwrap_or(Level::ERROR);

    let filter = EnvFilter::builder()
        .with_default_directive(verbosity_level.into())
        .from_env_lossy()
        .add_directive("hyper=error".parse()?)
        .add_directive("hyper_util=error".parse()?)
        .add_directive("reqwest=warn".parse()?);

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_target(false);

    if json_requested(var(LOG_FORMAT_ENV).ok().as_deref()) {
        let subscriber = Registry::default().with(fmt_layer.json()).with(filter);
        tracing::subscriber::set_global_default(subscriber)?;
    } else {
        let subscriber = Registry::default().with(fmt_layer.compact()).with(filter);
        tracing::subscriber::set_global_default(subscriber)?;
    }

    Ok(())
}

fn json_requested(format: Option<&str>) -> bool {
    format.is_some_and(|format| format.trim().eq_ignore_ascii_case("json"))
}

#[must_use]
pub fn level_from_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_verbosity() {
        assert_eq!(level_from_verbosity(0), Level::ERROR);
        assert_eq!(level_from_verbosity(1), Level::WARN);
        assert_eq!(level_from_verbosity(2), Level::INFO);
        assert_eq!(level_from_verbosity(3), Level::DEBUG);
        assert_eq!(level_from_verbosity(4), Level::TRACE);
        assert_eq!(level_from_verbosity(9), Level::TRACE);
    }

    #[test]
    fn test_json_requested() {
        assert!(json_requested(Some("json")));
        assert!(json_requested(Some(" JSON ")));
        assert!(!json_requested(Some("pretty")));
        assert!(!json_requested(None));
    }
}

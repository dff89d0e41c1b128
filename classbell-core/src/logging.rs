use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::SubscriberBuilder;

use crate::config::ClassbellConfig;
use crate::errors::{ClassbellError, Result};

/// Filter directive taken from the configuration. A blank `log_level`
/// means `info`.
pub fn filter_directive(config: &ClassbellConfig) -> &str {
    let level = config.log_level.trim();
    if level.is_empty() {
        "info"
    } else {
        level
    }
}

/// Installs the global tracing subscriber for `config`. `RUST_LOG` takes
/// precedence over the configured level. Output goes to stderr so stdout
/// stays clean for greetings and JSON; production disables ANSI colours.
pub fn init_tracing(config: &ClassbellConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(config)));
    let ansi = !config.is_production() && atty::is(atty::Stream::Stderr);

    SubscriberBuilder::default()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .try_init()
        .map_err(|err| ClassbellError::Logging(err.to_string()))?;

    tracing::debug!(
        level = filter_directive(config),
        environment = ?config.environment,
        "tracing initialised"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_follows_configured_level() {
        let mut config = ClassbellConfig::default();
        assert_eq!(filter_directive(&config), "info");

        config.log_level = "classbell_refresh=debug".to_string();
        assert_eq!(filter_directive(&config), "classbell_refresh=debug");

        config.log_level = "  ".to_string();
        assert_eq!(filter_directive(&config), "info");
    }

    #[test]
    fn second_initialisation_reports_an_error() {
        let config = ClassbellConfig {
            log_level: "debug".to_string(),
            ..ClassbellConfig::default()
        };
        // Only one global subscriber may be installed per process.
        let _ = init_tracing(&config);
        let second = init_tracing(&config);
        assert!(matches!(second, Err(ClassbellError::Logging(_))));
    }
}

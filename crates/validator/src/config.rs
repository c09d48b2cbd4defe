//! Driver configuration

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::warning::{
    LEGACY_COMPOSITE_PREFIX, StderrSink, TracingSink, WarningChannel, WarningSink,
};

const SINK_VAR: &str = "PROP_TYPES_SINK";
const IGNORE_LEGACY_VAR: &str = "PROP_TYPES_IGNORE_LEGACY";

/// Where warnings go
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// `tracing` events at WARN, target `prop_types`
    #[default]
    Tracing,
    /// Standard error
    Stderr,
}

/// Validator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Warning destination
    pub sink: SinkKind,

    /// Drop warnings whose format starts with the legacy composite prefix
    pub ignore_legacy_composite: bool,

    /// Share the process-wide failure cache instead of a private one
    pub shared_cache: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            sink: SinkKind::Tracing,
            ignore_legacy_composite: true,
            shared_cache: true,
        }
    }
}

/// Configuration could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid validator configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl ValidatorConfig {
    /// Parses a JSON document; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Json`] for malformed JSON or mistyped fields.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads `PROP_TYPES_SINK` (`tracing` or `stderr`) and
    /// `PROP_TYPES_IGNORE_LEGACY` (`true`/`false`, `1`/`0`) over the
    /// defaults. Unrecognized values are ignored.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(sink) = lookup(SINK_VAR) {
            match sink.to_lowercase().as_str() {
                "tracing" => config.sink = SinkKind::Tracing,
                "stderr" => config.sink = SinkKind::Stderr,
                _ => {}
            }
        }

        if let Some(flag) = lookup(IGNORE_LEGACY_VAR) {
            match flag.to_lowercase().as_str() {
                "true" | "1" => config.ignore_legacy_composite = true,
                "false" | "0" => config.ignore_legacy_composite = false,
                _ => {}
            }
        }

        config
    }

    /// The warning channel this configuration describes.
    pub fn channel(&self) -> WarningChannel {
        let sink: Arc<dyn WarningSink> = match self.sink {
            SinkKind::Tracing => Arc::new(TracingSink),
            SinkKind::Stderr => Arc::new(StderrSink),
        };
        let channel = WarningChannel::strict().with_sink(sink);
        if self.ignore_legacy_composite {
            channel.ignoring_prefix(LEGACY_COMPOSITE_PREFIX)
        } else {
            channel
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(ValidatorConfig::from_json_str("{}").unwrap(), ValidatorConfig::default());
    }

    #[test]
    fn parses_all_fields() {
        let config = ValidatorConfig::from_json_str(
            r#"{"sink": "stderr", "ignore_legacy_composite": false, "shared_cache": false}"#,
        )
        .unwrap();
        assert_eq!(
            config,
            ValidatorConfig {
                sink: SinkKind::Stderr,
                ignore_legacy_composite: false,
                shared_cache: false,
            }
        );
        assert_eq!(config.channel().ignored_prefix(), None);
    }

    #[test]
    fn default_channel_ignores_legacy_prefix() {
        let channel = ValidatorConfig::default().channel();
        assert_eq!(channel.ignored_prefix(), Some(LEGACY_COMPOSITE_PREFIX));
    }

    fn vars<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key: &str| {
            pairs
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value).to_owned())
        }
    }

    #[rstest]
    #[case::stderr("stderr", SinkKind::Stderr)]
    #[case::stderr_uppercase("STDERR", SinkKind::Stderr)]
    #[case::tracing("tracing", SinkKind::Tracing)]
    #[case::unrecognized("syslog", SinkKind::Tracing)]
    fn sink_from_env(#[case] value: &str, #[case] expected: SinkKind) {
        let config = ValidatorConfig::from_vars(vars(&[(SINK_VAR, value)]));
        assert_eq!(config.sink, expected);
        assert!(config.ignore_legacy_composite);
    }

    #[rstest]
    #[case::one("1", true)]
    #[case::true_word("true", true)]
    #[case::zero("0", false)]
    #[case::false_word("FALSE", false)]
    #[case::unrecognized("maybe", true)]
    fn ignore_legacy_from_env(#[case] value: &str, #[case] expected: bool) {
        let config = ValidatorConfig::from_vars(vars(&[(IGNORE_LEGACY_VAR, value)]));
        assert_eq!(config.ignore_legacy_composite, expected);
        assert_eq!(config.sink, SinkKind::Tracing);
    }

    #[test]
    fn env_overlays_both_variables() {
        let config = ValidatorConfig::from_vars(vars(&[
            (SINK_VAR, "stderr"),
            (IGNORE_LEGACY_VAR, "0"),
        ]));
        assert_eq!(
            config,
            ValidatorConfig {
                sink: SinkKind::Stderr,
                ignore_legacy_composite: false,
                shared_cache: true,
            }
        );
        assert_eq!(config.channel().ignored_prefix(), None);
    }

    #[test]
    fn unset_variables_keep_defaults() {
        assert_eq!(ValidatorConfig::from_vars(|_| None), ValidatorConfig::default());
    }

    #[test]
    fn from_env_reads_the_process_environment() {
        let expected = ValidatorConfig::from_vars(|key| std::env::var(key).ok());
        assert_eq!(ValidatorConfig::from_env(), expected);
    }

    #[test]
    fn rejects_unknown_sink() {
        let err = ValidatorConfig::from_json_str(r#"{"sink": "syslog"}"#).unwrap_err();
        assert!(err.to_string().starts_with("invalid validator configuration"));
    }
}

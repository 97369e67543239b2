//! Property tests for configuration resolution.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use ngtw::config::{resolve, ConfigOverrides, DefaultConfig, PersistedConfig};
use ngtw::error::ConfigError;

const ROOT: &str = "/proj";

/// Relative stylesheet path under `prefix`; prefixes keep fields from colliding
fn css_path(prefix: &'static str) -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z]{1,8}(/[a-z]{1,8}){0,2}")
        .unwrap()
        .prop_map(move |p| format!("{prefix}/{p}.css"))
}

fn maybe(prefix: &'static str) -> impl Strategy<Value = Option<String>> {
    proptest::option::of(css_path(prefix))
}

fn persisted(source: Option<String>, output: Option<String>, script: Option<String>, purge: Option<bool>, sass: Option<bool>) -> PersistedConfig {
    let abs = |p: String| Path::new(ROOT).join(p);
    PersistedConfig {
        config_js: script.map(abs),
        source_css: source.map(abs),
        output_css: output.map(abs),
        purge,
        sass,
    }
}

fn expected(over: &Option<String>, stored: &Option<String>, default: &str) -> PathBuf {
    Path::new(ROOT).join(over.as_deref().or(stored.as_deref()).unwrap_or(default))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every field is override > persisted > default, independently.
    #[test]
    fn property_field_level_precedence(
        over_source in maybe("os"),
        over_output in maybe("oo"),
        over_script in maybe("oc"),
        stored_source in maybe("ps"),
        stored_output in maybe("po"),
        stored_script in maybe("pc"),
        over_purge in any::<bool>(),
        over_unset in any::<bool>(),
        over_sass in any::<bool>(),
        stored_purge in proptest::option::of(any::<bool>()),
        stored_sass in proptest::option::of(any::<bool>()),
    ) {
        prop_assume!(!(over_purge && over_unset));

        let mut overrides = ConfigOverrides::new()
            .with_purge(over_purge)
            .with_unset_purge(over_unset)
            .with_preprocessor(over_sass);
        if let Some(p) = &over_source {
            overrides = overrides.with_source(p);
        }
        if let Some(p) = &over_output {
            overrides = overrides.with_output(p);
        }
        if let Some(p) = &over_script {
            overrides = overrides.with_config_script(p);
        }
        let stored = persisted(
            stored_source.clone(),
            stored_output.clone(),
            stored_script.clone(),
            stored_purge,
            stored_sass,
        );

        let resolved = resolve(&overrides, &stored, &DefaultConfig::for_project(Path::new(ROOT)))
            .expect("distinct prefixes never collide");

        prop_assert_eq!(resolved.source_path, expected(&over_source, &stored_source, "src/tailwind.css"));
        prop_assert_eq!(resolved.output_path, expected(&over_output, &stored_output, "src/styles.css"));
        prop_assert_eq!(resolved.config_script_path, expected(&over_script, &stored_script, "tailwind.config.js"));

        let purge = if over_purge {
            true
        } else if over_unset {
            false
        } else {
            stored_purge.unwrap_or(false)
        };
        prop_assert_eq!(resolved.purge_enabled, purge);
        prop_assert_eq!(resolved.preprocessor_enabled, over_sass || stored_sass.unwrap_or(false));
    }

    /// PROPERTY: `--purge` with `--unset-purge` is rejected whatever else is set.
    #[test]
    fn property_conflicting_purge_always_rejected(
        over_source in maybe("os"),
        stored_purge in proptest::option::of(any::<bool>()),
        reset in any::<bool>(),
    ) {
        let mut overrides = ConfigOverrides::new()
            .with_purge(true)
            .with_unset_purge(true)
            .with_reset_to_defaults(reset);
        if let Some(p) = over_source {
            overrides = overrides.with_source(p);
        }
        let stored = persisted(None, None, None, stored_purge, None);

        let err = resolve(&overrides, &stored, &DefaultConfig::for_project(Path::new(ROOT)))
            .unwrap_err();
        prop_assert!(matches!(err, ConfigError::ConflictingPurgeIntent));
    }

    /// PROPERTY: with reset, persisted values never leak into the result.
    #[test]
    fn property_reset_ignores_persisted(
        over_output in maybe("oo"),
        stored_source in maybe("ps"),
        stored_output in maybe("po"),
        stored_purge in proptest::option::of(any::<bool>()),
        stored_sass in proptest::option::of(any::<bool>()),
    ) {
        let mut overrides = ConfigOverrides::new().with_reset_to_defaults(true);
        if let Some(p) = &over_output {
            overrides = overrides.with_output(p);
        }
        let stored = persisted(stored_source, stored_output, None, stored_purge, stored_sass);

        let resolved = resolve(&overrides, &stored, &DefaultConfig::for_project(Path::new(ROOT)))
            .unwrap();

        prop_assert_eq!(resolved.source_path, PathBuf::from("/proj/src/tailwind.css"));
        prop_assert_eq!(resolved.output_path, expected(&over_output, &None, "src/styles.css"));
        prop_assert!(!resolved.purge_enabled);
        prop_assert!(!resolved.preprocessor_enabled);
    }
}

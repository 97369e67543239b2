//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Well-known name of the persisted configuration file
pub const CONFIG_FILE_NAME: &str = "ng-tailwind.toml";

/// Default framework configuration script (relative to project root)
pub const DEFAULT_CONFIG_SCRIPT: &str = "tailwind.config.js";

/// Default source stylesheet (relative to project root)
pub const DEFAULT_SOURCE: &str = "src/tailwind.css";

/// Default output stylesheet (relative to project root)
pub const DEFAULT_OUTPUT: &str = "src/styles.css";

/// On-disk configuration (`ng-tailwind.toml`)
///
/// Every key is optional; missing keys fall back to defaults at resolution
/// time. Key names follow the `ng-tailwind.js` convention so existing
/// projects read naturally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedConfig {
    #[serde(rename = "configJS", default, skip_serializing_if = "Option::is_none")]
    pub config_js: Option<PathBuf>,

    #[serde(rename = "sourceCSS", default, skip_serializing_if = "Option::is_none")]
    pub source_css: Option<PathBuf>,

    #[serde(rename = "outputCSS", default, skip_serializing_if = "Option::is_none")]
    pub output_css: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purge: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sass: Option<bool>,
}

impl PersistedConfig {
    /// Make every relative path absolute against `base`
    pub fn anchored_at(mut self, base: &Path) -> Self {
        let anchor = |p: Option<PathBuf>| p.map(|p| super::paths::absolutize(base, &p));
        self.config_js = anchor(self.config_js);
        self.source_css = anchor(self.source_css);
        self.output_css = anchor(self.output_css);
        self
    }
}

impl From<&ResolvedConfig> for PersistedConfig {
    fn from(config: &ResolvedConfig) -> Self {
        Self {
            config_js: Some(config.config_script_path.clone()),
            source_css: Some(config.source_path.clone()),
            output_css: Some(config.output_path.clone()),
            purge: Some(config.purge_enabled),
            sass: Some(config.preprocessor_enabled),
        }
    }
}

/// Per-invocation overrides, usually straight from CLI flags
///
/// Paths may be relative; the resolver anchors them at the working
/// directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub config_script: Option<PathBuf>,
    pub source: Option<PathBuf>,
    pub output: Option<PathBuf>,
    /// `--purge`
    pub purge: bool,
    /// `--unset-purge`
    pub unset_purge: bool,
    /// `--sass` (enable-only)
    pub preprocessor: bool,
    /// `--default`: ignore persisted values entirely
    pub reset_to_defaults: bool,
}

impl ConfigOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(path.into());
        self
    }

    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    pub fn with_config_script(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_script = Some(path.into());
        self
    }

    pub fn with_purge(mut self, purge: bool) -> Self {
        self.purge = purge;
        self
    }

    pub fn with_unset_purge(mut self, unset: bool) -> Self {
        self.unset_purge = unset;
        self
    }

    pub fn with_preprocessor(mut self, enabled: bool) -> Self {
        self.preprocessor = enabled;
        self
    }

    pub fn with_reset_to_defaults(mut self, reset: bool) -> Self {
        self.reset_to_defaults = reset;
        self
    }

    /// The purge value these overrides force, if any
    pub(crate) fn purge_intent(&self) -> Option<bool> {
        match (self.purge, self.unset_purge) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        }
    }
}

/// Built-in defaults, anchored at the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultConfig {
    pub project_root: PathBuf,
    pub config_script_path: PathBuf,
    pub source_path: PathBuf,
    pub output_path: PathBuf,
    pub purge_enabled: bool,
    pub preprocessor_enabled: bool,
}

impl DefaultConfig {
    /// Conventional defaults for a project rooted at `root`
    pub fn for_project(root: &Path) -> Self {
        let root = super::paths::normalize(root);
        Self {
            config_script_path: root.join(DEFAULT_CONFIG_SCRIPT),
            source_path: root.join(DEFAULT_SOURCE),
            output_path: root.join(DEFAULT_OUTPUT),
            purge_enabled: false,
            preprocessor_enabled: false,
            project_root: root,
        }
    }
}

/// The single merged configuration for one build/watch/purge run
///
/// Constructed once by the resolver and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedConfig {
    pub project_root: PathBuf,
    pub config_script_path: PathBuf,
    pub source_path: PathBuf,
    pub output_path: PathBuf,
    pub purge_enabled: bool,
    pub preprocessor_enabled: bool,
}

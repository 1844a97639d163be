//! Configuration management utilities.

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dirs_next::config_dir;
use serde::{Deserialize, Serialize};

const DEFAULT_CONFIG: &str = include_str!("../../assets/default-config.toml");
const WORKSPACE_CONFIG_PATH: &str = ".snipref/config.toml";

/// Layered configuration loaded from defaults, user, workspace, and env.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    /// Extension-to-fence-tag overrides merged over the builtin table.
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    #[serde(default = "Defaults::default_output")]
    pub output: String,
}

impl Defaults {
    fn default_output() -> String {
        "clipboard".into()
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: Self::default_output(),
        }
    }
}

/// Environment overrides for critical settings.
#[derive(Debug, Default, Clone)]
pub struct EnvOverrides {
    output: Option<String>,
}

impl EnvOverrides {
    fn from_env() -> Self {
        Self {
            output: env::var("SNIPREF_OUTPUT").ok(),
        }
    }

    #[cfg(test)]
    fn for_tests(output: &str) -> Self {
        Self {
            output: Some(output.to_owned()),
        }
    }
}

impl Config {
    /// Load configuration layered from bundled defaults, the user config
    /// directory, the workspace config under `root`, and the environment.
    pub fn load(root: &Path) -> Result<Self> {
        let env = EnvOverrides::from_env();
        let global = global_config_path();
        let workspace = Some(root.join(WORKSPACE_CONFIG_PATH));
        Self::load_with_layers(global, workspace, env)
    }

    fn load_with_layers(
        global: Option<PathBuf>,
        workspace: Option<PathBuf>,
        env_overrides: EnvOverrides,
    ) -> Result<Self> {
        let mut layers: Vec<Config> = vec![Self::from_str(DEFAULT_CONFIG)?];

        if let Some(global_path) = global.filter(|path| path.exists()) {
            layers.push(Self::from_file(&global_path)?);
        }

        if let Some(workspace_path) = workspace.filter(|path| path.exists()) {
            layers.push(Self::from_file(&workspace_path)?);
        }

        let merged = layers.into_iter().reduce(Config::merge).unwrap_or_default();
        Ok(apply_env_overrides(merged, env_overrides))
    }

    fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_str(&data)
    }

    fn from_str(contents: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(contents).context("failed to parse TOML config")?;
        Ok(config)
    }

    fn merge(self, other: Self) -> Self {
        let mut languages = self.languages;
        languages.extend(other.languages);

        Self {
            defaults: Defaults {
                output: if other.defaults.output != Defaults::default_output() {
                    other.defaults.output
                } else {
                    self.defaults.output
                },
            },
            languages,
        }
    }

    /// Whether output should default to stdout rather than the clipboard.
    pub fn stdout_by_default(&self) -> bool {
        self.defaults.output.eq_ignore_ascii_case("stdout")
    }
}

fn apply_env_overrides(mut config: Config, env: EnvOverrides) -> Config {
    if let Some(output) = env.output {
        config.defaults.output = output;
    }
    config
}

fn global_config_path() -> Option<PathBuf> {
    config_dir().map(|base| base.join("snipref/config.toml"))
}

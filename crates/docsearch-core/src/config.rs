use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub struct Config {
    figment: Figment,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::new().merge(Toml::file("config.toml"));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file("config.dev.toml")),
            "prod" | "production" => figment = figment.merge(Toml::file("config.prod.toml")),
            "test" | "testing" => figment = figment.merge(Toml::file("config.test.toml")),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("APP_").split("__"));

        let config = Self { figment };
        config.engine_settings()?;
        Ok(config)
    }

    /// Wraps an already assembled figment, e.g. one built from inline TOML.
    pub fn from_figment(figment: Figment) -> Self {
        Self { figment }
    }

    pub fn get<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| anyhow::anyhow!("Failed to get '{}': {}", key, e))
    }

    /// Like [`Config::get`], but a key that is absent yields `T::default()`.
    pub fn get_or_default<T>(&self, key: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned + Default,
    {
        match self.figment.extract_inner(key) {
            Ok(value) => Ok(value),
            Err(e) if e.missing() => Ok(T::default()),
            Err(e) => Err(Error::InvalidConfig(format!("'{}': {}", key, e))),
        }
    }

    /// Typed engine settings under the `engine` key, validated.
    pub fn engine_settings(&self) -> Result<EngineSettings> {
        let settings: EngineSettings = self.get_or_default("engine")?;
        settings.validate()?;
        Ok(settings)
    }
}

/// Tuning knobs for the search context. Every field has a default, so a
/// partial `[engine]` table is fine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub keyword_limit: usize,
    pub phrase_limit: usize,
    pub history_cap: usize,
    pub suggestion_limit: usize,
    pub highlight_limit: usize,
    pub markup: MarkupSettings,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            keyword_limit: 50,
            phrase_limit: 20,
            history_cap: 50,
            suggestion_limit: 8,
            highlight_limit: 3,
            markup: MarkupSettings::default(),
        }
    }
}

impl EngineSettings {
    pub fn validate(&self) -> Result<()> {
        let caps = [
            ("history_cap", self.history_cap),
            ("suggestion_limit", self.suggestion_limit),
            ("highlight_limit", self.highlight_limit),
        ];
        for (name, value) in caps {
            if value == 0 {
                return Err(Error::InvalidConfig(format!("engine.{} must be greater than 0", name)));
            }
        }
        Ok(())
    }
}

/// Inline delimiters wrapped around highlighted matches. Phrase, term and
/// partial matches each get their own pair so consumers can style them apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkupSettings {
    pub phrase_open: String,
    pub phrase_close: String,
    pub term_open: String,
    pub term_close: String,
    pub partial_open: String,
    pub partial_close: String,
}

impl Default for MarkupSettings {
    fn default() -> Self {
        Self {
            phrase_open: r#"<mark class="phrase">"#.to_string(),
            phrase_close: "</mark>".to_string(),
            term_open: r#"<mark class="term">"#.to_string(),
            term_close: "</mark>".to_string(),
            partial_open: r#"<mark class="partial">"#.to_string(),
            partial_close: "</mark>".to_string(),
        }
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after expansion.
/// If `p` is absolute, it's returned as-is; otherwise `base.join(p)` is returned.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() { p } else { base.join(p) }
}

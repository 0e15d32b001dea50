//! Configuration management for Folio.
//!
//! Parses `folio.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `content.backend_url` (default `${FOLIO_BACKEND_URL:-http://localhost:8000}`)
//! - `render.highlight_theme`

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override content API base URL.
    pub backend_url: Option<String>,
}

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "folio.toml";

/// Default content API base URL, before environment expansion.
const DEFAULT_BACKEND_URL: &str = "${FOLIO_BACKEND_URL:-http://localhost:8000}";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Content API configuration.
    pub content: ContentConfig,
    /// Scroll-spy configuration.
    pub scroll_spy: ScrollSpyConfig,
    /// Markdown rendering configuration.
    pub render: RenderConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Content API configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Base URL of the content backend.
    pub backend_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_owned(),
            timeout_secs: 30,
        }
    }
}

/// Scroll-spy configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ScrollSpyConfig {
    /// Distance of the activation line from the viewport top.
    pub activation_offset: f64,
    /// Slack for the bottom-of-page check.
    pub bottom_epsilon: f64,
}

impl Default for ScrollSpyConfig {
    fn default() -> Self {
        Self {
            activation_offset: 100.0,
            bottom_epsilon: 2.0,
        }
    }
}

/// Markdown rendering configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Enable GitHub Flavored Markdown extensions.
    pub gfm: bool,
    /// Pass raw HTML through (sanitized). When false, raw HTML is escaped.
    pub raw_html: bool,
    /// Syntax highlighting theme name.
    pub highlight_theme: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            gfm: true,
            raw_html: true,
            highlight_theme: "base16-ocean.dark".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`content.backend_url`").
        field: String,
        /// Error message naming the variable (e.g., "${`FOLIO_BACKEND_URL`}: ...").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

/// Require a numeric field to be finite and not negative.
fn require_non_negative(value: f64, field: &str) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::Validation(format!(
            "{field} must be a non-negative number"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `folio.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// CLI settings are applied last, so CLI arguments take precedence over
    /// config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// an environment variable is missing, or validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let discovered = match config_path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Some(path) => Some(path.to_path_buf()),
            None => std::env::current_dir()
                .ok()
                .and_then(|cwd| Self::discover_config(&cwd)),
        };

        let mut config = match discovered {
            Some(path) => Self::load_from_file(&path)?,
            None => {
                let mut config = Self::default();
                config.expand_env_vars()?;
                config
            }
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(backend_url) = &settings.backend_url {
            self.content.backend_url.clone_from(backend_url);
        }
    }

    /// Search for config file in `start` and its parents.
    #[must_use]
    pub fn discover_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically by [`load`](Self::load) after CLI overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.content.backend_url, "content.backend_url")?;
        require_http_url(&self.content.backend_url, "content.backend_url")?;
        if self.content.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "content.timeout_secs must be greater than 0".to_owned(),
            ));
        }

        require_non_negative(
            self.scroll_spy.activation_offset,
            "scroll_spy.activation_offset",
        )?;
        require_non_negative(self.scroll_spy.bottom_epsilon, "scroll_spy.bottom_epsilon")?;

        require_non_empty(&self.render.highlight_theme, "render.highlight_theme")?;
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        expand_in_place(&mut self.content.backend_url, "content.backend_url")?;
        expand_in_place(&mut self.render.highlight_theme, "render.highlight_theme")?;
        Ok(())
    }
}

/// Replace `${VAR}` and `${VAR:-default}` references in `value`.
///
/// Values without a `${` reference are left untouched, including bare `$VAR`.
fn expand_in_place(value: &mut String, field: &str) -> Result<(), ConfigError> {
    if !value.contains("${") {
        return Ok(());
    }
    let lookup = |var: &str| std::env::var(var).map(Some);
    let expanded = shellexpand::env_with_context(value.as_str(), lookup)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}}: {}", e.var_name, e.cause),
        })?
        .into_owned();
    *value = expanded;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.content.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.content.timeout_secs, 30);
        assert_eq!(config.scroll_spy.activation_offset, 100.0);
        assert_eq!(config.scroll_spy.bottom_epsilon, 2.0);
        assert!(config.render.gfm);
        assert!(config.render.raw_html);
        assert_eq!(config.render.highlight_theme, "base16-ocean.dark");
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[content]
backend_url = "https://api.example.com"
timeout_secs = 5

[scroll_spy]
activation_offset = 80.0
bottom_epsilon = 4.0

[render]
gfm = false
raw_html = false
highlight_theme = "InspiredGitHub"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.content.backend_url, "https://api.example.com");
        assert_eq!(config.content.timeout_secs, 5);
        assert_eq!(config.scroll_spy.activation_offset, 80.0);
        assert_eq!(config.scroll_spy.bottom_epsilon, 4.0);
        assert!(!config.render.gfm);
        assert!(!config.render.raw_html);
        assert_eq!(config.render.highlight_theme, "InspiredGitHub");
    }

    #[test]
    fn test_unknown_field_type_is_parse_error() {
        let result: Result<Config, _> = toml::from_str("[content]\ntimeout_secs = \"soon\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(
            &path,
            "[content]\nbackend_url = \"http://127.0.0.1:9000\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.content.backend_url, "http://127.0.0.1:9000");
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(p) if p == path));
    }

    #[test]
    fn test_discover_config_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("posts").join("drafts");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "").unwrap();

        assert_eq!(
            Config::discover_config(&nested),
            Some(dir.path().join(CONFIG_FILENAME))
        );
    }

    #[test]
    fn test_discover_config_prefers_nearest() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("site");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "").unwrap();
        fs::write(nested.join(CONFIG_FILENAME), "").unwrap();

        assert_eq!(
            Config::discover_config(&nested),
            Some(nested.join(CONFIG_FILENAME))
        );
    }

    #[test]
    fn test_cli_settings_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "[content]\nbackend_url = \"http://from-file\"\n").unwrap();

        let settings = CliSettings {
            backend_url: Some("https://from-cli.example.com".to_owned()),
        };
        let config = Config::load(Some(&path), Some(&settings)).unwrap();
        assert_eq!(config.content.backend_url, "https://from-cli.example.com");
    }

    #[test]
    fn test_cli_override_is_validated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "").unwrap();

        let settings = CliSettings {
            backend_url: Some("ftp://example.com".to_owned()),
        };
        let err = Config::load(Some(&path), Some(&settings)).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_backend_url_env_expansion_in_file() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("FOLIO_TEST_CONFIG_HOST", "content.example.com");
        }
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(
            &path,
            "[content]\nbackend_url = \"https://${FOLIO_TEST_CONFIG_HOST}\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.content.backend_url, "https://content.example.com");
        unsafe {
            std::env::remove_var("FOLIO_TEST_CONFIG_HOST");
        }
    }

    #[test]
    fn test_missing_env_var_is_error() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("FOLIO_TEST_CONFIG_MISSING");
        }
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(
            &path,
            "[content]\nbackend_url = \"${FOLIO_TEST_CONFIG_MISSING}\"\n",
        )
        .unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { ref field, .. } if field == "content.backend_url"));
    }

    #[test]
    fn test_env_default_used_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("FOLIO_TEST_CONFIG_UNSET");
        }
        let mut value = "${FOLIO_TEST_CONFIG_UNSET:-http://localhost:8000}".to_owned();
        expand_in_place(&mut value, "content.backend_url").unwrap();
        assert_eq!(value, "http://localhost:8000");
    }

    #[test]
    fn test_bare_dollar_is_literal() {
        let mut value = "$HOME/themes".to_owned();
        expand_in_place(&mut value, "render.highlight_theme").unwrap();
        assert_eq!(value, "$HOME/themes");
    }

    #[test]
    fn test_missing_env_var_names_variable() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("FOLIO_TEST_CONFIG_ABSENT");
        }
        let mut value = "https://${FOLIO_TEST_CONFIG_ABSENT}/api".to_owned();
        let err = expand_in_place(&mut value, "content.backend_url").unwrap_err();
        assert!(err.to_string().contains("FOLIO_TEST_CONFIG_ABSENT"));
        assert!(err.to_string().contains("content.backend_url"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.content.backend_url = "http://localhost:8000".to_owned();
        config.content.timeout_secs = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("timeout_secs"));
    }

    #[test]
    fn test_validate_rejects_negative_offset() {
        let mut config = Config::default();
        config.content.backend_url = "http://localhost:8000".to_owned();
        config.scroll_spy.activation_offset = -1.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("scroll_spy.activation_offset"));
    }

    #[test]
    fn test_validate_rejects_non_http_backend() {
        let mut config = Config::default();
        config.content.backend_url = "localhost:8000".to_owned();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("http:// or https://"));
    }
}

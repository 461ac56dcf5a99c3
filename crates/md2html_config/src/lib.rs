use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable overriding the location of the config file.
pub const CONFIG_FILE_ENV: &str = "MD2HTML_CONFIG";

pub struct LoadedConfig {
    pub config: Config,
    /// `None` if no config directory could be determined for the platform.
    pub file_path: Option<PathBuf>,
    pub maybe_error: Option<toml::de::Error>,
}

/// Returns the config file location.
///
/// `$MD2HTML_CONFIG` if set, otherwise:
///
/// - Linux: ~/.config/md2html/config.toml
/// - macOS: ~/Library/Application\ Support/md2html/config.toml
/// - Windows: ~\AppData\Roaming\md2html\config\config.toml
pub fn config_file_path() -> Option<PathBuf> {
    std::env::var_os(CONFIG_FILE_ENV)
        .map(PathBuf::from)
        .or_else(|| {
            ProjectDirs::from("", "", "md2html")
                .map(|dirs| dirs.config_dir().join("config.toml"))
        })
}

/// Loads the config from `specified_config_file` or [`config_file_path`].
///
/// A missing or unreadable file yields the default config. A file that fails
/// to deserialize also yields the default config, the error is returned in
/// [`LoadedConfig::maybe_error`] so that the caller can report it once logging
/// is set up.
pub fn load_config(specified_config_file: Option<PathBuf>) -> LoadedConfig {
    let Some(config_file) = specified_config_file.or_else(config_file_path) else {
        return LoadedConfig {
            config: Config::default(),
            file_path: None,
            maybe_error: None,
        };
    };

    let mut maybe_config_err = None;
    let config: Config = std::fs::read_to_string(&config_file)
        .ok()
        .and_then(|contents| {
            toml::from_str(&contents)
                .map_err(|err| {
                    maybe_config_err.replace(err);
                })
                .ok()
        })
        .unwrap_or_default();

    LoadedConfig {
        config,
        file_path: Some(config_file),
        maybe_error: maybe_config_err,
    }
}

/// Conversion service configuration.
#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct ConversionConfig {
    /// URL of the markdown API, overridden by `--markdown-api`.
    pub api_url: Option<String>,

    /// Request timeout in seconds, no timeout if absent.
    pub timeout_secs: Option<u64>,

    /// Value of the `User-Agent` header sent to the API.
    pub user_agent: Option<String>,
}

/// Output document configuration.
#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct DocumentConfig {
    /// Document title, overridden by `--title`.
    pub title: Option<String>,

    /// Page template file, overridden by `--template`.
    ///
    /// The bundled template is used if neither is given.
    pub template: Option<PathBuf>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct LogConfig {
    /// Specify the log file path, logs go to stderr if absent.
    pub log_file: Option<String>,

    /// Specify the max log level.
    ///
    /// `RUST_LOG` takes precedence when it is set.
    pub max_level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_file: None,
            max_level: "info".into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Config {
    /// Conversion service configuration.
    pub conversion: ConversionConfig,

    /// Output document configuration.
    pub document: DocumentConfig,

    /// Log configuration.
    pub log: LogConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config() {
        let toml_content = r#"
          [conversion]
          api-url = "http://localhost:8080/markdown"
          timeout-secs = 30

          [document]
          title = "Handbook"
          template = "/srv/templates/page.html"

          [log]
          max-level = "debug"
          log-file = "/tmp/md2html.log"
"#;
        let user_config: Config =
            toml::from_str(toml_content).expect("Failed to deserialize config");

        assert_eq!(
            user_config,
            Config {
                conversion: ConversionConfig {
                    api_url: Some("http://localhost:8080/markdown".to_string()),
                    timeout_secs: Some(30),
                    user_agent: None,
                },
                document: DocumentConfig {
                    title: Some("Handbook".to_string()),
                    template: Some(PathBuf::from("/srv/templates/page.html")),
                },
                log: LogConfig {
                    log_file: Some("/tmp/md2html.log".to_string()),
                    max_level: "debug".to_string(),
                },
            }
        );
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let user_config: Config = toml::from_str("[document]\ntitle = \"Docs\"\n").unwrap();
        assert_eq!(user_config.document.title.as_deref(), Some("Docs"));
        assert_eq!(user_config.conversion, ConversionConfig::default());
        assert_eq!(user_config.log.max_level, "info");
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        assert!(toml::from_str::<Config>("[conversion]\nretries = 3\n").is_err());
    }

    #[test]
    fn test_config_serialize() {
        let config = Config::default();
        toml::to_string_pretty(&config).expect("Serialize config is okay");
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config_file = dir.path().join("config.toml");
        std::fs::write(&config_file, "[log]\nmax-level = \"warn\"\n").unwrap();

        let loaded = load_config(Some(config_file.clone()));
        assert!(loaded.maybe_error.is_none());
        assert_eq!(loaded.file_path, Some(config_file));
        assert_eq!(loaded.config.log.max_level, "warn");
    }

    #[test]
    fn test_load_missing_config_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let loaded = load_config(Some(dir.path().join("missing.toml")));
        assert!(loaded.maybe_error.is_none());
        assert_eq!(loaded.config, Config::default());
    }

    #[test]
    fn test_load_malformed_config_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config_file = dir.path().join("config.toml");
        std::fs::write(&config_file, "[document\ntitle = 1\n").unwrap();

        let loaded = load_config(Some(config_file));
        assert!(loaded.maybe_error.is_some());
        assert_eq!(loaded.config, Config::default());
    }
}

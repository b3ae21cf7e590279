use std::fs;
use std::path::{Path, PathBuf};

use directory_core::{DirectoryOptions, Source, SourceError};
use directory_logging::directory_info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::cli::Cli;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("no data source configured; pass --url, --sheet-id or a config file with `source`")]
    MissingSource,
    #[error(transparent)]
    Source(#[from] SourceError),
}

/// On-disk configuration, written in RON.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub source: Option<Source>,
    pub options: DirectoryOptions,
}

/// Configuration after file and command-line flags are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub url: String,
    pub options: DirectoryOptions,
}

pub(crate) fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = ron::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    directory_info!("Loaded config from {:?}", path);
    Ok(config)
}

/// Flags win over the config file.
pub(crate) fn resolve(cli: &Cli) -> Result<Settings, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    if let Some(url) = &cli.url {
        config.source = Some(Source::Url(url.clone()));
    } else if let Some(sheet_id) = &cli.sheet_id {
        config.source = Some(Source::Sheet {
            sheet_id: sheet_id.clone(),
            gid: cli.gid.clone(),
        });
    }
    if let Some(page_size) = cli.page_size {
        config.options.page_size = page_size;
    }
    if cli.keep_blank_names {
        config.options.drop_blank_name = false;
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config.options.timeout_ms = timeout_ms;
    }

    let source = config.source.ok_or(ConfigError::MissingSource)?;
    Ok(Settings {
        url: source.resolve()?.to_string(),
        options: config.options,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use directory_core::SearchField;
    use tempfile::NamedTempFile;

    use super::*;

    fn write_config(text: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    #[test]
    fn config_file_fills_missing_fields_with_defaults() {
        let file = write_config(
            r#"(
                source: Some(Sheet(sheet_id: "abc123", gid: Some("9"))),
                options: (page_size: 6, match_fields: [name, zip]),
            )"#,
        );
        let cli = Cli {
            config: Some(file.path().to_path_buf()),
            ..Cli::default()
        };

        let settings = resolve(&cli).unwrap();
        assert_eq!(
            settings.url,
            "https://docs.google.com/spreadsheets/d/abc123/gviz/tq?tqx=out:json&gid=9"
        );
        assert_eq!(settings.options.page_size, 6);
        assert_eq!(
            settings.options.match_fields,
            vec![SearchField::Name, SearchField::Zip]
        );
        assert!(settings.options.drop_blank_name);
        assert_eq!(settings.options.window_width, 3);
    }

    #[test]
    fn flags_override_file() {
        let file = write_config(r#"(source: Some(Url("https://example.com/a")))"#);
        let cli = Cli {
            config: Some(file.path().to_path_buf()),
            url: Some("https://example.com/b".to_string()),
            keep_blank_names: true,
            timeout_ms: Some(500),
            ..Cli::default()
        };

        let settings = resolve(&cli).unwrap();
        assert_eq!(settings.url, "https://example.com/b");
        assert!(!settings.options.drop_blank_name);
        assert_eq!(settings.options.timeout_ms, 500);
    }

    #[test]
    fn missing_source_is_an_error() {
        assert!(matches!(
            resolve(&Cli::default()),
            Err(ConfigError::MissingSource)
        ));
    }

    #[test]
    fn unreadable_and_invalid_files_are_reported() {
        let cli = Cli {
            config: Some(PathBuf::from("/definitely/not/here.ron")),
            ..Cli::default()
        };
        assert!(matches!(resolve(&cli), Err(ConfigError::Read { .. })));

        let file = write_config("(source: 42");
        let cli = Cli {
            config: Some(file.path().to_path_buf()),
            ..Cli::default()
        };
        assert!(matches!(resolve(&cli), Err(ConfigError::Parse { .. })));
    }
}

//! Configuration discovery for the `folio` command.
//!
//! A run uses at most one TOML file. Candidates are tried in precedence
//! order and the file that is found is validated before rendering starts, so
//! a bad tag or depth never reaches the renderer.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use folio::{
    FolioError, builtins::is_valid_tag, config::AppConfig,
    export::html::is_valid_attribute_name, render::MAX_DEPTH_LIMIT,
};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<ConfigError> for FolioError {
    fn from(err: ConfigError) -> Self {
        FolioError::Config(err.to_string())
    }
}

/// Where a configuration candidate comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    /// `--config` on the command line; must exist.
    Explicit,
    /// `folio/config.toml` below the working directory.
    Local,
    /// The platform configuration directory.
    System,
}

/// Candidate files in precedence order.
///
/// An explicit path shadows every other location, so it is the only
/// candidate when given.
fn candidates(explicit_path: Option<&Path>) -> Vec<(Origin, PathBuf)> {
    if let Some(path) = explicit_path {
        return vec![(Origin::Explicit, path.to_path_buf())];
    }

    let mut candidates = vec![(Origin::Local, PathBuf::from("folio/config.toml"))];
    match ProjectDirs::from("com", "folio", "folio") {
        Some(dirs) => candidates.push((Origin::System, dirs.config_dir().join("config.toml"))),
        None => debug!("Could not determine platform-specific config directory"),
    }
    candidates
}

/// Loads the render configuration for a CLI run.
///
/// The first existing file among the explicit `--config` path, the local
/// `folio/config.toml` and the platform configuration directory wins. With no
/// file at all the defaults apply.
///
/// # Errors
///
/// Returns `FolioError::Config` when an explicit path is missing, or the
/// selected file does not parse or fails validation.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, FolioError> {
    let explicit_path: Option<&Path> = explicit_path.as_ref().map(|path| path.as_ref());

    for (origin, path) in candidates(explicit_path) {
        if path.exists() {
            info!(origin:?, path = path.display().to_string(); "Loading configuration");
            return load_config_file(&path);
        }
        if origin == Origin::Explicit {
            return Err(ConfigError::MissingFile(path).into());
        }
        debug!(origin:?, path = path.display().to_string(); "Configuration file not found");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

fn load_config_file(path: &Path) -> Result<AppConfig, FolioError> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    let max_depth = config.render().max_depth();
    if !(1..=MAX_DEPTH_LIMIT).contains(&max_depth) {
        return Err(ConfigError::Validation(format!(
            "render.max_depth must be between 1 and {MAX_DEPTH_LIMIT}, got {max_depth}"
        )));
    }

    for (name, entry) in config.components() {
        if name.is_empty() || name.split('.').any(str::is_empty) {
            return Err(ConfigError::Validation(format!(
                "invalid component name `{name}`"
            )));
        }
        if !is_valid_tag(entry.tag()) {
            return Err(ConfigError::Validation(format!(
                "component `{name}` has an invalid tag `{}`",
                entry.tag()
            )));
        }
        if let Some((attribute, _)) = entry
            .attributes()
            .named()
            .find(|(attribute, _)| !is_valid_attribute_name(attribute))
        {
            return Err(ConfigError::Validation(format!(
                "component `{name}` has an invalid attribute name `{attribute}`"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_explicit_config() {
        let file = config_file(
            r#"
            [output]
            pretty = true

            [components.h2]
            tag = "h2"
            "#,
        );

        let config = load_config(Some(file.path())).unwrap();

        assert!(config.output().pretty());
        assert_eq!(config.components().len(), 1);
    }

    #[test]
    fn test_missing_explicit_config() {
        let result = load_config(Some("does/not/exist.toml"));

        assert!(matches!(result, Err(FolioError::Config(msg)) if msg.contains("Missing")));
    }

    #[test]
    fn test_invalid_toml() {
        let file = config_file("[render\nmax_depth = ");

        let result = load_config(Some(file.path()));

        assert!(matches!(result, Err(FolioError::Config(msg)) if msg.contains("parse")));
    }

    #[test]
    fn test_validation_rejects_empty_tag() {
        let file = config_file("[components.h2]\ntag = \"\"\n");

        let result = load_config(Some(file.path()));

        assert!(matches!(result, Err(FolioError::Config(msg)) if msg.contains("invalid tag")));
    }

    #[test]
    fn test_validation_rejects_zero_depth() {
        let file = config_file("[render]\nmax_depth = 0\n");

        assert!(load_config(Some(file.path())).is_err());
    }

    #[test]
    fn test_validation_rejects_depth_above_limit() {
        let file = config_file("[render]\nmax_depth = 1000000\n");

        let result = load_config(Some(file.path()));

        assert!(matches!(result, Err(FolioError::Config(msg)) if msg.contains("max_depth")));
    }

    #[test]
    fn test_validation_rejects_markup_in_tag() {
        let file = config_file("[components.h2]\ntag = \"h2><script\"\n");

        let result = load_config(Some(file.path()));

        assert!(matches!(result, Err(FolioError::Config(msg)) if msg.contains("invalid tag")));
    }

    #[test]
    fn test_validation_rejects_markup_in_attribute_name() {
        let file = config_file(
            "[components.h2]\ntag = \"h2\"\nattributes = { \"x\\\"><b\" = \"v\" }\n",
        );

        let result = load_config(Some(file.path()));

        assert!(
            matches!(result, Err(FolioError::Config(msg)) if msg.contains("invalid attribute name"))
        );
    }

    #[test]
    fn test_explicit_path_shadows_other_locations() {
        let found = candidates(Some(Path::new("custom.toml")));

        assert_eq!(found, [(Origin::Explicit, PathBuf::from("custom.toml"))]);
    }
}

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::cli::Cli;
use crate::format::FormatConfig;

/// Project-local config file, looked up in the current directory.
pub const LOCAL_CONFIG: &str = "mkcomp.toml";

/// Language variant, selecting the template and the file extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Js,
    Ts,
}

impl Language {
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "js" => Ok(Self::Js),
            "ts" => Ok(Self::Ts),
            _ => bail!("unknown language '{raw}'; expected js or ts"),
        }
    }

    /// Extension for the component source file.
    pub fn component_ext(self) -> &'static str {
        match self {
            Self::Js => "js",
            Self::Ts => "tsx",
        }
    }

    /// Extension for the index re-export file.
    pub fn index_ext(self) -> &'static str {
        match self {
            Self::Js => "js",
            Self::Ts => "ts",
        }
    }
}

/// Fully resolved options for one invocation. Immutable after `resolve`.
#[derive(Debug, Clone)]
pub struct Options {
    pub language: Language,
    pub target_dir: PathBuf,
    pub scss_module: bool,
}

/// Raw per-file configuration. Every key optional; merged per-key.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    pub lang: Option<String>,
    pub dir: Option<PathBuf>,
    pub scss_module: Option<bool>,
    pub format: Option<FormatConfig>,
}

impl FileConfig {
    /// Overlay `over` on top of `self`; set keys in `over` win.
    fn merge(self, over: FileConfig) -> FileConfig {
        FileConfig {
            lang: over.lang.or(self.lang),
            dir: over.dir.or(self.dir),
            scss_module: over.scss_module.or(self.scss_module),
            format: over.format.or(self.format),
        }
    }
}

/// Load the global and project-local config files and merge them
/// (local wins, per key). Missing files are fine; unreadable ones are not.
pub fn discover() -> Result<FileConfig> {
    let mut config = FileConfig::default();

    if let Some(path) = global_config_path() {
        if let Some(global) = load_file(&path)? {
            config = config.merge(global);
        }
    }
    if let Some(local) = load_file(Path::new(LOCAL_CONFIG))? {
        config = config.merge(local);
    }

    Ok(config)
}

fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("mkcomp").join("config.toml"))
}

pub fn load_file(path: &Path) -> Result<Option<FileConfig>> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    let config =
        toml::from_str(&raw).with_context(|| format!("parsing TOML {}", path.display()))?;
    Ok(Some(config))
}

/// Merge CLI flags over discovered config over built-in defaults,
/// validating flag values. Later sources win.
pub fn resolve(cli: &Cli, file: FileConfig) -> Result<(Options, FormatConfig)> {
    let language = match cli.lang.as_deref().or(file.lang.as_deref()) {
        Some(raw) => Language::parse(raw)?,
        None => Language::Js,
    };

    let target_dir = cli
        .dir
        .clone()
        .or(file.dir)
        .unwrap_or_else(|| PathBuf::from("src/components"));

    let scss_module = match cli.scss_module.as_deref() {
        Some(raw) => parse_bool_flag(raw)?,
        None => file.scss_module.unwrap_or(true),
    };

    let options = Options {
        language,
        target_dir,
        scss_module,
    };
    Ok((options, file.format.unwrap_or_default()))
}

fn parse_bool_flag(raw: &str) -> Result<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => bail!("invalid --scss-module value '{raw}'; expected true or false"),
    }
}

use std::fs;
use std::{env, path::Path, path::PathBuf};

use color_eyre::{eyre::WrapErr, Result};
use directories::ProjectDirs;
use form::RuleConfig;
use indexmap::IndexMap;
use lazy_static::lazy_static;
use serde::Deserialize;
use tracing::{debug, warn};

/// Field name -> configured rule options for one form.
pub type RuleOverrides = IndexMap<String, RuleConfig>;

/// Form id -> rule overrides, read from `forms.json5`.
pub type FormOverrides = IndexMap<String, RuleOverrides>;

pub const FORMS_FILE: &str = "forms.json5";

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub data_dir: PathBuf,
    #[serde(default)]
    pub config_dir: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(skip)]
    pub forms: FormOverrides,
}

lazy_static! {
    pub static ref PROJECT_NAME: String = env!("CARGO_CRATE_NAME").to_uppercase().to_string();
    pub static ref DATA_FOLDER: Option<PathBuf> =
        env::var(format!("{}_DATA", PROJECT_NAME.clone()))
            .ok()
            .map(PathBuf::from);
    pub static ref CONFIG_FOLDER: Option<PathBuf> =
        env::var(format!("{}_CONFIG", PROJECT_NAME.clone()))
            .ok()
            .map(PathBuf::from);
}

impl Config {
    pub fn new() -> Result<Self> {
        Self::load(&get_config_dir(), &get_data_dir())
    }

    /// Load `config.json5` / `config.toml` and `forms.json5` from `config_dir`.
    /// Every file is optional.
    pub fn load(config_dir: &Path, data_dir: &Path) -> Result<Self> {
        let mut builder = config::Config::builder()
            .set_default("data_dir", data_dir.to_string_lossy().as_ref())?
            .set_default("config_dir", config_dir.to_string_lossy().as_ref())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.toml", config::FileFormat::Toml),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            let source = config::File::from(config_dir.join(file))
                .format(*format)
                .required(false);
            builder = builder.add_source(source);
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            debug!(dir = %config_dir.display(), "no configuration file found, using defaults");
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;
        cfg.forms = load_form_overrides(config_dir)?;
        Ok(cfg)
    }

    /// Rule overrides for the form with the given id, if any were configured.
    pub fn overrides(&self, form_id: &str) -> Option<&RuleOverrides> {
        self.forms.get(form_id)
    }
}

/// Read `forms.json5` from `config_dir`. A missing file yields no overrides.
pub fn load_form_overrides(config_dir: &Path) -> Result<FormOverrides> {
    let path = config_dir.join(FORMS_FILE);
    if !path.exists() {
        return Ok(FormOverrides::new());
    }
    let raw = fs::read_to_string(&path)
        .wrap_err_with(|| format!("reading {}", path.display()))?;
    let forms: FormOverrides =
        json5::from_str(&raw).wrap_err_with(|| format!("parsing {}", path.display()))?;
    for id in forms.keys() {
        if !crate::dialogs::FORM_IDS.contains(&id.as_str()) {
            warn!(form = %id, "overrides for unknown form are ignored");
        }
    }
    Ok(forms)
}

pub fn get_data_dir() -> PathBuf {
    let directory = if let Some(s) = DATA_FOLDER.clone() {
        s
    } else if let Some(proj_dirs) = project_directory() {
        proj_dirs.data_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".data")
    };
    directory
}

pub fn get_config_dir() -> PathBuf {
    let directory = if let Some(s) = CONFIG_FOLDER.clone() {
        s
    } else if let Some(proj_dirs) = project_directory() {
        proj_dirs.config_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".config")
    };
    directory
}

fn project_directory() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "backoffice", env!("CARGO_PKG_NAME"))
}

use anyhow::{anyhow, Context, Result};
use directories_next::ProjectDirs;
use serde::Deserialize;
use std::env;
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::media::ImageMode;


const ENV_ROOT: &'static str = "CHOICE_QUIZ_ROOT";
const ENV_SHUFFLE: &'static str = "CHOICE_QUIZ_SHUFFLE";
const ENV_IMAGE_MODE: &'static str = "CHOICE_QUIZ_IMAGE_MODE";

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub quiz_root: PathBuf,
    pub catalog_file: String,
    pub default_source: String,
    pub shuffle: bool,
    pub image_mode: ImageMode,
    pub default_set_id: String,
    pub strict_validation: bool,
    pub image_templates: Vec<String>,
    pub image_extensions: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            quiz_root: PathBuf::from("."),
            catalog_file: "quizzes.json".to_owned(),
            default_source: "quiz_data2.csv".to_owned(),
            shuffle: false,
            image_mode: ImageMode::Convention,
            default_set_id: "default".to_owned(),
            strict_validation: false,
            image_templates: vec![
                "images/explanations/{set}/explain_{id}".to_owned(),
                "images/{set}/explain_{id}".to_owned(),
            ],
            image_extensions: vec!["png".to_owned(), "jpg".to_owned(), "webp".to_owned()],
        }
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_ref() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" | "" => Ok(false),
        other => Err(anyhow!("Expected true or false, got `{}`", other)),
    }
}

fn parse_image_mode(value: &str) -> Result<ImageMode> {
    match value.trim().to_lowercase().as_ref() {
        "legacy" => Ok(ImageMode::Legacy),
        "convention" => Ok(ImageMode::Convention),
        other => Err(anyhow!("Expected legacy or convention, got `{}`", other)),
    }
}

pub fn get_settings_file() -> Option<PathBuf> {
    ProjectDirs::from("", "", "choice-quiz").map(|dirs| dirs.config_dir().join("settings.json"))
}

impl Settings {
    /// Settings file from the user config directory, then environment.
    pub fn load() -> Result<Settings> {
        let mut settings = match get_settings_file() {
            Some(path) if path.exists() => Settings::open(&path)?,
            _ => Settings::default(),
        };
        settings.apply_overrides(|key| env::var(key).ok())?;
        Ok(settings)
    }

    pub fn open(path: &Path) -> Result<Settings> {
        let file =
            File::open(path).with_context(|| format!("Could not open settings file {:?}", path))?;
        let settings: Settings = serde_json::from_reader(file)
            .with_context(|| format!("Could not parse settings file {:?}", path))?;
        Ok(settings)
    }

    fn apply_overrides<F>(&mut self, var: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(root) = var(ENV_ROOT) {
            self.quiz_root = PathBuf::from(root);
        }
        if let Some(shuffle) = var(ENV_SHUFFLE) {
            self.shuffle = parse_flag(&shuffle).context(ENV_SHUFFLE)?;
        }
        if let Some(mode) = var(ENV_IMAGE_MODE) {
            self.image_mode = parse_image_mode(&mode).context(ENV_IMAGE_MODE)?;
        }
        Ok(())
    }

    pub fn get_catalog_path(&self) -> PathBuf {
        self.quiz_root.join(&self.catalog_file)
    }

    pub fn get_source_path(&self, file: &str) -> PathBuf {
        self.quiz_root.join(file)
    }
}

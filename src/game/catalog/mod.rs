use lazy_static::lazy_static;
use log::warn;
use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use unidecode::unidecode;

use crate::config::Settings;
use crate::error::LoadError;


lazy_static! {
    static ref FORBIDDEN_SET_ID_CHARACTERS_REGEX: Regex = Regex::new("[^a-z0-9_-]").unwrap();
    static ref WHITESPACE_REGEX: Regex = Regex::new("\\s+").unwrap();
}

/// Turns a catalog id or file stem into something usable as a directory name.
pub fn sanitize_set_id(id: &str) -> String {
    let id = unidecode(id).to_lowercase();
    let id = WHITESPACE_REGEX.replace_all(id.trim(), "-");
    FORBIDDEN_SET_ID_CHARACTERS_REGEX
        .replace_all(&id, "")
        .into()
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
struct RawCatalogEntry {
    id: Option<String>,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    question_count: Option<u32>,
    file: String,
}

#[derive(Deserialize)]
struct RawCatalog {
    quizzes: Vec<RawCatalogEntry>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    pub description: String,
    pub question_count: Option<u32>,
    pub file: String,
}

impl CatalogEntry {
    fn new(raw: RawCatalogEntry, default_set_id: &str) -> Self {
        let id = raw
            .id
            .as_deref()
            .map(sanitize_set_id)
            .filter(|id| !id.is_empty())
            .or_else(|| {
                Path::new(&raw.file)
                    .file_stem()
                    .map(|stem| sanitize_set_id(&stem.to_string_lossy()))
                    .filter(|id| !id.is_empty())
            })
            .unwrap_or_else(|| default_set_id.to_owned());
        CatalogEntry {
            id,
            name: raw.name,
            description: raw.description,
            question_count: raw.question_count,
            file: raw.file,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn parse(text: &str, default_set_id: &str) -> Result<Catalog, serde_json::Error> {
        let raw: RawCatalog = serde_json::from_str(text)?;
        Ok(Catalog::from_raw(raw, default_set_id))
    }

    pub fn open(path: &Path, default_set_id: &str) -> Result<Catalog, LoadError> {
        let text = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Catalog::parse(&text, default_set_id).map_err(|e| LoadError::Catalog {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// The manifest from `settings`, or a catalog holding only the default
    /// question set if the manifest cannot be read.
    pub fn load(settings: &Settings) -> Catalog {
        let path = settings.get_catalog_path();
        match Catalog::open(&path, &settings.default_set_id) {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!("Falling back to {}: {:#}", settings.default_source, anyhow::Error::new(e));
                Catalog::fallback(settings)
            }
        }
    }

    pub fn fallback(settings: &Settings) -> Catalog {
        let raw = RawCatalogEntry {
            id: None,
            name: "Quiz".to_owned(),
            description: String::new(),
            question_count: None,
            file: settings.default_source.clone(),
        };
        Catalog {
            entries: vec![CatalogEntry::new(raw, &settings.default_set_id)],
        }
    }

    fn from_raw(raw: RawCatalog, default_set_id: &str) -> Catalog {
        Catalog {
            entries: raw
                .quizzes
                .into_iter()
                .map(|e| CatalogEntry::new(e, default_set_id))
                .collect(),
        }
    }

    pub fn get_entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }
}

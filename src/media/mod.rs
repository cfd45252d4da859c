use futures::future::{BoxFuture, FutureExt};
use itertools::Itertools;
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::config::Settings;

pub mod slot;

pub use slot::{MediaRequest, MediaSlot};

#[cfg(test)]
mod tests;

const LEGACY_TEMPLATE: &'static str = "images/explanations/explain_{id}";
const SET_PLACEHOLDER: &'static str = "{set}";
const ID_PLACEHOLDER: &'static str = "{id}";
const ID_WIDTH: usize = 3;

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ImageMode {
    /// Only the flat `images/explanations/explain_NNN` layout.
    Legacy,
    /// Per-set directories first, then the flat layout.
    Convention,
}

/// Checks whether an asset exists at a candidate path.
pub trait AssetProbe {
    fn probe<'a>(&'a self, candidate: &'a str) -> BoxFuture<'a, bool>;
}

/// Probes candidates as files under a root directory.
#[derive(Clone, Debug)]
pub struct FsProbe {
    root: PathBuf,
}

impl FsProbe {
    pub fn new(root: PathBuf) -> Self {
        FsProbe { root }
    }
}

impl AssetProbe for FsProbe {
    fn probe<'a>(&'a self, candidate: &'a str) -> BoxFuture<'a, bool> {
        async move {
            fs::metadata(self.root.join(candidate))
                .map(|m| m.is_file())
                .unwrap_or(false)
        }
        .boxed()
    }
}

#[derive(Clone, Debug)]
pub struct ImageResolver {
    mode: ImageMode,
    templates: Vec<String>,
    extensions: Vec<String>,
    default_set_id: String,
}

impl ImageResolver {
    pub fn new(settings: &Settings, mode: ImageMode) -> Self {
        ImageResolver {
            mode,
            templates: settings.image_templates.clone(),
            extensions: settings.image_extensions.clone(),
            default_set_id: settings.default_set_id.clone(),
        }
    }

    /// Every path worth trying for a question, most preferred first.
    pub fn candidates(&self, set_id: &str, question_id: i64) -> Vec<String> {
        let set_id = if set_id.is_empty() {
            self.default_set_id.as_str()
        } else {
            set_id
        };
        let padded_id = format!("{:0width$}", question_id, width = ID_WIDTH);

        let templates: Vec<&str> = match self.mode {
            ImageMode::Legacy => vec![LEGACY_TEMPLATE],
            ImageMode::Convention => self
                .templates
                .iter()
                .map(|t| t.as_str())
                .chain(std::iter::once(LEGACY_TEMPLATE))
                .collect(),
        };

        templates
            .iter()
            .map(|t| {
                t.replace(SET_PLACEHOLDER, set_id)
                    .replace(ID_PLACEHOLDER, &padded_id)
            })
            .cartesian_product(self.extensions.iter())
            .map(|(stem, extension)| format!("{}.{}", stem, extension))
            .unique()
            .collect()
    }

    #[cfg(test)]
    pub async fn resolve<P: AssetProbe + ?Sized>(
        &self,
        probe: &P,
        set_id: &str,
        question_id: i64,
    ) -> Option<String> {
        self.resolve_while(probe, set_id, question_id, || true).await
    }

    /// Tries candidates one at a time and stops at the first hit. Gives up
    /// early once `is_relevant` turns false.
    pub async fn resolve_while<P, F>(
        &self,
        probe: &P,
        set_id: &str,
        question_id: i64,
        is_relevant: F,
    ) -> Option<String>
    where
        P: AssetProbe + ?Sized,
        F: Fn() -> bool,
    {
        for candidate in self.candidates(set_id, question_id) {
            if !is_relevant() {
                debug!("Abandoning image lookup for question {}", question_id);
                return None;
            }
            debug!("Probing explanation image {}", candidate);
            if probe.probe(&candidate).await {
                return Some(candidate);
            }
        }
        debug!("No explanation image for question {}", question_id);
        None
    }
}

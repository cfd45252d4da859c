use anyhow::Result;
use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::output::{GameOutput, Message};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Entry {
    Text(Message),
    Audio(PathBuf),
}

#[derive(Clone, Default)]
pub struct MockGameOutput {
    entries: Arc<RwLock<Vec<Entry>>>,
}

impl MockGameOutput {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn flush(&self) -> Vec<Message> {
        let entries = std::mem::replace(&mut *self.entries.write(), Vec::new());
        entries
            .into_iter()
            .filter_map(|entry| match entry {
                Entry::Text(message) => Some(message),
                Entry::Audio(_) => None,
            })
            .collect()
    }

    pub fn contains_message(&self, message: &Message) -> bool {
        self.entries
            .read()
            .iter()
            .any(|entry| *entry == Entry::Text(message.clone()))
    }

    pub fn is_playing_audio(&self, path: &Path) -> bool {
        self.entries
            .read()
            .iter()
            .rev()
            .find_map(|entry| match entry {
                Entry::Audio(source) => Some(source.as_path() == path),
                Entry::Text(_) => None,
            })
            .unwrap_or(false)
    }
}

impl GameOutput for MockGameOutput {
    fn say(&self, message: &Message) {
        self.entries.write().push(Entry::Text(message.clone()));
    }

    fn play_file_audio(&self, path: &Path) -> Result<()> {
        self.entries.write().push(Entry::Audio(path.to_path_buf()));
        Ok(())
    }
}

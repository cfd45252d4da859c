use crate::config::Settings;
use crate::media::ImageMode;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SessionSettings {
    pub shuffle: bool,
    pub image_mode: ImageMode,
}

impl Default for SessionSettings {
    fn default() -> Self {
        SessionSettings {
            shuffle: false,
            image_mode: ImageMode::Convention,
        }
    }
}

impl From<&Settings> for SessionSettings {
    fn from(settings: &Settings) -> Self {
        SessionSettings {
            shuffle: settings.shuffle,
            image_mode: settings.image_mode,
        }
    }
}

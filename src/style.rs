use std::collections::BTreeMap;

use crate::{config::Styles, model::StyleTag};

/// Speaker name to highlight lookup. Names match exactly; anything unmapped
/// gets the default tag.
#[derive(Debug, Clone)]
pub struct StylePalette {
    speakers: BTreeMap<String, StyleTag>,
    default: StyleTag,
}

impl StylePalette {
    pub fn new(speakers: BTreeMap<String, StyleTag>, default: StyleTag) -> Self {
        Self { speakers, default }
    }

    pub fn from_config(cfg: &Styles) -> Self {
        let speakers = cfg
            .speakers
            .iter()
            .map(|(name, tag)| (name.clone(), StyleTag::new(tag.as_str())))
            .collect();
        Self::new(speakers, StyleTag::new(cfg.default.as_str()))
    }

    pub fn lookup(&self, speaker: &str) -> StyleTag {
        self.speakers
            .get(speaker)
            .unwrap_or(&self.default)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.speakers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.speakers.is_empty()
    }
}

impl Default for StylePalette {
    fn default() -> Self {
        Self::new(BTreeMap::new(), StyleTag::new(StyleTag::NONE))
    }
}

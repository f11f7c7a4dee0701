use derive_more::{AsRef, Display};

/// Normalized free-form label used for equipment and injuries.
///
/// Tags are trimmed, lower-cased and have runs of whitespace, `_` and `-`
/// collapsed into a single `-`, so `"Knee Injury"` and `"knee_injury"` compare
/// equal.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(String);

impl Tag {
    /// Equipment sentinel meaning "no equipment required".
    pub const NONE: &'static str = "none";

    pub fn new(value: &str) -> Result<Self, TagError> {
        let mut normalized = String::with_capacity(value.len());
        let mut pending_separator = false;

        for c in value.trim().chars() {
            if c.is_whitespace() || c == '_' || c == '-' {
                pending_separator = true;
                continue;
            }
            if pending_separator && !normalized.is_empty() {
                normalized.push('-');
            }
            pending_separator = false;
            normalized.extend(c.to_lowercase());
        }

        if normalized.is_empty() {
            return Err(TagError::Empty);
        }

        Ok(Self(normalized))
    }

    /// Normalizes an injury label and maps common descriptions such as
    /// `"Knee Injury"` or `"Back Pain"` to the body-part tags used as
    /// contraindications.
    pub fn injury(value: &str) -> Result<Self, TagError> {
        let tag = Self::new(value)?;
        Ok(INJURY_ALIASES
            .iter()
            .find(|(alias, _)| *alias == tag.0)
            .map_or(tag, |(_, canonical)| Self((*canonical).to_string())))
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        self.0 == Self::NONE
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

const INJURY_ALIASES: [(&str, &str); 12] = [
    ("knee-injury", "knee"),
    ("knee-pain", "knee"),
    ("back-pain", "lower-back"),
    ("back-injury", "lower-back"),
    ("lower-back-pain", "lower-back"),
    ("shoulder-injury", "shoulder"),
    ("shoulder-pain", "shoulder"),
    ("ankle-sprain", "ankle"),
    ("ankle-injury", "ankle"),
    ("hip-pain", "hip"),
    ("wrist-pain", "wrist"),
    ("wrist-injury", "wrist"),
];

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum TagError {
    #[error("Tag must not be empty")]
    Empty,
}

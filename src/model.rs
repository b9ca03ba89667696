use std::fmt;

use serde::{Serialize, Serializer};

use crate::formats::time::format_hms;

/// A whole-second timestamp, kept as written. Components are not range
/// checked, so `00:00:60` stays `00:00:60`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Time {
    hours: u32,
    minutes: u32,
    seconds: u32,
}

impl Time {
    pub fn from_hms(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    pub fn total_seconds(self) -> u64 {
        (u64::from(self.hours) * 60 + u64::from(self.minutes)) * 60 + u64::from(self.seconds)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_hms(self.hours, self.minutes, self.seconds))
    }
}

impl Serialize for Time {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One subtitle block flattened to its time range and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedLine {
    pub start: Time,
    pub end: Time,
    pub raw_text: String,
}

impl TimedLine {
    pub fn new(start: Time, end: Time, raw_text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            raw_text: raw_text.into(),
        }
    }

    /// `HH:MM:SS - HH:MM:SS - text`, trimmed.
    pub fn display_form(&self) -> String {
        format!("{} - {} - {}", self.start, self.end, self.raw_text)
            .trim()
            .to_string()
    }
}

/// Highlight identifier attached to a speaker's cell.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct StyleTag(String);

impl StyleTag {
    /// Tag value that renderers treat as "no highlight".
    pub const NONE: &'static str = "none";

    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_none(&self) -> bool {
        self.0.is_empty() || self.0.eq_ignore_ascii_case(Self::NONE)
    }
}

impl fmt::Display for StyleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A merged speaker turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DialogueEntry {
    pub start: Time,
    pub speaker: String,
    pub text: String,
    pub style: StyleTag,
}

impl DialogueEntry {
    pub(crate) fn push_text(&mut self, part: &str) {
        self.text.push(' ');
        self.text.push_str(part);
    }
}

/// Renderer input: column labels in (timecode, speaker, text) order plus rows.
#[derive(Debug, Clone)]
pub struct DialogueTable {
    pub headers: [String; 3],
    pub entries: Vec<DialogueEntry>,
}

impl DialogueTable {
    pub fn new(headers: [String; 3], entries: Vec<DialogueEntry>) -> Self {
        Self { headers, entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn speaker_count(&self) -> usize {
        let mut names: Vec<&str> = self.entries.iter().map(|e| e.speaker.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        names.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_form_joins_times_and_text() {
        let line = TimedLine::new(Time::from_hms(0, 0, 1), Time::from_hms(0, 0, 3), "МЭТТ: Привет ");
        assert_eq!(line.display_form(), "00:00:01 - 00:00:03 - МЭТТ: Привет");
    }

    #[test]
    fn time_serializes_as_timecode() {
        let json = serde_json::to_string(&Time::from_hms(1, 2, 3)).unwrap();
        assert_eq!(json, "\"01:02:03\"");
    }

    #[test]
    fn out_of_range_components_display_as_written() {
        let t = Time::from_hms(0, 0, 60);
        assert_eq!(t.to_string(), "00:00:60");
        assert_eq!(t.total_seconds(), 60);
        assert_ne!(t, Time::from_hms(0, 1, 0));
    }

    #[test]
    fn none_tag_is_recognized() {
        assert!(StyleTag::new("none").is_none());
        assert!(StyleTag::new("").is_none());
        assert!(!StyleTag::new("yellow").is_none());
    }
}

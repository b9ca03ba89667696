//! Folds flattened subtitle lines into speaker turns.
//!
//! A line whose display form looks like `00:00:01 - 00:00:03 - МЭТТ: text`
//! opens a new turn. Any other line is appended to the open turn, or dropped
//! when no turn has been opened yet.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    model::{DialogueEntry, TimedLine},
    style::StylePalette,
};

/// Uppercase Cyrillic speaker cue after the reconstructed time range.
static HEADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{2}:\d{2}:\d{2}) - \d{2}:\d{2}:\d{2} - ([А-ЯЁ]+):\s*(.*)")
        .expect("Invalid speaker header regex")
});

/// Timing decoration left on a continuation line.
static TIMING_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{2}:\d{2}:\d{2} - \d{2}:\d{2}:\d{2} - ").expect("Invalid timing prefix regex")
});

/// Counters collected during one merge pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    pub lines: usize,
    pub headers: usize,
    pub continuations: usize,
    pub orphans: usize,
    pub blank: usize,
}

#[derive(Debug)]
enum MergeState {
    Idle,
    Accumulating(DialogueEntry),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum LineKind<'a> {
    Header { speaker: &'a str, text: &'a str },
    Continuation(&'a str),
}

fn classify(display: &str) -> LineKind<'_> {
    match HEADER_PATTERN.captures(display) {
        Some(caps) => LineKind::Header {
            speaker: caps.get(2).map_or("", |m| m.as_str()),
            text: caps.get(3).map_or("", |m| m.as_str()),
        },
        None => {
            let rest = TIMING_PREFIX
                .find(display)
                .map_or(display, |m| &display[m.end()..]);
            LineKind::Continuation(rest)
        }
    }
}

pub struct SpeakerMerger {
    palette: StylePalette,
}

impl SpeakerMerger {
    pub fn new(palette: StylePalette) -> Self {
        Self { palette }
    }

    pub fn merge<I>(&self, lines: I) -> Vec<DialogueEntry>
    where
        I: IntoIterator<Item = TimedLine>,
    {
        self.merge_with_stats(lines).0
    }

    pub fn merge_with_stats<I>(&self, lines: I) -> (Vec<DialogueEntry>, MergeStats)
    where
        I: IntoIterator<Item = TimedLine>,
    {
        let mut out = Vec::new();
        let mut stats = MergeStats::default();

        let last = lines.into_iter().fold(MergeState::Idle, |state, line| {
            stats.lines += 1;
            self.step(state, &line, &mut out, &mut stats)
        });

        if let MergeState::Accumulating(entry) = last {
            out.push(entry);
        }

        (out, stats)
    }

    fn step(
        &self,
        state: MergeState,
        line: &TimedLine,
        out: &mut Vec<DialogueEntry>,
        stats: &mut MergeStats,
    ) -> MergeState {
        if line.raw_text.trim().is_empty() {
            stats.blank += 1;
            return state;
        }

        let display = line.display_form();
        match (classify(&display), state) {
            (LineKind::Header { speaker, text }, state) => {
                stats.headers += 1;
                if let MergeState::Accumulating(done) = state {
                    out.push(done);
                }
                MergeState::Accumulating(DialogueEntry {
                    start: line.start,
                    speaker: speaker.to_string(),
                    text: text.to_string(),
                    style: self.palette.lookup(speaker),
                })
            }
            (LineKind::Continuation(rest), MergeState::Accumulating(mut entry)) => {
                stats.continuations += 1;
                entry.push_text(rest);
                MergeState::Accumulating(entry)
            }
            (LineKind::Continuation(_), MergeState::Idle) => {
                stats.orphans += 1;
                tracing::debug!(start = %line.start, "dropping line before first speaker");
                MergeState::Idle
            }
        }
    }
}

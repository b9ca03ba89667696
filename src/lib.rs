//! Turn speaker-prefixed SRT subtitles into a merged dialogue table.
//!
//! [`formats::srt::parse_blocks`] flattens subtitle blocks into
//! [`model::TimedLine`]s, [`merge::SpeakerMerger`] folds them into
//! [`model::DialogueEntry`] rows, and the writers under [`formats`] render
//! the resulting [`model::DialogueTable`].

pub mod cli;
pub mod config;
pub mod error;
pub mod formats;
pub mod merge;
pub mod model;
pub mod pipeline;
pub mod style;

pub mod delimited;
pub mod html;
pub mod json;
pub mod srt;
pub mod time;

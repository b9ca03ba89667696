use anyhow::Result;
use serde::Serialize;

use crate::{
    config::JsonCfg,
    model::{DialogueEntry, DialogueTable},
};

#[derive(Debug, Serialize)]
struct WrappedJson<'a> {
    schema: &'static str,
    version: u32,
    headers: &'a [String; 3],
    entries: &'a [DialogueEntry],
}

pub fn write_json(t: &DialogueTable, cfg: &JsonCfg) -> Result<String> {
    if cfg.wrapped {
        let w = WrappedJson {
            schema: "subtab.dialogue",
            version: 1,
            headers: &t.headers,
            entries: &t.entries,
        };
        Ok(serde_json::to_string_pretty(&w)?)
    } else {
        Ok(serde_json::to_string_pretty(&t.entries)?)
    }
}

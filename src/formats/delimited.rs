use anyhow::{Result, anyhow};
use csv::WriterBuilder;

use crate::{config::DelimitedCfg, model::DialogueTable};

pub fn write_tsv(t: &DialogueTable, cfg: &DelimitedCfg) -> Result<String> {
    write_delimited(t, b'\t', cfg.include_style)
}

pub fn write_csv(t: &DialogueTable, cfg: &DelimitedCfg) -> Result<String> {
    write_delimited(t, b',', cfg.include_style)
}

fn write_delimited(t: &DialogueTable, delimiter: u8, include_style: bool) -> Result<String> {
    let mut wtr = WriterBuilder::new().delimiter(delimiter).from_writer(vec![]);

    let mut header: Vec<&str> = t.headers.iter().map(String::as_str).collect();
    if include_style {
        header.push("style");
    }
    wtr.write_record(&header)?;

    for entry in &t.entries {
        let start = entry.start.to_string();
        let mut row = vec![start.as_str(), entry.speaker.as_str(), entry.text.as_str()];
        if include_style {
            row.push(entry.style.as_str());
        }
        wtr.write_record(&row)?;
    }

    let data = wtr.into_inner().map_err(|e| anyhow!(e.to_string()))?;
    Ok(String::from_utf8(data)?)
}

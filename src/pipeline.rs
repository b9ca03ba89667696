use anyhow::{Context, Result, anyhow};
use std::{fs, path::Path};

use crate::{
    cli::{ConvertCmd, Format},
    config::Config,
    formats,
    merge::{MergeStats, SpeakerMerger},
    model::DialogueTable,
    style::StylePalette,
};

pub fn run_convert(cmd: ConvertCmd, cfg: &Config) -> Result<()> {
    let span = tracing::info_span!("convert", input = cmd.input.as_str(), to = ?cmd.to);
    let _g = span.enter();

    let raw = read_input_to_string(&cmd.input)?;
    tracing::info!(bytes = raw.len(), "read input");

    let table = build_table(&raw, cfg);
    log_table_summary(&table, cfg);

    let rendered = render_any(&table, cmd.to, cfg)?;

    if cmd.stdout {
        print!("{rendered}");
        tracing::info!(mode = "stdout", "wrote output");
        return Ok(());
    }

    let out_path = derive_output_path(&cmd)?;
    write_output(&out_path, &rendered, cmd.overwrite)?;
    tracing::info!(path = out_path.as_str(), "saved output file");

    Ok(())
}

/// Parses and merges `raw` SRT text with the configured speaker styles.
pub fn build_table(raw: &str, cfg: &Config) -> DialogueTable {
    let lines = formats::srt::parse_blocks(raw);
    tracing::info!(lines = lines.len(), "parsed subtitle blocks");

    let palette = StylePalette::from_config(&cfg.styles);
    if palette.is_empty() {
        tracing::debug!("no speaker styles configured; every speaker gets the default tag");
    } else {
        tracing::debug!(mapped_speakers = palette.len(), "style palette ready");
    }

    let (entries, stats) = SpeakerMerger::new(palette).merge_with_stats(lines);
    log_merge_stats(&stats);

    DialogueTable::new(cfg.table.headers(), entries)
}

fn read_input_to_string(input: &str) -> Result<String> {
    if input == "-" {
        use std::io::Read;
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed reading stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(input).with_context(|| format!("failed reading input file: {input}"))
    }
}

pub fn render_any(t: &DialogueTable, fmt: Format, cfg: &Config) -> Result<String> {
    match fmt {
        Format::Html => Ok(formats::html::write_html(t, &cfg.formats.html)),
        Format::Tsv => formats::delimited::write_tsv(t, &cfg.formats.tsv),
        Format::Csv => formats::delimited::write_csv(t, &cfg.formats.csv),
        Format::Json => formats::json::write_json(t, &cfg.formats.json),
    }
}

fn log_merge_stats(stats: &MergeStats) {
    tracing::info!(
        lines = stats.lines,
        headers = stats.headers,
        continuations = stats.continuations,
        orphans = stats.orphans,
        blank = stats.blank,
        "merged speaker turns"
    );
}

fn log_table_summary(t: &DialogueTable, cfg: &Config) {
    tracing::info!(
        entries = t.entries.len(),
        speakers = t.speaker_count(),
        "table summary"
    );

    if t.is_empty() {
        tracing::warn!("no speaker headers found; output table has no rows");
    }

    if tracing::enabled!(tracing::Level::DEBUG) {
        let n = cfg.logging.debug_entry_samples.min(t.entries.len());
        for (i, e) in t.entries.iter().take(n).enumerate() {
            tracing::debug!(
                idx = i,
                start = %e.start,
                speaker = e.speaker.as_str(),
                style = e.style.as_str(),
                chars = e.text.chars().count(),
                "entry sample"
            );
        }
    }
}

fn derive_output_path(cmd: &ConvertCmd) -> Result<String> {
    if let Some(o) = &cmd.output {
        return Ok(o.clone());
    }

    if cmd.input == "-" {
        return Err(anyhow!(
            "output path required when input is stdin and --stdout is not set"
        ));
    }

    let p = Path::new(&cmd.input);
    let stem = p
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| anyhow!("bad input filename"))?;

    let parent = p.parent().unwrap_or_else(|| Path::new("."));
    let out = parent.join(format!("{stem}.{}", cmd.to.extension()));
    Ok(out.to_string_lossy().to_string())
}

fn write_output(path: &str, data: &str, overwrite: bool) -> Result<()> {
    if Path::new(path).exists() && !overwrite {
        return Err(anyhow!(
            "refusing to overwrite existing file (pass --overwrite): {path}"
        ));
    }
    fs::write(path, data).with_context(|| format!("failed writing output file: {path}"))?;
    Ok(())
}

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fs, path::Path};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: Logging,
    pub table: Table,
    pub styles: Styles,
    pub formats: Formats,
}

impl Config {
    pub fn load(path_opt: Option<&Path>) -> Result<Self> {
        let default_path = Path::new("config.toml");
        let path = if let Some(p) = path_opt {
            Some(p)
        } else if default_path.exists() {
            Some(default_path)
        } else {
            None
        };

        let mut cfg = Config::default();

        if let Some(path) = path {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed reading config file: {}", path.display()))?;
            cfg = Self::from_toml_str(&raw)
                .with_context(|| format!("failed parsing TOML config: {}", path.display()))?;
        }

        Ok(cfg)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    pub fn to_toml_pretty(&self) -> Result<String> {
        let s = toml::to_string_pretty(self).context("failed serializing config as TOML")?;
        Ok(s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Logging {
    pub level: String,
    pub format: String,
    pub debug_entry_samples: usize,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            debug_entry_samples: 20,
        }
    }
}

/// Column labels, always in (timecode, speaker, text) order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Table {
    pub timecode_header: String,
    pub speaker_header: String,
    pub text_header: String,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            timecode_header: "Timecode".to_string(),
            speaker_header: "Speaker".to_string(),
            text_header: "Text".to_string(),
        }
    }
}

impl Table {
    pub fn headers(&self) -> [String; 3] {
        [
            self.timecode_header.clone(),
            self.speaker_header.clone(),
            self.text_header.clone(),
        ]
    }
}

/// Speaker highlight table. Keys are exact uppercase speaker names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Styles {
    pub default: String,
    pub speakers: BTreeMap<String, String>,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            default: "none".to_string(),
            speakers: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Formats {
    pub tsv: DelimitedCfg,
    pub csv: DelimitedCfg,
    pub json: JsonCfg,
    pub html: HtmlCfg,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DelimitedCfg {
    /// Append a fourth `style` column.
    pub include_style: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonCfg {
    pub wrapped: bool,
}

impl Default for JsonCfg {
    fn default() -> Self {
        Self { wrapped: true }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlCfg {
    pub title: String,
    pub bold_speaker: bool,
}

impl Default for HtmlCfg {
    fn default() -> Self {
        Self {
            title: "Dialogue".to_string(),
            bold_speaker: true,
        }
    }
}

pub fn init_tracing(logging: &Logging, cli_override_level: Option<&str>) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt};

    let level = cli_override_level.unwrap_or(logging.level.as_str());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let is_json = logging.format.to_lowercase() == "json";

    // Logs go to stderr so `--stdout` output stays clean.
    if is_json {
        fmt()
            .with_env_filter(filter)
            .event_format(fmt::format().json())
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .pretty()
            .init();
    }

    tracing::info!(
        level = level,
        format = logging.format.as_str(),
        "logging initialized"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg = Config::from_toml_str(
            r#"
            [styles]
            default = "white"

            [styles.speakers]
            "МЭТТ" = "yellow"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.styles.default, "white");
        assert_eq!(cfg.styles.speakers.get("МЭТТ").map(String::as_str), Some("yellow"));
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.table.headers(), ["Timecode", "Speaker", "Text"]);
        assert!(cfg.formats.json.wrapped);
    }

    #[test]
    fn custom_headers() {
        let cfg = Config::from_toml_str(
            r#"
            [table]
            timecode_header = "Таймкод"
            speaker_header = "Персонаж"
            text_header = "Текст"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.table.headers(), ["Таймкод", "Персонаж", "Текст"]);
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let s = Config::default().to_toml_pretty().unwrap();
        let back = Config::from_toml_str(&s).unwrap();
        assert_eq!(back.logging.debug_entry_samples, 20);
        assert_eq!(back.styles.default, "none");
    }

    #[test]
    fn wrong_value_type_is_rejected() {
        assert!(Config::from_toml_str("[logging]\nlevel = 3\n").is_err());
    }
}

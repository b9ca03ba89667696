use crate::{config::HtmlCfg, model::DialogueTable};

/// Renders a standalone HTML page with one bordered table. The speaker cell
/// carries the entry's style tag as its background color.
pub fn write_html(t: &DialogueTable, cfg: &HtmlCfg) -> String {
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape(&cfg.title)));
    out.push_str(
        "<style>table { border-collapse: collapse; } \
         th, td { border: 1px solid #000; padding: 4px; vertical-align: top; }</style>\n",
    );
    out.push_str("</head>\n<body>\n<table>\n<tr>");
    for h in &t.headers {
        out.push_str(&format!("<th>{}</th>", escape(h)));
    }
    out.push_str("</tr>\n");

    for entry in &t.entries {
        out.push_str("<tr>");
        out.push_str(&format!("<td>{}</td>", entry.start));

        let mut css = Vec::new();
        if !entry.style.is_none() {
            css.push(format!("background-color: {}", escape(entry.style.as_str())));
        }
        if cfg.bold_speaker {
            css.push("font-weight: bold".to_string());
        }
        if css.is_empty() {
            out.push_str(&format!("<td>{}</td>", escape(&entry.speaker)));
        } else {
            out.push_str(&format!(
                "<td style=\"{}\">{}</td>",
                css.join("; "),
                escape(&entry.speaker)
            ));
        }

        out.push_str(&format!("<td>{}</td>", escape(&entry.text)));
        out.push_str("</tr>\n");
    }

    out.push_str("</table>\n</body>\n</html>\n");
    out
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DialogueEntry, StyleTag, Time};

    fn entry(speaker: &str, text: &str, style: &str) -> DialogueEntry {
        DialogueEntry {
            start: Time::from_hms(0, 0, 1),
            speaker: speaker.into(),
            text: text.into(),
            style: StyleTag::new(style),
        }
    }

    fn table(entries: Vec<DialogueEntry>) -> DialogueTable {
        DialogueTable::new(["Таймкод".into(), "Персонаж".into(), "Текст".into()], entries)
    }

    #[test]
    fn speaker_cell_is_highlighted_and_bold() {
        let out = write_html(&table(vec![entry("МЭТТ", "Привет", "yellow")]), &HtmlCfg::default());

        assert!(out.contains("<th>Таймкод</th><th>Персонаж</th><th>Текст</th>"));
        assert!(out.contains(
            "<tr><td>00:00:01</td><td style=\"background-color: yellow; font-weight: bold\">МЭТТ</td><td>Привет</td></tr>"
        ));
    }

    #[test]
    fn none_tag_gets_no_background() {
        let out = write_html(&table(vec![entry("ЭНН", "да", "none")]), &HtmlCfg::default());
        assert!(out.contains("<td style=\"font-weight: bold\">ЭНН</td>"));
        assert!(!out.contains("background-color"));

        let plain = HtmlCfg {
            bold_speaker: false,
            ..HtmlCfg::default()
        };
        let out = write_html(&table(vec![entry("ЭНН", "да", "none")]), &plain);
        assert!(out.contains("<td>ЭНН</td>"));
    }

    #[test]
    fn text_is_escaped() {
        let out = write_html(
            &table(vec![entry("ЭНН", "<b>\"a\" & 'b'</b>", "red\"><script>")]),
            &HtmlCfg::default(),
        );
        assert!(out.contains("<td>&lt;b&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/b&gt;</td>"));
        assert!(!out.contains("<script>"));
    }

    #[test]
    fn one_row_per_entry() {
        let out = write_html(
            &table(vec![entry("А", "1", "none"), entry("Б", "2", "none")]),
            &HtmlCfg::default(),
        );
        assert_eq!(out.matches("<tr>").count(), 3);
    }
}
